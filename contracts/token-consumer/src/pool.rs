//! Constant-product pricing.

use cosmwasm_std::{Uint128, Uint256};

use crate::error::ContractError;
use crate::state::{BPS_DENOMINATOR, FEE_BPS};

/// Output for `amount_in` against `x * y = k` after the pool fee:
///
/// `out = in_after_fee * reserve_out / (reserve_in + in_after_fee)`
pub fn get_amount_out(
    amount_in: Uint128,
    reserve_in: Uint128,
    reserve_out: Uint128,
) -> Result<Uint128, ContractError> {
    if amount_in.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "input amount must be positive".to_string(),
        });
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(ContractError::InsufficientLiquidity);
    }

    let in_after_fee = amount_in.full_mul(Uint128::from(BPS_DENOMINATOR - FEE_BPS));
    let numerator = in_after_fee * Uint256::from(reserve_out);
    let denominator = reserve_in.full_mul(Uint128::from(BPS_DENOMINATOR)) + in_after_fee;

    let amount_out = Uint128::try_from(numerator / denominator)
        .map_err(|_| ContractError::InsufficientLiquidity)?;
    if amount_out.is_zero() {
        return Err(ContractError::InsufficientLiquidity);
    }
    Ok(amount_out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_out_applies_fee() {
        // 100 in against 1_000_000 / 1_000_000: 99.7 before price impact
        let out = get_amount_out(
            Uint128::from(100u128),
            Uint128::from(1_000_000u128),
            Uint128::from(1_000_000u128),
        )
        .unwrap();
        assert_eq!(out, Uint128::from(99u128));

        let out = get_amount_out(
            Uint128::from(1_000_000u128),
            Uint128::from(1_000_000_000_000u128),
            Uint128::from(2_000_000_000_000u128),
        )
        .unwrap();
        // 2 * 997_000 minus a sub-unit price impact
        assert_eq!(out, Uint128::from(1_993_998u128));
    }

    #[test]
    fn test_round_trip_loses_about_two_fees() {
        let reserve_a = Uint128::from(10u128.pow(24));
        let reserve_z = Uint128::from(10u128.pow(24));
        let amount = Uint128::from(10u128.pow(18));

        let z = get_amount_out(amount, reserve_a, reserve_z).unwrap();
        let back = get_amount_out(z, reserve_z - z, reserve_a + amount).unwrap();

        assert!(back < amount);
        assert!(back * Uint128::from(100u128) >= amount * Uint128::from(99u128));
    }

    #[test]
    fn test_empty_pool_and_zero_input() {
        let err = get_amount_out(Uint128::one(), Uint128::zero(), Uint128::one()).unwrap_err();
        assert_eq!(err, ContractError::InsufficientLiquidity);

        let err = get_amount_out(Uint128::zero(), Uint128::one(), Uint128::one()).unwrap_err();
        assert!(matches!(err, ContractError::InvalidAmount { .. }));

        // Dust that rounds to nothing
        let err = get_amount_out(
            Uint128::one(),
            Uint128::from(1_000_000u128),
            Uint128::from(10u128),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::InsufficientLiquidity);
    }
}
