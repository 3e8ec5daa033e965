//! Collateral valuation.
//!
//! Prices carry `PRICE_DECIMALS` decimals and amounts carry the asset's own
//! decimals. Products are taken in `Uint256` and divided once, so each figure
//! is rounded down exactly once. Required collateral can therefore fall short
//! of the exact ratio by less than one base unit. Released collateral and the
//! repayment fee are both rounded down as well.

use cosmwasm_std::{StdResult, Uint128, Uint256};

use crate::state::{AssetConfig, BPS_DENOMINATOR, PRICE_DECIMALS};

fn pow10(exp: u32) -> Uint256 {
    Uint256::from(10u128).pow(exp)
}

/// Collateral (in `collateral` units) required to borrow `amount` of `borrow`.
///
/// `amount * price_b * ratio * 10^dec_c / (10^dec_b * 10_000 * price_c)`,
/// rounded down.
pub fn required_collateral(
    borrow: &AssetConfig,
    amount: Uint128,
    collateral: &AssetConfig,
) -> StdResult<Uint128> {
    let numerator = Uint256::from(amount)
        .checked_mul(Uint256::from(borrow.price))?
        .checked_mul(Uint256::from(borrow.collateral_ratio_bps))?
        .checked_mul(pow10(collateral.decimals as u32))?;
    let denominator = pow10(borrow.decimals as u32)
        .checked_mul(Uint256::from(BPS_DENOMINATOR))?
        .checked_mul(Uint256::from(collateral.price))?;

    Ok(Uint128::try_from(numerator.checked_div(denominator)?)?)
}

/// USD value of `amount` with 18 decimals.
pub fn usd_value(asset: &AssetConfig, amount: Uint128) -> StdResult<Uint256> {
    let numerator = Uint256::from(amount)
        .checked_mul(Uint256::from(asset.price))?
        .checked_mul(pow10(18))?;
    Ok(numerator.checked_div(pow10(asset.decimals as u32 + PRICE_DECIMALS))?)
}

/// Share of `locked` released by repaying `repaid` of `debt`, and the fee
/// taken from it.
pub fn released_collateral(
    locked: Uint128,
    repaid: Uint128,
    debt: Uint128,
    fee_bps: u64,
) -> (Uint128, Uint128) {
    let released = if repaid == debt {
        locked
    } else {
        locked.multiply_ratio(repaid, debt)
    };
    let fee = released.multiply_ratio(fee_bps, BPS_DENOMINATOR);
    (released, fee)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_WETH: u128 = 1_000_000_000_000_000_000;

    fn weth() -> AssetConfig {
        AssetConfig {
            decimals: 18,
            price: Uint128::new(292_975_270_932),
            collateral_ratio_bps: 20_000,
            local_token: None,
        }
    }

    fn usdc() -> AssetConfig {
        AssetConfig {
            decimals: 6,
            price: Uint128::new(100_000_000),
            collateral_ratio_bps: 20_000,
            local_token: None,
        }
    }

    #[test]
    fn test_required_collateral_for_1000_usdc() {
        let required =
            required_collateral(&usdc(), Uint128::new(1_000_000_000), &weth()).unwrap();
        // Exact value is 682651472131995400.0656..., floored
        assert_eq!(required, Uint128::new(682_651_472_131_995_400));
        assert_eq!(
            Uint128::new(ONE_WETH) - required,
            Uint128::new(317_348_527_868_004_600)
        );
    }

    #[test]
    fn test_half_repayment_releases_half_less_fee() {
        let locked = Uint128::new(682_651_472_131_995_400);
        let (released, fee) = released_collateral(
            locked,
            Uint128::new(500_000_000),
            Uint128::new(1_000_000_000),
            100,
        );
        assert_eq!(released, Uint128::new(341_325_736_065_997_700));
        assert_eq!(fee, Uint128::new(3_413_257_360_659_977));

        let unlocked = Uint128::new(317_348_527_868_004_600) + released - fee;
        assert_eq!(unlocked, Uint128::new(655_261_006_573_342_323));
        assert_eq!(unlocked + (locked - released) + fee, Uint128::new(ONE_WETH));
    }

    #[test]
    fn test_full_repayment_releases_everything() {
        let (released, fee) =
            released_collateral(Uint128::new(7), Uint128::new(3), Uint128::new(3), 100);
        assert_eq!(released, Uint128::new(7));
        assert_eq!(fee, Uint128::zero());
    }

    #[test]
    fn test_usd_value() {
        assert_eq!(
            usd_value(&usdc(), Uint128::new(1_000_000_000)).unwrap(),
            Uint256::from(1_000u128) * pow10(18)
        );
        // 1 WETH at 2929.75270932
        assert_eq!(
            usd_value(&weth(), Uint128::new(ONE_WETH)).unwrap(),
            Uint256::from(292_975_270_932u128) * pow10(10)
        );
    }

    #[test]
    fn test_zero_collateral_price_fails() {
        let mut collateral = weth();
        collateral.price = Uint128::zero();
        assert!(required_collateral(&usdc(), Uint128::new(1), &collateral).is_err());
    }
}
