use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::Cw20ReceiveMsg;
use zeta_common::{
    InteractorByChainIdResponse, InteractorsResponse, OwnershipAction, OwnershipResponse,
    ZetaMessage, ZetaRevert,
};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub connector: String,
    pub chain_id: u64,
    /// Defaults to the instantiating account
    pub owner: Option<String>,
    pub fee_wallet: String,
    /// Defaults to 100 (1%)
    pub fee_bps: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit, provide liquidity or repay with a registered CW20
    Receive(Cw20ReceiveMsg),

    /// Withdraw unlocked collateral
    Withdraw { symbol: String, amount: Uint128 },

    /// Collect a refund that was credited while liquidity was short
    ClaimRefund { symbol: String },

    /// Lock collateral here and borrow `amount` of `borrow_symbol` on the
    /// destination chain
    Borrow {
        destination_chain_id: u64,
        collateral_symbol: String,
        borrow_symbol: String,
        amount: Uint128,
    },

    // ========================================================================
    // Owner
    // ========================================================================
    SetAsset {
        symbol: String,
        decimals: u8,
        price: Uint128,
        collateral_ratio_bps: u64,
        local_token: Option<String>,
    },
    /// Oracle feed
    SetPrice { symbol: String, price: Uint128 },
    UpdateConfig {
        fee_wallet: Option<String>,
        fee_bps: Option<u64>,
    },

    // ========================================================================
    // Interactor
    // ========================================================================
    SetInteractorByChainId { chain_id: u64, address: Binary },
    UpdateOwnership(OwnershipAction),
    OnZetaMessage(ZetaMessage),
    OnZetaRevert(ZetaRevert),
}

#[cw_serde]
pub enum ReceiveMsg {
    /// Credit the tokens as unlocked collateral of the sender
    Deposit {},
    /// Add the tokens to the lendable pool
    ProvideLiquidity {},
    /// Repay the sender's debt held against `collateral_symbol` on the
    /// collateral chain
    Repay {
        destination_chain_id: u64,
        collateral_symbol: String,
    },
}

/// Body of `CROSS_CHAIN_BORROW_MESSAGE`
#[cw_serde]
pub struct CrossChainBorrow {
    pub borrower: String,
    pub collateral_symbol: String,
    pub collateral_locked: Uint128,
    pub borrow_symbol: String,
    pub amount: Uint128,
}

/// Body of `CROSS_CHAIN_REPAY_MESSAGE`
#[cw_serde]
pub struct CrossChainRepay {
    pub borrower: String,
    pub collateral_symbol: String,
    pub borrow_symbol: String,
    pub amount: Uint128,
}

/// Body of `CROSS_CHAIN_REFUND_MESSAGE`: a repayment settled against a borrow
/// that was later reverted
#[cw_serde]
pub struct CrossChainRefund {
    pub payer: String,
    pub borrow_symbol: String,
    pub amount: Uint128,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(AssetResponse)]
    Asset { symbol: String },

    #[returns(AssetsResponse)]
    Assets {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(PositionResponse)]
    Position { address: String, symbol: String },

    #[returns(DebtResponse)]
    Debt {
        borrower: String,
        collateral_symbol: String,
        borrow_symbol: String,
    },

    #[returns(LiquidityResponse)]
    Liquidity { symbol: String },

    /// Credited refund not yet claimed
    #[returns(RefundResponse)]
    Refund { address: String, symbol: String },

    /// Collateral a new borrow would lock
    #[returns(RequiredCollateralResponse)]
    RequiredCollateral {
        collateral_symbol: String,
        borrow_symbol: String,
        amount: Uint128,
    },

    #[returns(OwnershipResponse)]
    Ownership {},

    #[returns(InteractorByChainIdResponse)]
    InteractorByChainId { chain_id: u64 },

    #[returns(InteractorsResponse)]
    Interactors {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub connector: Addr,
    pub chain_id: u64,
    pub fee_wallet: Addr,
    pub fee_bps: u64,
}

#[cw_serde]
pub struct AssetResponse {
    pub symbol: String,
    pub decimals: u8,
    pub price: Uint128,
    pub collateral_ratio_bps: u64,
    pub local_token: Option<Addr>,
}

#[cw_serde]
pub struct AssetsResponse {
    pub assets: Vec<AssetResponse>,
}

#[cw_serde]
pub struct PositionResponse {
    pub address: Addr,
    pub symbol: String,
    pub unlocked: Uint128,
    pub locked: Uint128,
    /// USD value of unlocked plus locked collateral, 18 decimals
    pub value_usd: Uint128,
}

#[cw_serde]
pub struct DebtResponse {
    pub amount: Uint128,
    pub locked: Uint128,
}

#[cw_serde]
pub struct LiquidityResponse {
    pub symbol: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct RefundResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct RequiredCollateralResponse {
    pub amount: Uint128,
}
