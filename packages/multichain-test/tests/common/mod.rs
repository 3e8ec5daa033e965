#![allow(dead_code)]

use cosmwasm_std::{Binary, Uint128};
use cw20::Cw20ExecuteMsg;
use cw_multi_test::AppResponse;
use zeta_common::ZetaSendInput;
use zeta_connector::msg::ExecuteMsg as ConnectorExecuteMsg;
use zeta_connector::state::ConnectorMode;

use multichain_test::{init_tracing, Chain, ChainSpec, Network};

pub const ALICE: &str = "terra1alice";
pub const BOB: &str = "terra1bob";
pub const CAROL: &str = "terra1carol";

pub const CHAIN_A: u64 = 1;
pub const CHAIN_B: u64 = 2;

/// Chain A locks with `alice_balance` of pre-minted supply, chain B runs
/// `chain_b` (usually mint mode) with no supply.
pub fn lock_and_mint(alice_balance: u128, chain_b: ChainSpec) -> Network {
    init_tracing();
    let balances = if alice_balance == 0 {
        vec![]
    } else {
        vec![(ALICE, alice_balance)]
    };
    let mut net = Network::new();
    net.add_chain(
        Chain::new(
            ChainSpec::new("terra", CHAIN_A, ConnectorMode::LockUnlock),
            &balances,
        )
        .unwrap(),
    )
    .unwrap();
    net.add_chain(Chain::new(chain_b, &[]).unwrap()).unwrap();
    net
}

pub fn mint_chain() -> ChainSpec {
    ChainSpec::new("classic", CHAIN_B, ConnectorMode::MintBurn)
}

/// Approve the connector and send `amount` to `recipient` on another chain.
pub fn send_zeta(
    chain: &mut Chain,
    from: &str,
    destination_chain_id: u64,
    recipient: &str,
    amount: u128,
) -> anyhow::Result<AppResponse> {
    let zeta_token = chain.zeta_token.clone();
    let connector = chain.connector.clone();
    chain.execute(
        from,
        &zeta_token,
        &Cw20ExecuteMsg::IncreaseAllowance {
            spender: connector.to_string(),
            amount: Uint128::new(amount),
            expires: None,
        },
        &[],
    )?;
    chain.execute(
        from,
        &connector,
        &ConnectorExecuteMsg::Send(ZetaSendInput {
            destination_chain_id,
            destination_address: Binary::from(recipient.as_bytes()),
            destination_gas_limit: Uint128::new(100_000),
            message: Binary::default(),
            zeta_value_and_gas: Uint128::new(amount),
            zeta_params: Binary::default(),
        }),
        &[],
    )
}

/// Value in circulation across a lock chain A and a mint chain B. Tokens
/// locked on A are backing B's supply and not counted twice.
pub fn circulating(net: &Network) -> Uint128 {
    let a = net.chain(CHAIN_A).unwrap();
    let b = net.chain(CHAIN_B).unwrap();
    a.zeta_supply().unwrap() - a.locked_amount().unwrap() + b.zeta_supply().unwrap()
}
