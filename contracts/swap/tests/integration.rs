//! Integration tests for the cross-chain swap using cw-multi-test.
//!
//! Two swap instances (chain 1 and chain 2) share one App, one lock mode
//! connector and one token consumer. The test relays by reading the
//! `zeta_sent` event and calling OnReceive / OnRevert as the TSS.

use cosmwasm_std::{coins, to_json_binary, Addr, Binary, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use zeta_common::AssetInfo;

use cross_chain_swap::msg::{ExecuteMsg, InstantiateMsg, ReceiveMsg, SwapParams};
use zeta_connector::msg::ExecuteMsg as ConnectorExecuteMsg;
use zeta_connector::state::ConnectorMode;

const TSS: &str = "terra1tss";
const OWNER: &str = "terra1owner";
const USER: &str = "terra1user";
const BOB: &str = "terra1bob";
const DENOM: &str = "uluna";
const RESERVE: u128 = 1_000_000_000_000;

// ============================================================================
// Test Setup
// ============================================================================

fn contract_swap() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cross_chain_swap::contract::execute,
        cross_chain_swap::contract::instantiate,
        cross_chain_swap::contract::query,
    ))
}

fn contract_consumer() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        token_consumer::contract::execute,
        token_consumer::contract::instantiate,
        token_consumer::contract::query,
    ))
}

fn contract_connector() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        zeta_connector::contract::execute,
        zeta_connector::contract::instantiate,
        zeta_connector::contract::query,
    ))
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
}

struct Suite {
    app: App,
    zeta: Addr,
    usdc: Addr,
    connector: Addr,
    swap_a: Addr,
    swap_b: Addr,
}

fn instantiate_cw20(app: &mut App, code_id: u64, symbol: &str) -> Addr {
    app.instantiate_contract(
        code_id,
        Addr::unchecked(OWNER),
        &cw20_base::msg::InstantiateMsg {
            name: symbol.to_string(),
            symbol: symbol.to_string(),
            decimals: 6,
            initial_balances: vec![
                Cw20Coin {
                    address: OWNER.to_string(),
                    amount: Uint128::from(10 * RESERVE),
                },
                Cw20Coin {
                    address: USER.to_string(),
                    amount: Uint128::from(1_000_000u128),
                },
            ],
            mint: None,
            marketing: None,
        },
        &[],
        symbol,
        None,
    )
    .unwrap()
}

fn setup() -> Suite {
    let mut app = App::default();
    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &Addr::unchecked(OWNER), coins(10 * RESERVE, DENOM))
            .unwrap();
        router
            .bank
            .init_balance(storage, &Addr::unchecked(USER), coins(1_000_000, DENOM))
            .unwrap();
    });

    let cw20_code = app.store_code(contract_cw20());
    let zeta = instantiate_cw20(&mut app, cw20_code, "ZETA");
    let usdc = instantiate_cw20(&mut app, cw20_code, "USDC");

    let connector_code = app.store_code(contract_connector());
    let connector = app
        .instantiate_contract(
            connector_code,
            Addr::unchecked(OWNER),
            &zeta_connector::msg::InstantiateMsg {
                zeta_token: zeta.to_string(),
                mode: ConnectorMode::LockUnlock,
                chain_id: 1,
                tss: TSS.to_string(),
                tss_updater: OWNER.to_string(),
                pauser: OWNER.to_string(),
                max_supply: None,
            },
            &[],
            "connector",
            None,
        )
        .unwrap();

    let consumer_code = app.store_code(contract_consumer());
    let consumer = app
        .instantiate_contract(
            consumer_code,
            Addr::unchecked(OWNER),
            &token_consumer::msg::InstantiateMsg {
                owner: OWNER.to_string(),
                zeta_token: zeta.to_string(),
            },
            &[],
            "token-consumer",
            None,
        )
        .unwrap();

    for token in [&zeta, &usdc] {
        app.execute_contract(
            Addr::unchecked(OWNER),
            token.clone(),
            &Cw20ExecuteMsg::IncreaseAllowance {
                spender: consumer.to_string(),
                amount: Uint128::from(2 * RESERVE),
                expires: None,
            },
            &[],
        )
        .unwrap();
    }
    for (asset, funds) in [(native(), coins(RESERVE, DENOM)), (cw20(&usdc), vec![])] {
        app.execute_contract(
            Addr::unchecked(OWNER),
            consumer.clone(),
            &token_consumer::msg::ExecuteMsg::CreatePool {
                asset: asset.clone(),
            },
            &[],
        )
        .unwrap();
        app.execute_contract(
            Addr::unchecked(OWNER),
            consumer.clone(),
            &token_consumer::msg::ExecuteMsg::ProvideLiquidity {
                asset,
                asset_amount: Uint128::from(RESERVE),
                zeta_amount: Uint128::from(RESERVE),
            },
            &funds,
        )
        .unwrap();
    }

    let swap_code = app.store_code(contract_swap());
    let mut swaps = vec![];
    for chain_id in [1u64, 2u64] {
        swaps.push(
            app.instantiate_contract(
                swap_code,
                Addr::unchecked(OWNER),
                &InstantiateMsg {
                    connector: connector.to_string(),
                    chain_id,
                    owner: None,
                    zeta_token: zeta.to_string(),
                    token_consumer: consumer.to_string(),
                },
                &[],
                format!("swap-{}", chain_id),
                None,
            )
            .unwrap(),
        );
    }
    let (swap_a, swap_b) = (swaps[0].clone(), swaps[1].clone());

    for (swap, chain_id, peer) in [(&swap_a, 2u64, &swap_b), (&swap_b, 1u64, &swap_a)] {
        app.execute_contract(
            Addr::unchecked(OWNER),
            swap.clone(),
            &ExecuteMsg::SetInteractorByChainId {
                chain_id,
                address: Binary::from(peer.as_bytes()),
            },
            &[],
        )
        .unwrap();
    }

    Suite {
        app,
        zeta,
        usdc,
        connector,
        swap_a,
        swap_b,
    }
}

fn native() -> AssetInfo {
    AssetInfo::Native {
        denom: DENOM.to_string(),
    }
}

fn cw20(addr: &Addr) -> AssetInfo {
    AssetInfo::Cw20 {
        contract_addr: addr.clone(),
    }
}

fn params(origin: Option<AssetInfo>, out: Option<AssetInfo>, min: u128) -> SwapParams {
    SwapParams {
        origin_input_token: origin,
        destination_chain_id: 2,
        is_out_token_zeta: out.is_none(),
        destination_out_token: out,
        destination_recipient: Binary::from(BOB.as_bytes()),
        min_amount_out: Uint128::from(min),
    }
}

fn cw20_balance(app: &App, token: &Addr, address: &str) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &Cw20QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn swap_usdc(suite: &mut Suite, amount: u128, params: SwapParams) -> anyhow::Result<AppResponse> {
    suite.app.execute_contract(
        Addr::unchecked(USER),
        suite.usdc.clone(),
        &Cw20ExecuteMsg::Send {
            contract: suite.swap_a.to_string(),
            amount: Uint128::from(amount),
            msg: to_json_binary(&ReceiveMsg::SwapTokensForTokensCrossChain(params)).unwrap(),
        },
        &[],
    )
}

/// Value and payload of the `zeta_sent` event in `res`
fn sent(res: &AppResponse) -> (Uint128, Binary) {
    let event = res
        .events
        .iter()
        .find(|e| {
            e.ty == "wasm"
                && e.attributes
                    .iter()
                    .any(|a| a.key == "action" && a.value == "zeta_sent")
        })
        .unwrap();
    let attr = |key: &str| {
        event
            .attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.clone())
            .unwrap()
    };
    let value = Uint128::new(attr("zeta_value_and_gas").parse().unwrap());
    let message = hex::decode(attr("message").trim_start_matches("0x")).unwrap();
    (value, Binary::from(message))
}

fn deliver(suite: &mut Suite, value: Uint128, message: Binary) -> anyhow::Result<AppResponse> {
    suite.app.execute_contract(
        Addr::unchecked(TSS),
        suite.connector.clone(),
        &ConnectorExecuteMsg::OnReceive {
            zeta_tx_sender_address: Binary::from(suite.swap_a.as_bytes()),
            source_chain_id: 1,
            destination_address: suite.swap_b.to_string(),
            zeta_value_and_gas: value,
            message,
            internal_send_hash: Binary::from(vec![1u8; 32]),
        },
        &[],
    )
}

fn revert(suite: &mut Suite, remaining: Uint128, message: Binary) -> anyhow::Result<AppResponse> {
    suite.app.execute_contract(
        Addr::unchecked(TSS),
        suite.connector.clone(),
        &ConnectorExecuteMsg::OnRevert {
            zeta_tx_sender_address: suite.swap_a.to_string(),
            source_chain_id: 1,
            destination_address: Binary::from(suite.swap_b.as_bytes()),
            destination_chain_id: 2,
            remaining_zeta_value: remaining,
            message,
            internal_send_hash: Binary::from(vec![2u8; 32]),
        },
        &[],
    )
}

// ============================================================================
// Delivery
// ============================================================================

#[test]
fn test_native_to_cw20_across_chains() {
    let mut suite = setup();

    let res = suite
        .app
        .execute_contract(
            Addr::unchecked(USER),
            suite.swap_a.clone(),
            &ExecuteMsg::SwapTokensForTokensCrossChain(params(
                Some(native()),
                Some(cw20(&suite.usdc)),
                0,
            )),
            &coins(100_000, DENOM),
        )
        .unwrap();
    let (value, message) = sent(&res);
    // Same figure the pool simulation gives for 100_000 into a 1:1 pool
    assert_eq!(value, Uint128::from(99_699u128));
    // Nothing left behind in the origin contract
    assert_eq!(cw20_balance(&suite.app, &suite.zeta, suite.swap_a.as_str()), Uint128::zero());

    let res = deliver(&mut suite, value, message).unwrap();
    assert!(res.events.iter().any(|e| e
        .attributes
        .iter()
        .any(|a| a.key == "action" && a.value == "swapped")));

    let received = cw20_balance(&suite.app, &suite.usdc, BOB);
    assert!(received > Uint128::from(99_000u128));
    assert!(received < Uint128::from(99_699u128));
    assert_eq!(cw20_balance(&suite.app, &suite.zeta, suite.swap_b.as_str()), Uint128::zero());
}

#[test]
fn test_zeta_output_is_paid_directly() {
    let mut suite = setup();

    let input = cw20(&suite.usdc);
    let res = swap_usdc(&mut suite, 100_000, params(Some(input), None, 99_000)).unwrap();
    let (value, message) = sent(&res);
    deliver(&mut suite, value, message).unwrap();

    assert_eq!(cw20_balance(&suite.app, &suite.zeta, BOB), value);
}

#[test]
fn test_zeta_input_skips_the_pool() {
    let mut suite = setup();
    suite
        .app
        .execute_contract(
            Addr::unchecked(OWNER),
            suite.zeta.clone(),
            &Cw20ExecuteMsg::Transfer {
                recipient: USER.to_string(),
                amount: Uint128::from(5_000u128),
            },
            &[],
        )
        .unwrap();

    let zeta = suite.zeta.clone();
    let swap_a = suite.swap_a.clone();
    let res = suite
        .app
        .execute_contract(
            Addr::unchecked(USER),
            zeta.clone(),
            &Cw20ExecuteMsg::Send {
                contract: swap_a.to_string(),
                amount: Uint128::from(5_000u128),
                msg: to_json_binary(&ReceiveMsg::SwapTokensForTokensCrossChain(params(
                    Some(cw20(&zeta)),
                    None,
                    5_000,
                )))
                .unwrap(),
            },
            &[],
        )
        .unwrap();
    let (value, message) = sent(&res);
    assert_eq!(value, Uint128::from(5_000u128));

    deliver(&mut suite, value, message).unwrap();
    assert_eq!(cw20_balance(&suite.app, &suite.zeta, BOB), Uint128::from(5_000u128));
}

// ============================================================================
// Revert
// ============================================================================

#[test]
fn test_failed_delivery_reverts_and_refunds_sender() {
    let mut suite = setup();

    let input = cw20(&suite.usdc);
    let res = swap_usdc(&mut suite, 100_000, params(Some(input), None, 1_000_000)).unwrap();
    let (value, message) = sent(&res);
    assert_eq!(cw20_balance(&suite.app, &suite.usdc, USER), Uint128::from(900_000u128));

    let err = deliver(&mut suite, value, message.clone()).unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "MinimumOutputNotMet: got 99699, minimum 1000000"
    );

    let res = revert(&mut suite, value, message).unwrap();
    assert!(res.events.iter().any(|e| e
        .attributes
        .iter()
        .any(|a| a.key == "action" && a.value == "reverted_swap")));

    // Two pool fees lost on the round trip, well within 1%
    let refunded = cw20_balance(&suite.app, &suite.usdc, USER) - Uint128::from(900_000u128);
    assert!(refunded >= Uint128::from(99_000u128));
    assert!(refunded < Uint128::from(100_000u128));
    assert_eq!(cw20_balance(&suite.app, &suite.zeta, BOB), Uint128::zero());
}

#[test]
fn test_revert_with_nothing_remaining_pays_nothing() {
    let mut suite = setup();

    let input = cw20(&suite.usdc);
    let res = swap_usdc(&mut suite, 100_000, params(Some(input), None, 0)).unwrap();
    let (_, message) = sent(&res);

    revert(&mut suite, Uint128::zero(), message).unwrap();
    assert_eq!(cw20_balance(&suite.app, &suite.usdc, USER), Uint128::from(900_000u128));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_swap_parameter_validation() {
    let mut suite = setup();
    let usdc = cw20(&suite.usdc);

    let err = swap_usdc(&mut suite, 1_000, params(None, None, 0)).unwrap_err();
    assert_eq!(err.root_cause().to_string(), "MissingOriginInputTokenAddress");

    let mut invariant = params(Some(usdc.clone()), Some(native()), 0);
    invariant.is_out_token_zeta = true;
    let err = swap_usdc(&mut suite, 1_000, invariant).unwrap_err();
    assert!(err.root_cause().to_string().starts_with("OutTokenInvariant"));

    let mut unknown_chain = params(Some(usdc.clone()), None, 0);
    unknown_chain.destination_chain_id = 3;
    let err = swap_usdc(&mut suite, 1_000, unknown_chain).unwrap_err();
    assert_eq!(err.root_cause().to_string(), "InvalidDestinationChainId: 3");

    let err = suite
        .app
        .execute_contract(
            Addr::unchecked(USER),
            suite.swap_a.clone(),
            &ExecuteMsg::SwapTokensForTokensCrossChain(params(Some(usdc), None, 0)),
            &coins(1_000, DENOM),
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        format!(
            "Input token mismatch: declared cw20:{}, received native:uluna",
            suite.usdc
        )
    );

    // Nothing moved
    assert_eq!(cw20_balance(&suite.app, &suite.usdc, USER), Uint128::from(1_000_000u128));
}

#[test]
fn test_delivery_from_unknown_sender_is_rejected() {
    let mut suite = setup();

    let input = cw20(&suite.usdc);
    let res = swap_usdc(&mut suite, 100_000, params(Some(input), None, 0)).unwrap();
    let (value, message) = sent(&res);

    let err = suite
        .app
        .execute_contract(
            Addr::unchecked(TSS),
            suite.connector.clone(),
            &ConnectorExecuteMsg::OnReceive {
                zeta_tx_sender_address: Binary::from(USER.as_bytes()),
                source_chain_id: 1,
                destination_address: suite.swap_b.to_string(),
                zeta_value_and_gas: value,
                message,
                internal_send_hash: Binary::from(vec![3u8; 32]),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "InvalidZetaMessageCall: sender is not the registered interactor for chain 1"
    );
}
