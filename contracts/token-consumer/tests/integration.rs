//! Integration tests for the token consumer pools using cw-multi-test.

use cosmwasm_std::{coins, to_json_binary, Addr, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, ContractWrapper, Executor};
use zeta_common::AssetInfo;

use token_consumer::msg::{
    ExecuteMsg, InstantiateMsg, PoolsResponse, QueryMsg, ReceiveMsg, SimulationResponse,
};

const OWNER: &str = "terra1owner";
const USER: &str = "terra1user";
const DENOM: &str = "uluna";
const RESERVE: u128 = 1_000_000_000_000;

// ============================================================================
// Test Setup
// ============================================================================

fn contract_consumer() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        token_consumer::contract::execute,
        token_consumer::contract::instantiate,
        token_consumer::contract::query,
    ))
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
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

/// Returns (app, consumer, zeta, usdc) with a uluna pool and a usdc pool,
/// both seeded 1:1.
fn setup() -> (App, Addr, Addr, Addr) {
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

    let code_id = app.store_code(contract_consumer());
    let consumer = app
        .instantiate_contract(
            code_id,
            Addr::unchecked(OWNER),
            &InstantiateMsg {
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

    let native = AssetInfo::Native {
        denom: DENOM.to_string(),
    };
    let cw20 = AssetInfo::Cw20 {
        contract_addr: usdc.clone(),
    };
    for (asset, funds) in [(native, coins(RESERVE, DENOM)), (cw20, vec![])] {
        app.execute_contract(
            Addr::unchecked(OWNER),
            consumer.clone(),
            &ExecuteMsg::CreatePool {
                asset: asset.clone(),
            },
            &[],
        )
        .unwrap();
        app.execute_contract(
            Addr::unchecked(OWNER),
            consumer.clone(),
            &ExecuteMsg::ProvideLiquidity {
                asset,
                asset_amount: Uint128::from(RESERVE),
                zeta_amount: Uint128::from(RESERVE),
            },
            &funds,
        )
        .unwrap();
    }

    (app, consumer, zeta, usdc)
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

// ============================================================================
// Swaps
// ============================================================================

#[test]
fn test_native_to_zeta_and_back() {
    let (mut app, consumer, zeta, _usdc) = setup();

    let sim: SimulationResponse = app
        .wrap()
        .query_wasm_smart(
            &consumer,
            &QueryMsg::SimulateGetZetaFromToken {
                asset: AssetInfo::Native {
                    denom: DENOM.to_string(),
                },
                amount_in: Uint128::from(100_000u128),
            },
        )
        .unwrap();
    assert_eq!(sim.amount_out, Uint128::from(99_699u128));

    app.execute_contract(
        Addr::unchecked(USER),
        consumer.clone(),
        &ExecuteMsg::GetZetaFromToken {
            destination: None,
            min_amount_out: sim.amount_out,
        },
        &coins(100_000, DENOM),
    )
    .unwrap();
    assert_eq!(cw20_balance(&app, &zeta, USER), sim.amount_out);

    app.execute_contract(
        Addr::unchecked(USER),
        zeta.clone(),
        &Cw20ExecuteMsg::Send {
            contract: consumer.to_string(),
            amount: sim.amount_out,
            msg: to_json_binary(&ReceiveMsg::GetTokenFromZeta {
                output_asset: AssetInfo::Native {
                    denom: DENOM.to_string(),
                },
                destination: None,
                min_amount_out: Uint128::zero(),
            })
            .unwrap(),
        },
        &[],
    )
    .unwrap();

    let back = app.wrap().query_balance(USER, DENOM).unwrap().amount;
    // 900_000 left plus the round trip, which loses about two pool fees
    assert!(back > Uint128::from(999_000u128));
    assert!(back < Uint128::from(1_000_000u128));
}

#[test]
fn test_cw20_to_zeta_to_other_recipient() {
    let (mut app, consumer, zeta, usdc) = setup();

    app.execute_contract(
        Addr::unchecked(USER),
        usdc.clone(),
        &Cw20ExecuteMsg::Send {
            contract: consumer.to_string(),
            amount: Uint128::from(500_000u128),
            msg: to_json_binary(&ReceiveMsg::GetZetaFromToken {
                destination: Some("terra1bob".to_string()),
                min_amount_out: Uint128::from(498_000u128),
            })
            .unwrap(),
        },
        &[],
    )
    .unwrap();

    assert_eq!(cw20_balance(&app, &usdc, USER), Uint128::from(500_000u128));
    assert!(cw20_balance(&app, &zeta, "terra1bob") >= Uint128::from(498_000u128));
}

#[test]
fn test_minimum_output_not_met() {
    let (mut app, consumer, _zeta, _usdc) = setup();

    let res = app.execute_contract(
        Addr::unchecked(USER),
        consumer.clone(),
        &ExecuteMsg::GetZetaFromToken {
            destination: None,
            min_amount_out: Uint128::from(100_000u128),
        },
        &coins(100_000, DENOM),
    );
    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        "MinimumOutputNotMet: got 99699, minimum 100000"
    );
    // Funds stay with the user
    assert_eq!(
        app.wrap().query_balance(USER, DENOM).unwrap().amount,
        Uint128::from(1_000_000u128)
    );
}

#[test]
fn test_unknown_pool_and_wrong_token() {
    let (mut app, consumer, zeta, usdc) = setup();

    let res = app.execute_contract(
        Addr::unchecked(USER),
        zeta.clone(),
        &Cw20ExecuteMsg::Send {
            contract: consumer.to_string(),
            amount: Uint128::from(1_000u128),
            msg: to_json_binary(&ReceiveMsg::GetTokenFromZeta {
                output_asset: AssetInfo::Native {
                    denom: "uatom".to_string(),
                },
                destination: None,
                min_amount_out: Uint128::zero(),
            })
            .unwrap(),
        },
        &[],
    );
    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        "Pool not found: native:uatom"
    );

    let res = app.execute_contract(
        Addr::unchecked(USER),
        usdc.clone(),
        &Cw20ExecuteMsg::Send {
            contract: consumer.to_string(),
            amount: Uint128::from(1_000u128),
            msg: to_json_binary(&ReceiveMsg::GetTokenFromZeta {
                output_asset: AssetInfo::Native {
                    denom: DENOM.to_string(),
                },
                destination: None,
                min_amount_out: Uint128::zero(),
            })
            .unwrap(),
        },
        &[],
    );
    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        format!("Unexpected token: {}", usdc)
    );
}

// ============================================================================
// Owner
// ============================================================================

#[test]
fn test_pool_management_is_owner_gated() {
    let (mut app, consumer, zeta, _usdc) = setup();

    let res = app.execute_contract(
        Addr::unchecked(USER),
        consumer.clone(),
        &ExecuteMsg::CreatePool {
            asset: AssetInfo::Native {
                denom: "uatom".to_string(),
            },
        },
        &[],
    );
    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        "Unauthorized: caller is not the owner"
    );

    let res = app.execute_contract(
        Addr::unchecked(OWNER),
        consumer.clone(),
        &ExecuteMsg::CreatePool {
            asset: AssetInfo::Cw20 {
                contract_addr: zeta.clone(),
            },
        },
        &[],
    );
    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        "The bridge token cannot be paired with itself"
    );

    let res = app.execute_contract(
        Addr::unchecked(OWNER),
        consumer.clone(),
        &ExecuteMsg::CreatePool {
            asset: AssetInfo::Native {
                denom: DENOM.to_string(),
            },
        },
        &[],
    );
    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        "Pool already exists: native:uluna"
    );

    let pools: PoolsResponse = app
        .wrap()
        .query_wasm_smart(
            &consumer,
            &QueryMsg::Pools {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(pools.pools.len(), 2);
}
