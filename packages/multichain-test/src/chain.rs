//! One simulated chain
//!
//! A `Chain` owns a cw-multi-test `App` with the bridge token and connector
//! already wired: the token is instantiated first without a connector, then
//! the TSS updater points it at the freshly deployed connector.

use std::fmt::Debug;

use cosmwasm_std::{Addr, Coin, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20QueryMsg, TokenInfoResponse};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use eyre::{eyre, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use zeta_connector::msg::LockedAmountResponse;
use zeta_connector::state::ConnectorMode;

pub const TSS: &str = "terra1tss";
pub const TSS_UPDATER: &str = "terra1tssupdater";
pub const PAUSER: &str = "terra1pauser";
pub const DEPLOYER: &str = "terra1deployer";

/// Surface a cw-multi-test error as a harness error.
pub(crate) fn report(err: anyhow::Error) -> eyre::Report {
    eyre!("{:#}", err)
}

#[derive(Debug, Clone)]
pub struct ChainSpec {
    /// Network name, the first half of an address book key
    pub name: String,
    pub chain_id: u64,
    pub mode: ConnectorMode,
    /// Mint cap for `MintBurn` chains
    pub max_supply: Option<Uint128>,
}

impl ChainSpec {
    pub fn new(name: &str, chain_id: u64, mode: ConnectorMode) -> Self {
        Self {
            name: name.to_string(),
            chain_id,
            mode,
            max_supply: None,
        }
    }

    pub fn with_max_supply(mut self, max_supply: u128) -> Self {
        self.max_supply = Some(Uint128::new(max_supply));
        self
    }
}

struct CodeIds {
    cw20: u64,
    counter: u64,
    token_consumer: u64,
    swap: u64,
    lending: u64,
}

pub struct Chain {
    pub spec: ChainSpec,
    pub app: App,
    pub zeta_token: Addr,
    pub connector: Addr,
    codes: CodeIds,
}

fn contract_zeta_token() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        zeta_token::contract::execute,
        zeta_token::contract::instantiate,
        zeta_token::contract::query,
    ))
}

fn contract_connector() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        zeta_connector::contract::execute,
        zeta_connector::contract::instantiate,
        zeta_connector::contract::query,
    ))
}

fn contract_cw20() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
}

fn contract_counter() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        counter::contract::execute,
        counter::contract::instantiate,
        counter::contract::query,
    ))
}

fn contract_token_consumer() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        token_consumer::contract::execute,
        token_consumer::contract::instantiate,
        token_consumer::contract::query,
    ))
}

fn contract_swap() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cross_chain_swap::contract::execute,
        cross_chain_swap::contract::instantiate,
        cross_chain_swap::contract::query,
    ))
}

fn contract_lending() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cross_chain_lending::contract::execute,
        cross_chain_lending::contract::instantiate,
        cross_chain_lending::contract::query,
    ))
}

fn cw20_coins(balances: &[(&str, u128)]) -> Vec<Cw20Coin> {
    balances
        .iter()
        .map(|(address, amount)| Cw20Coin {
            address: address.to_string(),
            amount: Uint128::new(*amount),
        })
        .collect()
}

impl Chain {
    /// Start a chain with the bridge token and connector deployed.
    pub fn new(spec: ChainSpec, zeta_balances: &[(&str, u128)]) -> Result<Self> {
        let mut app = App::default();

        let zeta_code = app.store_code(contract_zeta_token());
        let connector_code = app.store_code(contract_connector());
        let codes = CodeIds {
            cw20: app.store_code(contract_cw20()),
            counter: app.store_code(contract_counter()),
            token_consumer: app.store_code(contract_token_consumer()),
            swap: app.store_code(contract_swap()),
            lending: app.store_code(contract_lending()),
        };

        let zeta_token = app
            .instantiate_contract(
                zeta_code,
                Addr::unchecked(DEPLOYER),
                &zeta_token::msg::InstantiateMsg {
                    name: "Zeta".to_string(),
                    symbol: "ZETA".to_string(),
                    decimals: 18,
                    initial_balances: cw20_coins(zeta_balances),
                    tss: TSS.to_string(),
                    tss_updater: TSS_UPDATER.to_string(),
                    connector: None,
                },
                &[],
                "zeta-token",
                None,
            )
            .map_err(report)?;

        let connector = app
            .instantiate_contract(
                connector_code,
                Addr::unchecked(DEPLOYER),
                &zeta_connector::msg::InstantiateMsg {
                    zeta_token: zeta_token.to_string(),
                    mode: spec.mode.clone(),
                    chain_id: spec.chain_id,
                    tss: TSS.to_string(),
                    tss_updater: TSS_UPDATER.to_string(),
                    pauser: PAUSER.to_string(),
                    max_supply: spec.max_supply,
                },
                &[],
                "connector",
                None,
            )
            .map_err(report)?;

        app.execute_contract(
            Addr::unchecked(TSS_UPDATER),
            zeta_token.clone(),
            &zeta_token::msg::ExecuteMsg::UpdateTssAndConnectorAddresses {
                tss: TSS.to_string(),
                connector: connector.to_string(),
            },
            &[],
        )
        .map_err(report)?;

        tracing::info!(
            chain = %spec.name,
            chain_id = spec.chain_id,
            mode = spec.mode.as_str(),
            %zeta_token,
            %connector,
            "chain started"
        );

        Ok(Self {
            spec,
            app,
            zeta_token,
            connector,
            codes,
        })
    }

    pub fn chain_id(&self) -> u64 {
        self.spec.chain_id
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    // ========================================================================
    // Deploy helpers
    // ========================================================================

    fn instantiate<T: Serialize>(&mut self, code_id: u64, msg: &T, label: &str) -> Result<Addr> {
        self.app
            .instantiate_contract(code_id, Addr::unchecked(DEPLOYER), msg, &[], label, None)
            .map_err(report)
    }

    pub fn deploy_cw20(
        &mut self,
        symbol: &str,
        decimals: u8,
        balances: &[(&str, u128)],
    ) -> Result<Addr> {
        let code_id = self.codes.cw20;
        self.instantiate(
            code_id,
            &cw20_base::msg::InstantiateMsg {
                name: symbol.to_string(),
                symbol: symbol.to_string(),
                decimals,
                initial_balances: cw20_coins(balances),
                mint: None,
                marketing: None,
            },
            symbol,
        )
    }

    pub fn deploy_counter(&mut self) -> Result<Addr> {
        let code_id = self.codes.counter;
        let msg = counter::msg::InstantiateMsg {
            connector: self.connector.to_string(),
            chain_id: self.spec.chain_id,
            owner: None,
        };
        self.instantiate(code_id, &msg, "counter")
    }

    pub fn deploy_token_consumer(&mut self) -> Result<Addr> {
        let code_id = self.codes.token_consumer;
        let msg = token_consumer::msg::InstantiateMsg {
            owner: DEPLOYER.to_string(),
            zeta_token: self.zeta_token.to_string(),
        };
        self.instantiate(code_id, &msg, "token-consumer")
    }

    pub fn deploy_swap(&mut self, token_consumer: &Addr) -> Result<Addr> {
        let code_id = self.codes.swap;
        let msg = cross_chain_swap::msg::InstantiateMsg {
            connector: self.connector.to_string(),
            chain_id: self.spec.chain_id,
            owner: None,
            zeta_token: self.zeta_token.to_string(),
            token_consumer: token_consumer.to_string(),
        };
        self.instantiate(code_id, &msg, "cross-chain-swap")
    }

    pub fn deploy_lending(&mut self, fee_wallet: &str) -> Result<Addr> {
        let code_id = self.codes.lending;
        let msg = cross_chain_lending::msg::InstantiateMsg {
            connector: self.connector.to_string(),
            chain_id: self.spec.chain_id,
            owner: None,
            fee_wallet: fee_wallet.to_string(),
            fee_bps: None,
        };
        self.instantiate(code_id, &msg, "cross-chain-lending")
    }

    /// Replace the native balance of `address`.
    pub fn fund_native(&mut self, address: &str, coins: Vec<Coin>) -> Result<()> {
        self.app
            .init_modules(|router, _, storage| {
                router
                    .bank
                    .init_balance(storage, &Addr::unchecked(address), coins)
            })
            .map_err(report)
    }

    // ========================================================================
    // Calls
    // ========================================================================

    /// Execute as `sender`. The cw-multi-test error is returned unchanged so
    /// callers can inspect its root cause.
    pub fn execute<T: Serialize + Debug>(
        &mut self,
        sender: &str,
        contract: &Addr,
        msg: &T,
        funds: &[Coin],
    ) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(Addr::unchecked(sender), contract.clone(), msg, funds)
    }

    pub fn query<T: DeserializeOwned>(&self, contract: &Addr, msg: &impl Serialize) -> Result<T> {
        Ok(self.app.wrap().query_wasm_smart(contract, msg)?)
    }

    pub fn cw20_balance(&self, token: &Addr, address: &str) -> Result<Uint128> {
        let res: BalanceResponse = self.query(
            token,
            &Cw20QueryMsg::Balance {
                address: address.to_string(),
            },
        )?;
        Ok(res.balance)
    }

    pub fn zeta_balance(&self, address: &str) -> Result<Uint128> {
        self.cw20_balance(&self.zeta_token, address)
    }

    pub fn zeta_supply(&self) -> Result<Uint128> {
        let res: TokenInfoResponse = self.query(&self.zeta_token, &Cw20QueryMsg::TokenInfo {})?;
        Ok(res.total_supply)
    }

    pub fn locked_amount(&self) -> Result<Uint128> {
        let res: LockedAmountResponse = self.query(
            &self.connector,
            &zeta_connector::msg::QueryMsg::LockedAmount {},
        )?;
        Ok(res.amount)
    }
}
