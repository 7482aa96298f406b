#[cfg(test)]
pub mod helpers {
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage};
    use cosmwasm_std::{coins, from_json, Addr, Env, OwnedDeps, Response, Timestamp, Uint128};

    use crate::contract::{execute, instantiate, query};
    use crate::error::ContractError;
    use crate::msg::*;
    use crate::state::{WithdrawPolicy, ISSUER};

    pub const ADMIN: &str = "admin";
    pub const BUYER: &str = "buyer_one";
    pub const BUYER_TWO: &str = "buyer_two";
    pub const RANDOM_USER: &str = "random_user";
    pub const ISSUER_ADDR: &str = "ticket_issuer";
    pub const DENOM: &str = "uticket";

    pub const SALE_START: u64 = 1_000;
    pub const SALE_END: u64 = 2_000;
    pub const TOTAL_SUPPLY: u64 = 5;
    pub const BASE_PRICE: u128 = 100;
    pub const ISSUER_CODE_ID: u64 = 7;

    pub type MockDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

    pub fn default_instantiate_msg() -> InstantiateMsg {
        InstantiateMsg {
            name: "Launch Night".to_string(),
            symbol: "LNT".to_string(),
            metadata_base: "ipfs://launch-night/".to_string(),
            denom: DENOM.to_string(),
            base_price: Uint128::new(BASE_PRICE),
            total_supply: TOTAL_SUPPLY,
            sale_start: SALE_START,
            sale_end: SALE_END,
            issuer_code_id: ISSUER_CODE_ID,
            admin: None,
            withdraw_policy: None,
        }
    }

    /// Instantiates with `msg` and records the issuer address the
    /// instantiate reply would have stored.
    pub fn setup_with(msg: InstantiateMsg) -> MockDeps {
        let mut deps = mock_dependencies();
        let info = mock_info(ADMIN, &[]);
        instantiate(deps.as_mut(), env_at_time(SALE_START - 500), info, msg).unwrap();
        ISSUER
            .save(deps.as_mut().storage, &Addr::unchecked(ISSUER_ADDR))
            .unwrap();
        deps
    }

    /// Default sale, with the clock 100 seconds into the window.
    pub fn setup_contract() -> (MockDeps, Env) {
        (setup_with(default_instantiate_msg()), env_at_time(SALE_START + 100))
    }

    pub fn setup_with_policy(policy: WithdrawPolicy) -> (MockDeps, Env) {
        let msg = InstantiateMsg {
            withdraw_policy: Some(policy),
            ..default_instantiate_msg()
        };
        (setup_with(msg), env_at_time(SALE_START + 100))
    }

    pub fn purchase(
        deps: &mut MockDeps,
        env: &Env,
        buyer: &str,
        amount: u128,
    ) -> Result<Response, ContractError> {
        let funds = if amount == 0 { vec![] } else { coins(amount, DENOM) };
        let info = mock_info(buyer, &funds);
        execute(deps.as_mut(), env.clone(), info, ExecuteMsg::Purchase {})
    }

    pub fn exec(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        msg: ExecuteMsg,
    ) -> Result<Response, ContractError> {
        let info = mock_info(sender, &[]);
        execute(deps.as_mut(), env.clone(), info, msg)
    }

    pub fn query_config(deps: &MockDeps, env: &Env) -> ConfigResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Config {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_state(deps: &MockDeps, env: &Env) -> StateResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::State {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_purchases_of(deps: &MockDeps, env: &Env, buyer: &str) -> u64 {
        let res = query(
            deps.as_ref(),
            env.clone(),
            QueryMsg::PurchasesOf { buyer: buyer.to_string() },
        )
        .unwrap();
        let purchases: PurchasesResponse = from_json(&res).unwrap();
        purchases.count
    }

    /// Create an env with a specific block time
    pub fn env_at_time(secs: u64) -> Env {
        let mut env = mock_env();
        env.block.time = Timestamp::from_seconds(secs);
        env
    }
}
