use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, SubMsg, SubMsgResult, WasmMsg,
};
use cw2::{get_contract_version, set_contract_version};
use cw_utils::parse_reply_instantiate_data;
use ticket_issuer::msg::InstantiateMsg as IssuerInstantiateMsg;

use crate::auth::SingleAdmin;
use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{SaleConfig, SaleState, ADMIN, CONFIG, ISSUER, STATE};

const CONTRACT_NAME: &str = "crates.io:ticket-sale";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const INSTANTIATE_ISSUER_REPLY_ID: u64 = 1;
pub const ISSUE_REPLY_ID: u64 = 2;
pub const WITHDRAW_REPLY_ID: u64 = 3;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.sale_start >= msg.sale_end {
        return Err(ContractError::InvalidSaleWindow {
            start: msg.sale_start,
            end: msg.sale_end,
        });
    }
    if msg.total_supply == 0 {
        return Err(ContractError::InvalidSupply);
    }
    if msg.denom.trim().is_empty() {
        return Err(ContractError::InvalidDenom);
    }

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };

    let config = SaleConfig {
        denom: msg.denom,
        base_price_initial: msg.base_price,
        total_supply: msg.total_supply,
        sale_start: msg.sale_start,
        sale_end: msg.sale_end,
        withdraw_policy: msg.withdraw_policy.unwrap_or_default(),
    };

    CONFIG.save(deps.storage, &config)?;
    STATE.save(deps.storage, &SaleState::new(msg.base_price))?;
    ADMIN.save(deps.storage, &SingleAdmin::new(admin.clone()))?;

    // Provision the collection; the sale contract is its only minter
    let provision = WasmMsg::Instantiate {
        admin: Some(admin.to_string()),
        code_id: msg.issuer_code_id,
        msg: to_json_binary(&IssuerInstantiateMsg {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            minter: env.contract.address.to_string(),
            metadata_base: msg.metadata_base,
            max_supply: config.total_supply,
        })?,
        funds: vec![],
        label: format!("{} tickets", msg.name),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(
            provision,
            INSTANTIATE_ISSUER_REPLY_ID,
        ))
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin.to_string())
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("base_price", config.base_price_initial.to_string())
        .add_attribute("total_supply", config.total_supply.to_string())
        .add_attribute("sale_start", config.sale_start.to_string())
        .add_attribute("sale_end", config.sale_end.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let authority = ADMIN.load(deps.storage)?;

    match msg {
        ExecuteMsg::Purchase {} => crate::execute::purchase::execute_purchase(deps, env, info),
        ExecuteMsg::SetBasePrice { price } => {
            crate::execute::base_price::execute_set_base_price(deps, &authority, info, price)
        }
        ExecuteMsg::SetDiscount { percentage } => {
            crate::execute::discount::execute_set_discount(deps, &authority, info, percentage)
        }
        ExecuteMsg::CancelDiscount {} => {
            crate::execute::discount::execute_cancel_discount(deps, &authority, info)
        }
        ExecuteMsg::UpdateMetadataPointer { value } => {
            crate::execute::metadata::execute_update_metadata_pointer(
                deps, &authority, info, value,
            )
        }
        ExecuteMsg::Withdraw {} => {
            crate::execute::withdraw::execute_withdraw(deps, env, &authority, info)
        }
        ExecuteMsg::TransferAdmin { new_admin } => {
            crate::execute::admin::execute_transfer_admin(deps, &authority, info, new_admin)
        }
        ExecuteMsg::AcceptAdmin {} => crate::execute::admin::execute_accept_admin(deps, info),
    }
}

/// Failed issuance or payout sub-messages surface here. Returning an error
/// aborts the whole transaction, so counters, revenue and the withdrawn flag
/// written before dispatch are rolled back with it.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INSTANTIATE_ISSUER_REPLY_ID => {
            let res = parse_reply_instantiate_data(msg).map_err(|err| {
                ContractError::IssuerFailure {
                    reason: err.to_string(),
                }
            })?;
            let issuer = deps.api.addr_validate(&res.contract_address)?;
            ISSUER.save(deps.storage, &issuer)?;

            Ok(Response::new()
                .add_attribute("method", "instantiate_issuer_reply")
                .add_attribute("issuer", issuer.to_string()))
        }
        ISSUE_REPLY_ID => match msg.result {
            SubMsgResult::Err(reason) => Err(ContractError::IssuerFailure { reason }),
            SubMsgResult::Ok(_) => Ok(Response::new()),
        },
        WITHDRAW_REPLY_ID => match msg.result {
            SubMsgResult::Err(reason) => Err(ContractError::TransferFailed { reason }),
            SubMsgResult::Ok(_) => Ok(Response::new()),
        },
        id => Err(ContractError::UnknownReply { id }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            stored: stored.contract,
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&crate::query::query_config(deps)?),
        QueryMsg::State {} => to_json_binary(&crate::query::query_state(deps, env)?),
        QueryMsg::CurrentPrice {} => {
            to_json_binary(&crate::query::query_current_price(deps, env)?)
        }
        QueryMsg::SaleWindow {} => to_json_binary(&crate::query::query_sale_window(deps, env)?),
        QueryMsg::PurchasesOf { buyer } => {
            to_json_binary(&crate::query::query_purchases_of(deps, buyer)?)
        }
        QueryMsg::Purchasers { start_after, limit } => {
            to_json_binary(&crate::query::query_purchasers(deps, start_after, limit)?)
        }
        QueryMsg::PendingAdmin {} => to_json_binary(&crate::query::query_pending_admin(deps)?),
    }
}
