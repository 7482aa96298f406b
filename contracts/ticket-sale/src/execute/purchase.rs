use cosmwasm_std::{
    to_json_binary, DepsMut, Env, Event, MessageInfo, Response, SubMsg, WasmMsg,
};
use cw_utils::may_pay;
use ticket_issuer::msg::ExecuteMsg as IssuerExecuteMsg;

use crate::contract::ISSUE_REPLY_ID;
use crate::error::ContractError;
use crate::msg::PurchaseResponse;
use crate::phase::ensure_open;
use crate::pricing::compute_price;
use crate::state::{CONFIG, ISSUER, PURCHASES, STATE};

/// Buyer sends the sale denom → receives one ticket at the live price.
///
/// Every guard runs before the first write. Local state is then made
/// consistent and saved, and the issuer call goes out last as a sub-message;
/// if the issuer refuses, the reply turns that into `IssuerFailure` and the
/// transaction is discarded as a whole.
pub fn execute_purchase(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = STATE.load(deps.storage)?;
    let now = env.block.time.seconds();

    ensure_open(&config, state.tickets_sold, now)?;
    let price = compute_price(&config, &state, now)?;

    let paid = may_pay(&info, &config.denom)?;
    if paid < price {
        return Err(ContractError::InsufficientPayment { price, paid });
    }

    let issuer = ISSUER
        .may_load(deps.storage)?
        .ok_or(ContractError::IssuerNotProvisioned)?;

    // Update stats
    state.tickets_sold += 1;
    state.total_revenue = state.total_revenue.checked_add(paid)?;
    STATE.save(deps.storage, &state)?;

    let bought = PURCHASES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(0)
        + 1;
    PURCHASES.save(deps.storage, &info.sender, &bought)?;

    // Ticket ids follow the sale counter: 1, 2, ... total_supply
    let token_id = state.tickets_sold.to_string();
    let issue_msg = WasmMsg::Execute {
        contract_addr: issuer.to_string(),
        msg: to_json_binary(&IssuerExecuteMsg::Issue {
            owner: info.sender.to_string(),
            token_id: token_id.clone(),
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_error(issue_msg, ISSUE_REPLY_ID))
        .add_event(
            Event::new("ticket_purchased")
                .add_attribute("buyer", info.sender.to_string())
                .add_attribute("price", price.to_string())
                .add_attribute("paid", paid.to_string())
                .add_attribute("token_id", token_id.clone()),
        )
        .add_attribute("action", "purchase")
        .add_attribute("buyer", info.sender.to_string())
        .add_attribute("token_id", token_id.clone())
        .add_attribute("price", price.to_string())
        .add_attribute("paid", paid.to_string())
        .add_attribute("tickets_sold", state.tickets_sold.to_string())
        .set_data(to_json_binary(&PurchaseResponse { token_id })?))
}
