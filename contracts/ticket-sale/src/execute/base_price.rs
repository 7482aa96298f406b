use cosmwasm_std::{DepsMut, Event, MessageInfo, Response, Uint128};

use crate::auth::{ensure_admin, AdminAuthority};
use crate::error::ContractError;
use crate::state::STATE;

pub fn execute_set_base_price(
    deps: DepsMut,
    authority: &dyn AdminAuthority,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    ensure_admin(authority, &info.sender)?;

    let mut state = STATE.load(deps.storage)?;
    state.base_price = price;
    STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_event(Event::new("base_price_changed").add_attribute("price", price.to_string()))
        .add_attribute("action", "set_base_price")
        .add_attribute("base_price", price.to_string()))
}
