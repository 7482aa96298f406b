use cosmwasm_std::{DepsMut, Event, MessageInfo, Response, Uint128};

use crate::auth::{ensure_admin, AdminAuthority};
use crate::error::ContractError;
use crate::state::STATE;

const PERCENT: u64 = 100;

/// Admin: cut the base price by `percentage`. Only one discount at a time.
pub fn execute_set_discount(
    deps: DepsMut,
    authority: &dyn AdminAuthority,
    info: MessageInfo,
    percentage: u64,
) -> Result<Response, ContractError> {
    ensure_admin(authority, &info.sender)?;

    let mut state = STATE.load(deps.storage)?;
    if state.discount_percentage > 0 {
        return Err(ContractError::DiscountAlreadyActive {
            percentage: state.discount_percentage,
        });
    }
    if percentage == 0 || percentage >= PERCENT {
        return Err(ContractError::InvalidPercentage { percentage });
    }

    let discounted = state
        .base_price
        .checked_mul(Uint128::from(PERCENT - percentage))?
        .checked_div(Uint128::from(PERCENT))?;
    // A discount may not truncate a priced ticket down to free
    if discounted.is_zero() && !state.base_price.is_zero() {
        return Err(ContractError::InvalidPercentage { percentage });
    }

    state.base_price = discounted;
    state.discount_percentage = percentage;
    STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_event(
            Event::new("discount_set")
                .add_attribute("percentage", percentage.to_string())
                .add_attribute("base_price", discounted.to_string()),
        )
        .add_attribute("action", "set_discount")
        .add_attribute("percentage", percentage.to_string())
        .add_attribute("base_price", discounted.to_string()))
}

/// Admin: scale the base price back up by the active discount.
/// Truncation in both directions means the restored price can sit slightly
/// below the pre-discount value.
pub fn execute_cancel_discount(
    deps: DepsMut,
    authority: &dyn AdminAuthority,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ensure_admin(authority, &info.sender)?;

    let mut state = STATE.load(deps.storage)?;
    if state.discount_percentage == 0 {
        return Err(ContractError::NoActiveDiscount);
    }

    let restored = state
        .base_price
        .checked_mul(Uint128::from(PERCENT))?
        .checked_div(Uint128::from(PERCENT - state.discount_percentage))?;

    let cancelled = state.discount_percentage;
    state.base_price = restored;
    state.discount_percentage = 0;
    STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_event(
            Event::new("discount_cancelled")
                .add_attribute("percentage", cancelled.to_string())
                .add_attribute("base_price", restored.to_string()),
        )
        .add_attribute("action", "cancel_discount")
        .add_attribute("base_price", restored.to_string()))
}
