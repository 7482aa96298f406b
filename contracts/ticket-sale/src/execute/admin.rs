use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::auth::{ensure_admin, AdminAuthority, SingleAdmin};
use crate::error::ContractError;
use crate::state::{ADMIN, PENDING_ADMIN};

/// Admin: propose a new admin (step 1 of 2-step transfer).
pub fn execute_transfer_admin(
    deps: DepsMut,
    authority: &dyn AdminAuthority,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    ensure_admin(authority, &info.sender)?;

    let new_admin = deps.api.addr_validate(&new_admin)?;
    PENDING_ADMIN.save(deps.storage, &new_admin)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_admin")
        .add_attribute("pending_admin", new_admin.to_string()))
}

/// Pending admin: accept ownership (step 2 of 2-step transfer).
pub fn execute_accept_admin(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let pending = PENDING_ADMIN
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingAdmin)?;
    if info.sender != pending {
        return Err(ContractError::Unauthorized);
    }

    ADMIN.save(deps.storage, &SingleAdmin::new(pending.clone()))?;
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_admin")
        .add_attribute("admin", pending.to_string()))
}
