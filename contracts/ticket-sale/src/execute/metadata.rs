use cosmwasm_std::{to_json_binary, DepsMut, MessageInfo, Response, WasmMsg};
use ticket_issuer::msg::ExecuteMsg as IssuerExecuteMsg;

use crate::auth::{ensure_admin, AdminAuthority};
use crate::error::ContractError;
use crate::state::ISSUER;

/// Admin: the sale is the issuer's minter, so pointer changes are relayed through it.
pub fn execute_update_metadata_pointer(
    deps: DepsMut,
    authority: &dyn AdminAuthority,
    info: MessageInfo,
    value: String,
) -> Result<Response, ContractError> {
    ensure_admin(authority, &info.sender)?;

    let issuer = ISSUER
        .may_load(deps.storage)?
        .ok_or(ContractError::IssuerNotProvisioned)?;

    let forward = WasmMsg::Execute {
        contract_addr: issuer.to_string(),
        msg: to_json_binary(&IssuerExecuteMsg::SetMetadataPointer {
            value: value.clone(),
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(forward)
        .add_attribute("action", "update_metadata_pointer")
        .add_attribute("issuer", issuer.to_string())
        .add_attribute("metadata_pointer", value))
}
