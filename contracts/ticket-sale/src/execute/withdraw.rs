use cosmwasm_std::{coins, BankMsg, DepsMut, Env, MessageInfo, Response, SubMsg, Uint128};

use crate::auth::{ensure_admin, AdminAuthority};
use crate::contract::WITHDRAW_REPLY_ID;
use crate::error::ContractError;
use crate::state::{WithdrawPolicy, CONFIG, STATE};

/// Admin: release all collected revenue to the caller.
///
/// Revenue is zeroed and `withdrawn` set before the payout is dispatched. A
/// failed payout comes back through the reply as `TransferFailed`, which
/// reverts both writes.
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    authority: &dyn AdminAuthority,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ensure_admin(authority, &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    if config.withdraw_policy == WithdrawPolicy::AfterClose
        && env.block.time.seconds() <= config.sale_end
    {
        return Err(ContractError::WithdrawLocked {
            end: config.sale_end,
        });
    }

    let mut state = STATE.load(deps.storage)?;
    let amount = state.total_revenue;
    if amount.is_zero() {
        return Err(ContractError::NothingToWithdraw);
    }

    state.total_revenue = Uint128::zero();
    state.withdrawn = true;
    STATE.save(deps.storage, &state)?;

    let payout = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: coins(amount.u128(), &config.denom),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_error(payout, WITHDRAW_REPLY_ID))
        .add_attribute("action", "withdraw")
        .add_attribute("recipient", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("denom", config.denom))
}
