use cosmwasm_std::{Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    ConfigResponse, PendingAdminResponse, PriceResponse, PurchasersResponse, PurchasesResponse,
    SaleWindowResponse, StateResponse,
};
use crate::phase::phase_of;
use crate::pricing::quote;
use crate::state::{ADMIN, CONFIG, ISSUER, PENDING_ADMIN, PURCHASES, STATE};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let admin = ADMIN.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: admin.admin,
        denom: config.denom,
        base_price_initial: config.base_price_initial,
        total_supply: config.total_supply,
        sale_start: config.sale_start,
        sale_end: config.sale_end,
        issuer: ISSUER.may_load(deps.storage)?,
        withdraw_policy: config.withdraw_policy,
    })
}

pub fn query_state(deps: Deps, env: Env) -> StdResult<StateResponse> {
    let config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;
    Ok(StateResponse {
        phase: phase_of(&config, state.tickets_sold, env.block.time.seconds()),
        base_price: state.base_price,
        tickets_sold: state.tickets_sold,
        total_supply: config.total_supply,
        total_revenue: state.total_revenue,
        discount_percentage: state.discount_percentage,
        withdrawn: state.withdrawn,
    })
}

/// Pricing errors (e.g. at the very first second of the sale) are returned
/// as query errors carrying the contract error message.
pub fn query_current_price(deps: Deps, env: Env) -> StdResult<PriceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;
    let q = quote(&config, &state, env.block.time.seconds())
        .map_err(|err| StdError::generic_err(err.to_string()))?;
    Ok(PriceResponse {
        price: q.price,
        base_price: state.base_price,
        sale_rate: q.sale_rate,
        target_sale_rate: q.target_sale_rate,
        adjustment_factor: q.adjustment_factor,
    })
}

pub fn query_sale_window(deps: Deps, env: Env) -> StdResult<SaleWindowResponse> {
    let config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;
    Ok(SaleWindowResponse {
        sale_start: config.sale_start,
        sale_end: config.sale_end,
        phase: phase_of(&config, state.tickets_sold, env.block.time.seconds()),
    })
}

pub fn query_purchases_of(deps: Deps, buyer: String) -> StdResult<PurchasesResponse> {
    let buyer = deps.api.addr_validate(&buyer)?;
    let count = PURCHASES.may_load(deps.storage, &buyer)?.unwrap_or(0);
    Ok(PurchasesResponse { buyer, count })
}

pub fn query_purchasers(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<PurchasersResponse> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_after.as_ref().map(Bound::exclusive);

    let purchasers = PURCHASES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(buyer, count)| PurchasesResponse { buyer, count }))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PurchasersResponse { purchasers })
}

pub fn query_pending_admin(deps: Deps) -> StdResult<PendingAdminResponse> {
    Ok(PendingAdminResponse {
        pending_admin: PENDING_ADMIN.may_load(deps.storage)?,
    })
}
