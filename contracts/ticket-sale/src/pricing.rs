//! Velocity-adjusted ticket pricing.
//!
//! The live price is the base price plus a surcharge proportional to how far
//! the observed sale rate deviates from the target rate, where the target is
//! the rate that would sell the remaining inventory in half the remaining
//! time. The surcharge applies in both directions: selling slower than
//! target raises the price just as selling faster does.
//!
//! Rates are whole tickets per second, truncated.

use cosmwasm_std::Uint128;

use crate::error::ContractError;
use crate::state::{SaleConfig, SaleState};

const PERCENT: u64 = 100;

/// Intermediate values of one price computation, exposed for queries and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    pub sale_rate: u64,
    pub target_sale_rate: u64,
    pub adjustment_factor: u64,
    pub price: Uint128,
}

pub fn compute_price(
    config: &SaleConfig,
    state: &SaleState,
    now: u64,
) -> Result<Uint128, ContractError> {
    quote(config, state, now).map(|q| q.price)
}

pub fn quote(config: &SaleConfig, state: &SaleState, now: u64) -> Result<PriceQuote, ContractError> {
    let tickets_left = config
        .total_supply
        .checked_sub(state.tickets_sold)
        .ok_or_else(|| ContractError::range("tickets sold exceeds total supply"))?;
    let elapsed = now
        .checked_sub(config.sale_start)
        .ok_or_else(|| ContractError::range("block time is before sale start"))?;
    let time_left = config
        .sale_end
        .checked_sub(now)
        .ok_or_else(|| ContractError::range("block time is after sale end"))?;

    if elapsed == 0 {
        return Err(ContractError::range(
            "no time elapsed since sale start, sale rate is undefined",
        ));
    }
    let sale_rate = state.tickets_sold / elapsed;

    let target_sale_rate = if tickets_left == 0 {
        sale_rate
    } else if time_left == 0 {
        return Err(ContractError::range(
            "no time left before sale end, target rate is undefined",
        ));
    } else {
        tickets_left
            .checked_mul(2)
            .ok_or_else(|| ContractError::range("target rate overflow"))?
            / time_left
    };

    let adjustment_factor = adjustment_factor(sale_rate, target_sale_rate)?;

    let multiplier = PERCENT
        .checked_add(adjustment_factor)
        .ok_or_else(|| ContractError::range("adjustment factor overflow"))?;
    let price = state
        .base_price
        .checked_mul(Uint128::from(multiplier))?
        .checked_div(Uint128::from(PERCENT))?;

    Ok(PriceQuote {
        sale_rate,
        target_sale_rate,
        adjustment_factor,
        price,
    })
}

/// Percentage deviation of `sale_rate` from `target`, rounded down.
/// A zero target carries no urgency signal and yields no adjustment.
pub fn adjustment_factor(sale_rate: u64, target: u64) -> Result<u64, ContractError> {
    if target == 0 {
        return Ok(0);
    }
    let deviation = sale_rate.abs_diff(target);
    let scaled = deviation
        .checked_mul(PERCENT)
        .ok_or_else(|| ContractError::range("adjustment factor overflow"))?;
    Ok(scaled / target)
}
