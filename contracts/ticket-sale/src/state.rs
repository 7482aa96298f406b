use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use crate::auth::SingleAdmin;

/// When the admin may release collected funds.
#[cw_serde]
#[derive(Default)]
pub enum WithdrawPolicy {
    /// Only once block time is past `sale_end`.
    #[default]
    AfterClose,
    /// At any point, including while the sale is running.
    Anytime,
}

/// Fixed at instantiation, never rewritten.
#[cw_serde]
pub struct SaleConfig {
    pub denom: String,
    pub base_price_initial: Uint128,
    pub total_supply: u64,
    pub sale_start: u64,
    pub sale_end: u64,
    pub withdraw_policy: WithdrawPolicy,
}

#[cw_serde]
pub struct SaleState {
    /// Undiscounted reference price; only admin transitions move it.
    pub base_price: Uint128,
    pub tickets_sold: u64,
    /// Funds received and not yet withdrawn.
    pub total_revenue: Uint128,
    /// 0 = no discount active.
    pub discount_percentage: u64,
    pub withdrawn: bool,
}

impl SaleState {
    pub fn new(base_price: Uint128) -> Self {
        Self {
            base_price,
            tickets_sold: 0,
            total_revenue: Uint128::zero(),
            discount_percentage: 0,
            withdrawn: false,
        }
    }
}

// ---- Storage keys ----

pub const CONFIG: Item<SaleConfig> = Item::new("config");
pub const STATE: Item<SaleState> = Item::new("state");
pub const ADMIN: Item<SingleAdmin> = Item::new("admin");
pub const ISSUER: Item<Addr> = Item::new("issuer");

/// Tickets bought through this sale, per buyer. Entries are never removed.
pub const PURCHASES: Map<&Addr, u64> = Map::new("purchases");

/// Pending admin for 2-step ownership transfer
pub const PENDING_ADMIN: Item<Addr> = Item::new("pending_admin");
