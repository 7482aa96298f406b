use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::phase::Phase;
use crate::state::WithdrawPolicy;

#[cw_serde]
pub struct InstantiateMsg {
    /// Collection name handed to the ticket issuer
    pub name: String,
    /// Collection symbol handed to the ticket issuer
    pub symbol: String,
    /// Initial metadata base pointer of the collection
    pub metadata_base: String,
    /// Native denom buyers pay in
    pub denom: String,
    pub base_price: Uint128,
    pub total_supply: u64,
    /// Unix seconds, inclusive
    pub sale_start: u64,
    /// Unix seconds, inclusive; must be after `sale_start`
    pub sale_end: u64,
    /// Code id of the ticket issuer contract to provision
    pub issuer_code_id: u64,
    /// Defaults to the instantiating sender
    #[serde(default)]
    pub admin: Option<String>,
    #[serde(default)]
    pub withdraw_policy: Option<WithdrawPolicy>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buy one ticket at the current price.
    /// Attach funds in the sale denom.
    Purchase {},

    /// Admin: set the undiscounted base price
    SetBasePrice { price: Uint128 },

    /// Admin: reduce the base price by a percentage (1..=99)
    SetDiscount { percentage: u64 },

    /// Admin: undo the active discount
    CancelDiscount {},

    /// Admin: forward a new metadata base pointer to the ticket issuer
    UpdateMetadataPointer { value: String },

    /// Admin: release all collected revenue to the admin
    Withdraw {},

    /// Admin: propose a new admin (step 1 of 2-step transfer)
    TransferAdmin { new_admin: String },

    /// Pending admin: accept ownership (step 2 of 2-step transfer)
    AcceptAdmin {},
}

/// Message for contract migration
#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(StateResponse)]
    State {},

    /// Live price at the current block time
    #[returns(PriceResponse)]
    CurrentPrice {},

    #[returns(SaleWindowResponse)]
    SaleWindow {},

    /// Tickets bought through this sale by one buyer
    #[returns(PurchasesResponse)]
    PurchasesOf { buyer: String },

    #[returns(PurchasersResponse)]
    Purchasers {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(PendingAdminResponse)]
    PendingAdmin {},
}

// ---- Response types ----

/// Response data of a successful purchase
#[cw_serde]
pub struct PurchaseResponse {
    pub token_id: String,
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub denom: String,
    pub base_price_initial: Uint128,
    pub total_supply: u64,
    pub sale_start: u64,
    pub sale_end: u64,
    pub issuer: Option<Addr>,
    pub withdraw_policy: WithdrawPolicy,
}

#[cw_serde]
pub struct StateResponse {
    pub base_price: Uint128,
    pub tickets_sold: u64,
    pub total_supply: u64,
    pub total_revenue: Uint128,
    pub discount_percentage: u64,
    pub withdrawn: bool,
    pub phase: Phase,
}

#[cw_serde]
pub struct PriceResponse {
    pub price: Uint128,
    pub base_price: Uint128,
    pub sale_rate: u64,
    pub target_sale_rate: u64,
    pub adjustment_factor: u64,
}

#[cw_serde]
pub struct SaleWindowResponse {
    pub sale_start: u64,
    pub sale_end: u64,
    pub phase: Phase,
}

#[cw_serde]
pub struct PurchasesResponse {
    pub buyer: Addr,
    pub count: u64,
}

#[cw_serde]
pub struct PurchasersResponse {
    pub purchasers: Vec<PurchasesResponse>,
}

#[cw_serde]
pub struct PendingAdminResponse {
    pub pending_admin: Option<Addr>,
}
