use cosmwasm_std::{DivideByZeroError, OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Sale has not opened yet: starts at {start}")]
    NotYetOpen { start: u64 },

    #[error("Sale is closed: ended at {end}")]
    Closed { end: u64 },

    #[error("Sold out")]
    SoldOut,

    #[error("Insufficient payment: price is {price}, paid {paid}")]
    InsufficientPayment { price: Uint128, paid: Uint128 },

    #[error("A {percentage}% discount is already active")]
    DiscountAlreadyActive { percentage: u64 },

    #[error("No active discount")]
    NoActiveDiscount,

    #[error("Invalid discount percentage: {percentage}")]
    InvalidPercentage { percentage: u64 },

    #[error("Arithmetic range error: {reason}")]
    ArithmeticRange { reason: String },

    #[error("Funds transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Ticket issuer refused: {reason}")]
    IssuerFailure { reason: String },

    #[error("Withdrawal locked until the sale closes at {end}")]
    WithdrawLocked { end: u64 },

    #[error("Nothing to withdraw")]
    NothingToWithdraw,

    #[error("Invalid sale window: start {start} must be before end {end}")]
    InvalidSaleWindow { start: u64, end: u64 },

    #[error("Invalid supply: must be greater than zero")]
    InvalidSupply,

    #[error("Invalid denom: must not be empty")]
    InvalidDenom,

    #[error("No pending admin transfer")]
    NoPendingAdmin,

    #[error("Ticket issuer not provisioned yet")]
    IssuerNotProvisioned,

    #[error("Unknown reply id: {id}")]
    UnknownReply { id: u64 },

    #[error("Cannot migrate from contract {stored}")]
    InvalidMigration { stored: String },
}

impl ContractError {
    pub fn range(reason: impl Into<String>) -> Self {
        ContractError::ArithmeticRange {
            reason: reason.into(),
        }
    }
}

impl From<OverflowError> for ContractError {
    fn from(err: OverflowError) -> Self {
        ContractError::range(err.to_string())
    }
}

impl From<DivideByZeroError> for ContractError {
    fn from(err: DivideByZeroError) -> Self {
        ContractError::range(err.to_string())
    }
}
