use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Supply exhausted: all {max_supply} tickets have been issued")]
    SupplyExhausted { max_supply: u64 },

    #[error("Token already issued: {token_id}")]
    TokenExists { token_id: String },

    #[error("Token not found: {token_id}")]
    TokenNotFound { token_id: String },

    #[error("Invalid max supply: must be greater than zero")]
    InvalidMaxSupply,

    #[error("Cannot migrate from contract {stored}")]
    InvalidMigration { stored: String },
}
