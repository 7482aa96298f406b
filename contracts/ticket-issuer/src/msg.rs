use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub minter: String,
    pub metadata_base: String,
    pub max_supply: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Minter: issue one ticket to `owner` under the given id
    Issue { owner: String, token_id: String },

    /// Minter: replace the collection's metadata base pointer
    SetMetadataPointer { value: String },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CollectionInfoResponse)]
    CollectionInfo {},

    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: String },

    #[returns(TokenUriResponse)]
    TokenUri { token_id: String },

    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

// ---- Response types ----

#[cw_serde]
pub struct CollectionInfoResponse {
    pub name: String,
    pub symbol: String,
    pub minter: Addr,
    pub metadata_pointer: String,
    pub max_supply: u64,
    pub num_tokens: u64,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct TokenUriResponse {
    pub token_uri: String,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<String>,
}
