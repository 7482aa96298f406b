use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Collection {
    pub name: String,
    pub symbol: String,
    /// The only address allowed to issue tickets or move the metadata pointer.
    pub minter: Addr,
    /// Base URI; a ticket's URI is this value followed by its token id.
    pub metadata_pointer: String,
    pub max_supply: u64,
    pub num_tokens: u64,
}

pub const COLLECTION: Item<Collection> = Item::new("collection");
pub const OWNERS: Map<&str, Addr> = Map::new("owners");
/// Secondary index for per-owner listing: (owner, token_id) -> ()
pub const TOKENS_BY_OWNER: Map<(&Addr, &str), ()> = Map::new("tokens_by_owner");
