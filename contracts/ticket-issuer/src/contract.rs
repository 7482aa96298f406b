use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult,
};
use cw2::{get_contract_version, set_contract_version};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    CollectionInfoResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, OwnerOfResponse, QueryMsg,
    TokenUriResponse, TokensResponse,
};
use crate::state::{Collection, COLLECTION, OWNERS, TOKENS_BY_OWNER};

const CONTRACT_NAME: &str = "crates.io:ticket-issuer";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.max_supply == 0 {
        return Err(ContractError::InvalidMaxSupply);
    }

    let collection = Collection {
        name: msg.name,
        symbol: msg.symbol,
        minter: deps.api.addr_validate(&msg.minter)?,
        metadata_pointer: msg.metadata_base,
        max_supply: msg.max_supply,
        num_tokens: 0,
    };
    COLLECTION.save(deps.storage, &collection)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("name", collection.name)
        .add_attribute("symbol", collection.symbol)
        .add_attribute("minter", collection.minter.to_string())
        .add_attribute("max_supply", collection.max_supply.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Issue { owner, token_id } => execute_issue(deps, info, owner, token_id),
        ExecuteMsg::SetMetadataPointer { value } => {
            execute_set_metadata_pointer(deps, info, value)
        }
    }
}

fn execute_issue(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    token_id: String,
) -> Result<Response, ContractError> {
    let mut collection = COLLECTION.load(deps.storage)?;
    if info.sender != collection.minter {
        return Err(ContractError::Unauthorized);
    }
    if collection.num_tokens >= collection.max_supply {
        return Err(ContractError::SupplyExhausted {
            max_supply: collection.max_supply,
        });
    }
    if OWNERS.has(deps.storage, &token_id) {
        return Err(ContractError::TokenExists { token_id });
    }

    let owner = deps.api.addr_validate(&owner)?;
    OWNERS.save(deps.storage, &token_id, &owner)?;
    TOKENS_BY_OWNER.save(deps.storage, (&owner, &token_id), &())?;

    collection.num_tokens += 1;
    COLLECTION.save(deps.storage, &collection)?;

    Ok(Response::new()
        .add_attribute("action", "issue")
        .add_attribute("token_id", token_id)
        .add_attribute("owner", owner.to_string())
        .add_attribute("num_tokens", collection.num_tokens.to_string()))
}

fn execute_set_metadata_pointer(
    deps: DepsMut,
    info: MessageInfo,
    value: String,
) -> Result<Response, ContractError> {
    let mut collection = COLLECTION.load(deps.storage)?;
    if info.sender != collection.minter {
        return Err(ContractError::Unauthorized);
    }

    collection.metadata_pointer = value;
    COLLECTION.save(deps.storage, &collection)?;

    Ok(Response::new()
        .add_attribute("action", "set_metadata_pointer")
        .add_attribute("metadata_pointer", collection.metadata_pointer))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            stored: stored.contract,
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CollectionInfo {} => to_json_binary(&query_collection_info(deps)?),
        QueryMsg::OwnerOf { token_id } => to_json_binary(&query_owner_of(deps, token_id)?),
        QueryMsg::TokenUri { token_id } => to_json_binary(&query_token_uri(deps, token_id)?),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => to_json_binary(&query_tokens(deps, owner, start_after, limit)?),
    }
}

fn query_collection_info(deps: Deps) -> StdResult<CollectionInfoResponse> {
    let collection = COLLECTION.load(deps.storage)?;
    Ok(CollectionInfoResponse {
        name: collection.name,
        symbol: collection.symbol,
        minter: collection.minter,
        metadata_pointer: collection.metadata_pointer,
        max_supply: collection.max_supply,
        num_tokens: collection.num_tokens,
    })
}

fn query_owner_of(deps: Deps, token_id: String) -> StdResult<OwnerOfResponse> {
    let owner = OWNERS.load(deps.storage, &token_id)?;
    Ok(OwnerOfResponse { owner })
}

fn query_token_uri(deps: Deps, token_id: String) -> StdResult<TokenUriResponse> {
    let collection = COLLECTION.load(deps.storage)?;
    // Unknown ids have no URI
    OWNERS.load(deps.storage, &token_id)?;
    Ok(TokenUriResponse {
        token_uri: format!("{}{}", collection.metadata_pointer, token_id),
    })
}

fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let tokens = TOKENS_BY_OWNER
        .prefix(&owner)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokensResponse { tokens })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{from_json, Addr};

    const MINTER: &str = "sale_contract";

    fn setup_collection(deps: DepsMut, max_supply: u64) {
        let msg = InstantiateMsg {
            name: "Launch Night".to_string(),
            symbol: "LNT".to_string(),
            minter: MINTER.to_string(),
            metadata_base: "ipfs://tickets/".to_string(),
            max_supply,
        };
        instantiate(deps, mock_env(), mock_info("creator", &[]), msg).unwrap();
    }

    fn issue(deps: DepsMut, sender: &str, owner: &str, token_id: &str) -> Result<Response, ContractError> {
        execute(
            deps,
            mock_env(),
            mock_info(sender, &[]),
            ExecuteMsg::Issue {
                owner: owner.to_string(),
                token_id: token_id.to_string(),
            },
        )
    }

    #[test]
    fn instantiate_rejects_zero_supply() {
        let mut deps = mock_dependencies();
        let msg = InstantiateMsg {
            name: "Empty".to_string(),
            symbol: "EMP".to_string(),
            minter: MINTER.to_string(),
            metadata_base: String::new(),
            max_supply: 0,
        };
        let err = instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), msg).unwrap_err();
        assert_eq!(err, ContractError::InvalidMaxSupply);
    }

    #[test]
    fn minter_issues_and_uri_follows_pointer() {
        let mut deps = mock_dependencies();
        setup_collection(deps.as_mut(), 2);

        issue(deps.as_mut(), MINTER, "alice", "1").unwrap();

        let res = query(deps.as_ref(), mock_env(), QueryMsg::OwnerOf { token_id: "1".to_string() }).unwrap();
        let owner: OwnerOfResponse = from_json(res).unwrap();
        assert_eq!(owner.owner, Addr::unchecked("alice"));

        let res = query(deps.as_ref(), mock_env(), QueryMsg::TokenUri { token_id: "1".to_string() }).unwrap();
        let uri: TokenUriResponse = from_json(res).unwrap();
        assert_eq!(uri.token_uri, "ipfs://tickets/1");

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info(MINTER, &[]),
            ExecuteMsg::SetMetadataPointer { value: "https://meta.example/".to_string() },
        )
        .unwrap();

        let res = query(deps.as_ref(), mock_env(), QueryMsg::TokenUri { token_id: "1".to_string() }).unwrap();
        let uri: TokenUriResponse = from_json(res).unwrap();
        assert_eq!(uri.token_uri, "https://meta.example/1");
    }

    #[test]
    fn only_minter_can_issue_or_repoint() {
        let mut deps = mock_dependencies();
        setup_collection(deps.as_mut(), 2);

        let err = issue(deps.as_mut(), "alice", "alice", "1").unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("alice", &[]),
            ExecuteMsg::SetMetadataPointer { value: "x".to_string() },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
    }

    #[test]
    fn issue_refuses_past_supply_and_duplicates() {
        let mut deps = mock_dependencies();
        setup_collection(deps.as_mut(), 2);

        issue(deps.as_mut(), MINTER, "alice", "1").unwrap();
        let err = issue(deps.as_mut(), MINTER, "bob", "1").unwrap_err();
        assert_eq!(err, ContractError::TokenExists { token_id: "1".to_string() });

        issue(deps.as_mut(), MINTER, "bob", "2").unwrap();
        let err = issue(deps.as_mut(), MINTER, "carol", "3").unwrap_err();
        assert_eq!(err, ContractError::SupplyExhausted { max_supply: 2 });

        let res = query(deps.as_ref(), mock_env(), QueryMsg::CollectionInfo {}).unwrap();
        let info: CollectionInfoResponse = from_json(res).unwrap();
        assert_eq!(info.num_tokens, 2);
    }

    #[test]
    fn tokens_by_owner_paginates() {
        let mut deps = mock_dependencies();
        setup_collection(deps.as_mut(), 5);

        for id in ["1", "2", "3"] {
            issue(deps.as_mut(), MINTER, "alice", id).unwrap();
        }
        issue(deps.as_mut(), MINTER, "bob", "4").unwrap();

        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::Tokens { owner: "alice".to_string(), start_after: None, limit: Some(2) },
        )
        .unwrap();
        let page: TokensResponse = from_json(res).unwrap();
        assert_eq!(page.tokens, vec!["1".to_string(), "2".to_string()]);

        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::Tokens {
                owner: "alice".to_string(),
                start_after: Some("2".to_string()),
                limit: None,
            },
        )
        .unwrap();
        let page: TokensResponse = from_json(res).unwrap();
        assert_eq!(page.tokens, vec!["3".to_string()]);
    }
}
