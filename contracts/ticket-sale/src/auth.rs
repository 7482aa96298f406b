//! Admin control: the single check every privileged transition goes through.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

use crate::error::ContractError;

/// Decides whether a caller may run privileged transitions.
pub trait AdminAuthority {
    fn is_admin(&self, caller: &Addr) -> bool;
}

/// The caller must equal the one stored principal.
#[cw_serde]
pub struct SingleAdmin {
    pub admin: Addr,
}

impl SingleAdmin {
    pub fn new(admin: Addr) -> Self {
        Self { admin }
    }
}

impl AdminAuthority for SingleAdmin {
    fn is_admin(&self, caller: &Addr) -> bool {
        *caller == self.admin
    }
}

pub fn ensure_admin(authority: &dyn AdminAuthority, caller: &Addr) -> Result<(), ContractError> {
    if !authority.is_admin(caller) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nobody;

    impl AdminAuthority for Nobody {
        fn is_admin(&self, _caller: &Addr) -> bool {
            false
        }
    }

    #[test]
    fn single_admin_matches_only_its_principal() {
        let authority = SingleAdmin::new(Addr::unchecked("admin"));
        assert!(ensure_admin(&authority, &Addr::unchecked("admin")).is_ok());
        assert_eq!(
            ensure_admin(&authority, &Addr::unchecked("mallory")),
            Err(ContractError::Unauthorized)
        );
    }

    #[test]
    fn alternate_authority_is_honoured() {
        assert_eq!(
            ensure_admin(&Nobody, &Addr::unchecked("admin")),
            Err(ContractError::Unauthorized)
        );
    }
}
