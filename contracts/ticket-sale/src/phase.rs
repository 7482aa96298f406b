use cosmwasm_schema::cw_serde;

use crate::error::ContractError;
use crate::state::SaleConfig;

/// Where the sale stands at a given block time. Never stored; always derived.
#[cw_serde]
pub enum Phase {
    NotStarted,
    Active,
    SoldOut,
    Ended,
}

/// Inventory exhaustion wins over the time window, so a sold-out sale reports
/// `SoldOut` even after `sale_end`.
pub fn phase_of(config: &SaleConfig, tickets_sold: u64, now: u64) -> Phase {
    if tickets_sold >= config.total_supply {
        Phase::SoldOut
    } else if now < config.sale_start {
        Phase::NotStarted
    } else if now > config.sale_end {
        Phase::Ended
    } else {
        Phase::Active
    }
}

/// Purchase guard: only an `Active` sale accepts buyers.
pub fn ensure_open(config: &SaleConfig, tickets_sold: u64, now: u64) -> Result<(), ContractError> {
    match phase_of(config, tickets_sold, now) {
        Phase::Active => Ok(()),
        Phase::SoldOut => Err(ContractError::SoldOut),
        Phase::NotStarted => Err(ContractError::NotYetOpen {
            start: config.sale_start,
        }),
        Phase::Ended => Err(ContractError::Closed {
            end: config.sale_end,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WithdrawPolicy;
    use cosmwasm_std::Uint128;

    fn config() -> SaleConfig {
        SaleConfig {
            denom: "uticket".to_string(),
            base_price_initial: Uint128::new(100),
            total_supply: 10,
            sale_start: 100,
            sale_end: 200,
            withdraw_policy: WithdrawPolicy::AfterClose,
        }
    }

    #[test]
    fn window_boundaries_are_inclusive() {
        let config = config();
        assert_eq!(phase_of(&config, 0, 99), Phase::NotStarted);
        assert_eq!(phase_of(&config, 0, 100), Phase::Active);
        assert_eq!(phase_of(&config, 0, 200), Phase::Active);
        assert_eq!(phase_of(&config, 0, 201), Phase::Ended);
    }

    #[test]
    fn sold_out_takes_precedence() {
        let config = config();
        assert_eq!(phase_of(&config, 10, 150), Phase::SoldOut);
        assert_eq!(phase_of(&config, 10, 500), Phase::SoldOut);
        assert_eq!(ensure_open(&config, 10, 500), Err(ContractError::SoldOut));
    }

    #[test]
    fn guard_maps_phases_to_errors() {
        let config = config();
        assert_eq!(
            ensure_open(&config, 0, 50),
            Err(ContractError::NotYetOpen { start: 100 })
        );
        assert_eq!(
            ensure_open(&config, 3, 250),
            Err(ContractError::Closed { end: 200 })
        );
        assert!(ensure_open(&config, 9, 150).is_ok());
    }
}
