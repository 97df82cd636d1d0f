//! Events for the StakeVault contract (CEP-88 compliant)

use odra::casper_types::U256;
use odra::prelude::*;

/// Emitted when a user creates a new stake position
#[odra::event]
pub struct Staked {
    pub holder: Address,
    pub stake_id: u64,
    pub amount: U256,
}

/// Emitted when a holder cancels a position; the principal is forfeited
#[odra::event]
pub struct StakeCancelled {
    pub holder: Address,
    pub stake_id: u64,
    pub amount: U256,
}

/// Emitted when a position is settled and the payout transferred
#[odra::event]
pub struct RewardClaimed {
    pub holder: Address,
    pub stake_id: u64,
    pub amount: U256,
    pub payout: U256,
}

/// Emitted when new deposits are halted
#[odra::event]
pub struct Paused {
    pub by: Address,
}

/// Emitted when new deposits are resumed
#[odra::event]
pub struct Unpaused {
    pub by: Address,
}

/// Emitted when the minimum deposit amount is changed
#[odra::event]
pub struct MinAmountUpdated {
    pub old_value: U256,
    pub new_value: U256,
}

/// Emitted when the holding period is changed
#[odra::event]
pub struct StakeDurationUpdated {
    pub old_value: u64,
    pub new_value: u64,
}

/// Emitted when the profit percentage is changed
#[odra::event]
pub struct ProfitPercentUpdated {
    pub old_value: u64,
    pub new_value: u64,
}

/// Emitted when the administrator role is handed over
#[odra::event]
pub struct AdminTransferred {
    pub old_admin: Address,
    pub new_admin: Address,
}
