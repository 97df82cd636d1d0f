//! StakeVault - Fixed-term token staking contract
//!
//! Users deposit a CEP-18 token into the vault's custody. Each deposit is an
//! independent stake position that can be settled for principal plus a
//! configurable profit percentage once the configured holding period has
//! elapsed. Cancelling a position before settlement forfeits the principal.

use alloc::vec::Vec;
use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;

use crate::errors::Error;
use crate::events::{
    AdminTransferred, MinAmountUpdated, Paused, ProfitPercentUpdated, RewardClaimed, StakeCancelled,
    StakeDurationUpdated, Staked, Unpaused,
};
use crate::token_interface::FungibleTokenContractRef;

/// Lifecycle of a stake position. `Closed` and `Settled` are terminal;
/// a position leaves `Active` exactly once.
#[odra::odra_type]
pub enum StakeStatus {
    /// Deposited, not yet cancelled or settled
    Active,
    /// Cancelled by the holder; principal forfeited
    Closed,
    /// Holding period served, principal plus profit paid out
    Settled,
}

/// One deposit record. `holder`, `amount` and `created_at` never change
/// after creation; only `status` transitions.
#[odra::odra_type]
pub struct StakePosition {
    pub id: u64,
    pub holder: Address,
    pub amount: U256,
    pub created_at: u64,
    pub status: StakeStatus,
}

/// StakeVault - fixed-term staking ledger
#[odra::module]
pub struct StakeVault {
    // Staked asset (CEP-18)
    token: Var<Address>,

    // Tunable parameters, read fresh at every operation. A change applies
    // retroactively to the future settlement of all existing positions.
    min_amount: Var<U256>,
    stake_duration: Var<u64>,
    profit_percent: Var<u64>,

    // Ledger
    stake_counter: Var<u64>,
    stakes: Mapping<u64, StakePosition>,
    user_stakes: Mapping<Address, Vec<u64>>,
    holders: Var<Vec<Address>>,

    // Admin
    admin: Var<Address>,
    is_paused: Var<bool>,
}

const PERCENT_BASE: u64 = 100;

#[odra::module]
impl StakeVault {
    /// Initialize the vault
    ///
    /// # Arguments
    /// * `token` - Address of the CEP-18 token held in custody
    /// * `min_amount` - Minimum acceptable deposit
    /// * `stake_duration` - Holding period in milliseconds
    /// * `profit_percent` - Percentage added to the principal on settlement
    /// * `admin` - Admin address for parameter management
    pub fn init(
        &mut self,
        token: Address,
        min_amount: U256,
        stake_duration: u64,
        profit_percent: u64,
        admin: Address,
    ) {
        self.token.set(token);
        self.admin.set(admin);
        self.min_amount.set(min_amount);
        self.stake_duration.set(stake_duration);
        self.profit_percent.set(profit_percent);
        self.is_paused.set(false);
        self.stake_counter.set(0);
    }

    // ============ CORE FUNCTIONS ============

    /// Deposit `amount` of the staked token and open a new position
    ///
    /// Pulls the deposit from the caller through the token's allowance
    /// mechanism, so the caller must have approved the vault beforehand.
    /// Returns the id of the new position. Ids are sequential starting at 1
    /// and never reused.
    pub fn stake(&mut self, amount: U256) -> u64 {
        self.require_not_paused();

        let caller = self.env().caller();

        let min = self.min_amount.get_or_default();
        if amount.is_zero() || amount < min {
            self.env().revert(Error::InsufficientAmount);
        }

        // Pull the deposit into custody. A rejected transfer reverts the
        // whole call before any position is recorded.
        self.token_ref()
            .transfer_from(caller, self.env().self_address(), amount);

        let stake_id = self.stake_counter.get_or_default() + 1;
        self.stake_counter.set(stake_id);

        let position = StakePosition {
            id: stake_id,
            holder: caller,
            amount,
            created_at: self.env().get_block_time(),
            status: StakeStatus::Active,
        };
        self.stakes.set(&stake_id, position);

        // Track the holder's positions; first deposit also registers the
        // holder in the distinct-holder list.
        let mut ids = self.user_stakes.get(&caller).unwrap_or_default();
        if ids.is_empty() {
            let mut holders = self.holders.get_or_default();
            holders.push(caller);
            self.holders.set(holders);
        }
        ids.push(stake_id);
        self.user_stakes.set(&caller, ids);

        self.env().emit_event(Staked {
            holder: caller,
            stake_id,
            amount,
        });

        stake_id
    }

    /// Cancel an active position
    ///
    /// The principal stays in the vault's custody: early exit forfeits the
    /// deposit and no reward is ever paid for the position.
    pub fn cancel_stake(&mut self, stake_id: u64) {
        let caller = self.env().caller();

        let mut stake = self
            .stakes
            .get(&stake_id)
            .unwrap_or_revert_with(&self.env(), Error::StakeNotFound);

        if stake.holder != caller {
            self.env().revert(Error::WrongHolder);
        }

        if !matches!(stake.status, StakeStatus::Active) {
            self.env().revert(Error::AlreadyClosed);
        }

        stake.status = StakeStatus::Closed;
        self.stakes.set(&stake_id, stake.clone());

        self.env().emit_event(StakeCancelled {
            holder: caller,
            stake_id,
            amount: stake.amount,
        });
    }

    /// Check whether a position can be settled right now
    ///
    /// Never fails: returns false for unknown ids, positions that already
    /// left `Active`, and positions whose holding period has not elapsed.
    pub fn claim_rewardable(&self, stake_id: u64) -> bool {
        match self.stakes.get(&stake_id) {
            Some(stake) => {
                matches!(stake.status, StakeStatus::Active)
                    && self.env().get_block_time() - stake.created_at
                        >= self.stake_duration.get_or_default()
            }
            None => false,
        }
    }

    /// Settle a position after the holding period
    ///
    /// Pays `amount * (100 + profit_percent) / 100` to the holder, truncating
    /// the remainder. The duration and profit percentage used are whatever
    /// the vault holds at settlement time, not at deposit time.
    pub fn claim_reward(&mut self, stake_id: u64) -> U256 {
        let caller = self.env().caller();

        let mut stake = self
            .stakes
            .get(&stake_id)
            .unwrap_or_revert_with(&self.env(), Error::StakeNotFound);

        let elapsed = self.env().get_block_time() - stake.created_at;
        if elapsed < self.stake_duration.get_or_default() {
            self.env().revert(Error::TooEarly);
        }

        if stake.holder != caller {
            self.env().revert(Error::WrongHolder);
        }

        if !matches!(stake.status, StakeStatus::Active) {
            self.env().revert(Error::AlreadyClosed);
        }

        // Multiply before dividing to minimize rounding loss.
        let profit = self.profit_percent.get_or_default();
        let payout = stake.amount * (U256::from(PERCENT_BASE) + U256::from(profit))
            / U256::from(PERCENT_BASE);

        stake.status = StakeStatus::Settled;
        self.stakes.set(&stake_id, stake.clone());

        // Push the payout to the holder. A rejected transfer reverts the
        // status change along with everything else.
        self.token_ref().transfer(caller, payout);

        self.env().emit_event(RewardClaimed {
            holder: caller,
            stake_id,
            amount: stake.amount,
            payout,
        });

        payout
    }

    // ============ VIEW FUNCTIONS ============

    /// Get the full record of one position
    pub fn get_stake_by_id(&self, stake_id: u64) -> Option<StakePosition> {
        self.stakes.get(&stake_id)
    }

    /// Get the ids of every position a holder ever created, in creation
    /// order. Closed and settled ids are never pruned.
    pub fn get_stakes_by_user(&self, holder: Address) -> Vec<u64> {
        self.user_stakes.get(&holder).unwrap_or_default()
    }

    /// Get every distinct holder, in first-deposit order
    pub fn get_all_holders(&self) -> Vec<Address> {
        self.holders.get_or_default()
    }

    /// Token balance currently in the vault's custody
    pub fn balance_of_contract(&self) -> U256 {
        self.token_ref().balance_of(self.env().self_address())
    }

    /// Total number of positions ever created
    pub fn get_stake_count(&self) -> u64 {
        self.stake_counter.get_or_default()
    }

    pub fn get_min_amount(&self) -> U256 {
        self.min_amount.get_or_default()
    }

    /// Holding period in milliseconds
    pub fn get_stake_duration(&self) -> u64 {
        self.stake_duration.get_or_default()
    }

    pub fn get_profit_percent(&self) -> u64 {
        self.profit_percent.get_or_default()
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused.get_or_default()
    }

    /// Get the staked token address
    pub fn get_token(&self) -> Option<Address> {
        self.token.get()
    }

    /// Get the admin address
    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get()
    }

    // ============ ADMIN FUNCTIONS ============

    /// Halt new deposits. Cancellation and settlement stay available so
    /// holders can always exit or collect what they are owed.
    pub fn pause(&mut self) {
        self.require_admin();
        self.is_paused.set(true);
        self.env().emit_event(Paused {
            by: self.env().caller(),
        });
    }

    /// Resume accepting deposits
    pub fn unpause(&mut self) {
        self.require_admin();
        self.is_paused.set(false);
        self.env().emit_event(Unpaused {
            by: self.env().caller(),
        });
    }

    pub fn set_min_amount(&mut self, min_amount: U256) {
        self.require_admin();
        let old_value = self.min_amount.get_or_default();
        self.min_amount.set(min_amount);
        self.env().emit_event(MinAmountUpdated {
            old_value,
            new_value: min_amount,
        });
    }

    /// Set the holding period in milliseconds. Applies to the future
    /// settlement of every existing position as well.
    pub fn set_stake_duration(&mut self, stake_duration: u64) {
        self.require_admin();
        let old_value = self.stake_duration.get_or_default();
        self.stake_duration.set(stake_duration);
        self.env().emit_event(StakeDurationUpdated {
            old_value,
            new_value: stake_duration,
        });
    }

    /// Set the profit percentage. Pending positions settle at the new rate.
    pub fn set_profit_percent(&mut self, profit_percent: u64) {
        self.require_admin();
        let old_value = self.profit_percent.get_or_default();
        self.profit_percent.set(profit_percent);
        self.env().emit_event(ProfitPercentUpdated {
            old_value,
            new_value: profit_percent,
        });
    }

    pub fn transfer_admin(&mut self, new_admin: Address) {
        self.require_admin();
        let old_admin = self
            .admin
            .get()
            .unwrap_or_revert_with(&self.env(), Error::AdminNotSet);
        self.admin.set(new_admin);
        self.env().emit_event(AdminTransferred {
            old_admin,
            new_admin,
        });
    }

    // ============ INTERNAL FUNCTIONS ============

    fn require_not_paused(&self) {
        if self.is_paused.get_or_default() {
            self.env().revert(Error::ContractPaused);
        }
    }

    fn require_admin(&self) {
        let admin = self
            .admin
            .get()
            .unwrap_or_revert_with(&self.env(), Error::AdminNotSet);
        if self.env().caller() != admin {
            self.env().revert(Error::Unauthorized);
        }
    }

    fn token_ref(&self) -> FungibleTokenContractRef {
        let token = self
            .token
            .get()
            .unwrap_or_revert_with(&self.env(), Error::TokenNotSet);
        FungibleTokenContractRef::new(self.env(), token)
    }
}
