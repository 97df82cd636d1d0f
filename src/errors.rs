//! Error definitions for the StakeVault contract

use odra::prelude::*;

/// StakeVault errors
#[odra::odra_error]
pub enum Error {
    /// Caller is not the administrator
    Unauthorized = 1,
    /// New deposits are halted
    ContractPaused = 2,
    /// Deposit amount is below the configured minimum
    InsufficientAmount = 3,
    /// No stake position exists under this id
    StakeNotFound = 4,
    /// Caller is not the holder of this stake position
    WrongHolder = 5,
    /// Stake position already left the Active state
    AlreadyClosed = 6,
    /// Holding period has not elapsed yet
    TooEarly = 7,
    /// Admin address not set
    AdminNotSet = 8,
    /// Staked token address not set
    TokenNotSet = 9,
}
