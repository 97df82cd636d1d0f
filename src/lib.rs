//! StakeVault - Fixed-term token staking for Casper Network
//!
//! This crate provides a custodial staking vault where users can:
//! - Deposit a CEP-18 token as an independent stake position
//! - Settle a position for principal plus a configured profit percentage
//!   after the holding period has elapsed
//! - Cancel a position early, forfeiting the principal
//!
//! An administrator tunes the minimum deposit, holding period and profit
//! percentage, and can halt new deposits in an emergency.

#![no_std]

extern crate alloc;

pub mod errors;
pub mod events;
pub mod stake_token;
pub mod stake_vault;
pub mod token_interface;

// Re-export main types for external use
pub use errors::*;
pub use events::*;
pub use stake_token::StakeToken;
pub use stake_vault::{StakePosition, StakeStatus, StakeVault};

// Re-export generated types only when not building for wasm32 target
#[cfg(not(target_arch = "wasm32"))]
pub use stake_token::{StakeTokenHostRef, StakeTokenInitArgs};
#[cfg(not(target_arch = "wasm32"))]
pub use stake_vault::{StakeVaultHostRef, StakeVaultInitArgs};
