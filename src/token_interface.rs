//! CEP-18 token interface used by the vault to custody the staked asset
//!
//! The vault only relies on the standard fungible-token surface: pulling
//! deposits via an allowance, pushing payouts, and reading balances. Any
//! CEP-18 compliant token can back the vault; `StakeToken` in this crate is
//! one such implementation used by the tests and the deploy script.
//!
//! A transfer that the token rejects (insufficient balance or allowance)
//! reverts inside the token contract and aborts the whole vault entry point,
//! so a failed transfer never leaves a partially-recorded position.

use odra::casper_types::U256;
use odra::prelude::*;

/// External contract interface for the staked CEP-18 token
#[odra::external_contract]
pub trait FungibleToken {
    /// Transfer tokens from the caller to `to`
    fn transfer(&mut self, to: Address, amount: U256);

    /// Transfer tokens from `owner` to `to` using the caller's allowance
    fn transfer_from(&mut self, owner: Address, to: Address, amount: U256);

    /// Token balance of `owner`
    fn balance_of(&self, owner: Address) -> U256;

    /// Remaining allowance granted by `owner` to `spender`
    fn allowance(&self, owner: Address, spender: Address) -> U256;
}
