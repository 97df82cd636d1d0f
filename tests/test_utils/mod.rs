//! Test utilities and helpers for StakeVault tests

#![allow(dead_code)]

use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv, HostRef};
use odra::prelude::*;

use stakevault::stake_token::{StakeToken, StakeTokenHostRef, StakeTokenInitArgs};
use stakevault::stake_vault::{StakeVault, StakeVaultHostRef, StakeVaultInitArgs};

/// Constants for testing
pub const INITIAL_SUPPLY: u64 = 1_000_000;
pub const MIN_AMOUNT: u64 = 300;
pub const STAKE_DURATION_MS: u64 = 5_000; // 5 seconds
pub const PROFIT_PERCENT: u64 = 20;
pub const USER_FUNDS: u64 = 10_000;

/// Deploy the token and a vault wired to it. Account 0 deploys both, holds
/// the initial token supply and acts as admin.
pub fn deploy_stack(env: &HostEnv) -> (StakeVaultHostRef, StakeTokenHostRef, Address) {
    let admin = env.get_account(0);

    let token = StakeToken::deploy(
        env,
        StakeTokenInitArgs {
            initial_supply: U256::from(INITIAL_SUPPLY),
        },
    );

    let vault = StakeVault::deploy(
        env,
        StakeVaultInitArgs {
            token: token.address(),
            min_amount: U256::from(MIN_AMOUNT),
            stake_duration: STAKE_DURATION_MS,
            profit_percent: PROFIT_PERCENT,
            admin,
        },
    );

    (vault, token, admin)
}

/// Move `amount` tokens from the admin to `user` and approve the vault to
/// pull them, mirroring the allowance flow a real depositor goes through.
pub fn fund_and_approve(
    env: &HostEnv,
    token: &mut StakeTokenHostRef,
    vault_address: Address,
    admin: Address,
    user: Address,
    amount: u64,
) {
    env.set_caller(admin);
    token.transfer(user, U256::from(amount));
    env.set_caller(user);
    token.approve(vault_address, U256::from(amount));
}

/// Top up the vault's custody so settlements can pay out the profit share
/// on top of the returned principal.
pub fn fund_vault_reserve(
    env: &HostEnv,
    token: &mut StakeTokenHostRef,
    vault_address: Address,
    admin: Address,
    amount: u64,
) {
    env.set_caller(admin);
    token.transfer(vault_address, U256::from(amount));
}

/// Expected settlement payout with truncating integer division
pub fn expected_payout(amount: u64, profit_percent: u64) -> U256 {
    U256::from(amount * (100 + profit_percent) / 100)
}
