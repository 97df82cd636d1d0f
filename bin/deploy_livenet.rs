//! Livenet deployment script for StakeVault contracts
//!
//! Deploys StakeToken and StakeVault to a Casper network and wires the
//! vault to the token. Parameters come from environment variables with
//! defaults suitable for a testnet dry run.

use odra::casper_types::U256;
use odra::host::Deployer;
use odra::prelude::Addressable;
use stakevault::{StakeToken, StakeTokenInitArgs, StakeVault, StakeVaultInitArgs};

/// Read a u64 parameter from the environment. A missing variable falls back
/// to the default; a present but unparsable one aborts the deployment.
fn env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be an integer, got: {value}")),
        Err(_) => default,
    }
}

fn main() {
    // Load the Casper livenet environment
    let env = odra_casper_livenet_env::env();

    // Caller is the deployer and admin
    let deployer = env.caller();
    println!("Deployer address: {}", deployer.to_string());

    let initial_supply = env_u64("INITIAL_SUPPLY", 1_000_000_000_000_000_000);
    let min_amount = env_u64("MIN_AMOUNT", 1_000_000_000);
    let stake_duration = env_u64("STAKE_DURATION_MS", 7 * 24 * 60 * 60 * 1000);
    let profit_percent = env_u64("PROFIT_PERCENT", 10);

    // Step 1: Deploy the staked asset token
    println!("\n=== Deploying StakeToken ===");
    env.set_gas(200_000_000_000u64); // 200 CSPR gas (CEP-18 needs more)

    let token = StakeToken::deploy(
        &env,
        StakeTokenInitArgs {
            initial_supply: U256::from(initial_supply),
        },
    );
    let token_address = token.address();
    println!("StakeToken deployed at: {}", token_address.to_string());

    // Step 2: Deploy the vault pointing at the token
    println!("\n=== Deploying StakeVault ===");
    env.set_gas(400_000_000_000u64); // 400 CSPR gas

    let vault = StakeVault::deploy(
        &env,
        StakeVaultInitArgs {
            token: token_address,
            min_amount: U256::from(min_amount),
            stake_duration,
            profit_percent,
            admin: deployer,
        },
    );
    let vault_address = vault.address();
    println!("StakeVault deployed at: {}", vault_address.to_string());

    // Verify deployment
    println!("\n=== Deployment Summary ===");
    println!("StakeToken: {}", token_address.to_string());
    println!("StakeVault: {}", vault_address.to_string());
    println!("Admin: {}", deployer.to_string());
    println!("Min amount: {}", min_amount);
    println!("Stake duration (ms): {}", stake_duration);
    println!("Profit percent: {}", profit_percent);
    println!("\nDeployment complete!");
}
