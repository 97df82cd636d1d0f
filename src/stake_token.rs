//! Stake Token - CEP-18 fungible token backing the vault
//!
//! A plain CEP-18 token with a fixed initial supply minted to the deployer.
//! The vault holds no special privileges on it; deposits move through the
//! standard allowance mechanism like for any third-party token.

use odra::casper_types::U256;
use odra::prelude::*;
use odra_modules::cep18_token::Cep18;

/// SVT - the staked asset token
#[odra::module]
pub struct StakeToken {
    /// CEP-18 token implementation
    cep18: SubModule<Cep18>,
}

#[odra::module]
impl StakeToken {
    /// Initialize the token and mint `initial_supply` to the deployer
    pub fn init(&mut self, initial_supply: U256) {
        self.cep18.init(
            "StakeVault Token".to_string(),
            "SVT".to_string(),
            9,
            initial_supply,
        );
    }

    /// Transfer tokens - standard CEP-18 passthrough
    pub fn transfer(&mut self, to: Address, amount: U256) {
        self.cep18.transfer(&to, &amount);
    }

    /// Approve spender - standard CEP-18 passthrough
    pub fn approve(&mut self, spender: Address, amount: U256) {
        self.cep18.approve(&spender, &amount);
    }

    /// Transfer from - standard CEP-18 passthrough
    pub fn transfer_from(&mut self, owner: Address, to: Address, amount: U256) {
        self.cep18.transfer_from(&owner, &to, &amount);
    }

    /// Get token balance - standard CEP-18 view
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.cep18.balance_of(&owner)
    }

    /// Get allowance - standard CEP-18 view
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.cep18.allowance(&owner, &spender)
    }

    /// Get total supply
    pub fn total_supply(&self) -> U256 {
        self.cep18.total_supply()
    }

    /// Get token name
    pub fn name(&self) -> String {
        self.cep18.name()
    }

    /// Get token symbol
    pub fn symbol(&self) -> String {
        self.cep18.symbol()
    }

    /// Get token decimals
    pub fn decimals(&self) -> u8 {
        self.cep18.decimals()
    }
}
