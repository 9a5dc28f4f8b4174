//! The ledger interface the governance controller depends on.

use crate::error::LedgerError;
use catalyst_types::Address;
use serde::{Deserialize, Serialize};

/// Descriptive token data, as exposed by ERC20-style tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenMetadata {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self::new("Catalyst", "VOTE", 0)
    }
}

/// Balance storage for voting weight.
///
/// Implementations must leave state untouched when a call returns an error.
pub trait GovernanceLedger {
    fn metadata(&self) -> &TokenMetadata;

    /// Current balance; unknown addresses hold zero.
    fn balance_of(&self, address: &Address) -> u128;

    fn total_supply(&self) -> u128;

    /// Credit `amount` to `address`, growing the total supply.
    fn mint(&mut self, address: &Address, amount: u128) -> Result<(), LedgerError>;

    /// Debit `amount` from `address`, shrinking the total supply.
    fn burn(&mut self, address: &Address, amount: u128) -> Result<(), LedgerError>;
}
