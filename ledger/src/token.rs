//! In-memory voting token.

use crate::error::LedgerError;
use crate::ledger::{GovernanceLedger, TokenMetadata};
use catalyst_types::Address;
use std::collections::HashMap;
use tracing::trace;

/// Holds balances in a map; zero balances are not stored.
#[derive(Clone, Debug, Default)]
pub struct VoteToken {
    metadata: TokenMetadata,
    balances: HashMap<Address, u128>,
    total_supply: u128,
}

impl VoteToken {
    pub fn new(metadata: TokenMetadata) -> Self {
        Self {
            metadata,
            balances: HashMap::new(),
            total_supply: 0,
        }
    }

    /// Number of addresses holding a non-zero balance.
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }
}

impl GovernanceLedger for VoteToken {
    fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    fn balance_of(&self, address: &Address) -> u128 {
        self.balances.get(address).copied().unwrap_or(0)
    }

    fn total_supply(&self) -> u128 {
        self.total_supply
    }

    fn mint(&mut self, address: &Address, amount: u128) -> Result<(), LedgerError> {
        if amount == 0 {
            return Ok(());
        }
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        // Every balance is bounded by the supply, so this cannot overflow
        // once the supply check passed.
        let balance = self.balance_of(address) + amount;
        self.balances.insert(*address, balance);
        self.total_supply = supply;
        trace!(%address, amount, balance, "minted");
        Ok(())
    }

    fn burn(&mut self, address: &Address, amount: u128) -> Result<(), LedgerError> {
        if amount == 0 {
            return Ok(());
        }
        let available = self.balance_of(address);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        let balance = available - amount;
        if balance == 0 {
            self.balances.remove(address);
        } else {
            self.balances.insert(*address, balance);
        }
        self.total_supply -= amount;
        trace!(%address, amount, balance, "burned");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_address(n: u8) -> Address {
        Address::new([n; 20])
    }

    #[test]
    fn default_metadata_matches_catalyst_token() {
        let token = VoteToken::default();
        assert_eq!(token.metadata().name, "Catalyst");
        assert_eq!(token.metadata().symbol, "VOTE");
        assert_eq!(token.metadata().decimals, 0);
    }

    #[test]
    fn mint_credits_balance_and_supply() {
        let mut token = VoteToken::default();
        token.mint(&test_address(1), 3).unwrap();
        token.mint(&test_address(1), 2).unwrap();
        token.mint(&test_address(2), 4).unwrap();
        assert_eq!(token.balance_of(&test_address(1)), 5);
        assert_eq!(token.balance_of(&test_address(2)), 4);
        assert_eq!(token.total_supply(), 9);
        assert_eq!(token.holder_count(), 2);
    }

    #[test]
    fn burn_more_than_balance_fails_without_change() {
        let mut token = VoteToken::default();
        token.mint(&test_address(1), 2).unwrap();
        let err = token.burn(&test_address(1), 3).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientBalance {
                needed: 3,
                available: 2
            }
        );
        assert_eq!(token.balance_of(&test_address(1)), 2);
        assert_eq!(token.total_supply(), 2);
    }

    #[test]
    fn burn_to_zero_drops_holder() {
        let mut token = VoteToken::default();
        token.mint(&test_address(1), 2).unwrap();
        token.burn(&test_address(1), 2).unwrap();
        assert_eq!(token.balance_of(&test_address(1)), 0);
        assert_eq!(token.holder_count(), 0);
        assert_eq!(token.total_supply(), 0);
    }

    #[test]
    fn mint_overflow_is_rejected() {
        let mut token = VoteToken::default();
        token.mint(&test_address(1), u128::MAX).unwrap();
        assert_eq!(token.mint(&test_address(2), 1), Err(LedgerError::Overflow));
        assert_eq!(token.balance_of(&test_address(2)), 0);
        assert_eq!(token.total_supply(), u128::MAX);
    }

    #[test]
    fn zero_amounts_are_no_ops() {
        let mut token = VoteToken::default();
        token.mint(&test_address(1), 0).unwrap();
        token.burn(&test_address(1), 0).unwrap();
        assert_eq!(token.holder_count(), 0);
    }
}
