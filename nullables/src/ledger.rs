//! Nullable ledger: controllable balances for testing.

use catalyst_ledger::{GovernanceLedger, LedgerError, TokenMetadata};
use catalyst_types::Address;
use std::collections::HashMap;

/// An in-memory ledger whose failures are scripted by the test.
pub struct NullLedger {
    metadata: TokenMetadata,
    balances: HashMap<Address, u128>,
    total_supply: u128,
    mint_calls: usize,
    burn_calls: usize,
    fail_mint_at: Option<usize>,
    fail_burn_at: Option<usize>,
}

impl NullLedger {
    pub fn new() -> Self {
        Self {
            metadata: TokenMetadata::default(),
            balances: HashMap::new(),
            total_supply: 0,
            mint_calls: 0,
            burn_calls: 0,
            fail_mint_at: None,
            fail_burn_at: None,
        }
    }

    /// Let `n` more mints succeed, then fail the next one.
    pub fn fail_mint_after(&mut self, n: usize) {
        self.fail_mint_at = Some(self.mint_calls + n);
    }

    /// Let `n` more burns succeed, then fail the next one.
    pub fn fail_burn_after(&mut self, n: usize) {
        self.fail_burn_at = Some(self.burn_calls + n);
    }

    /// Total mint calls seen, including failed ones.
    pub fn mint_calls(&self) -> usize {
        self.mint_calls
    }

    /// Total burn calls seen, including failed ones.
    pub fn burn_calls(&self) -> usize {
        self.burn_calls
    }

    /// Overwrite a balance directly, adjusting the supply to match.
    pub fn set_balance(&mut self, address: &Address, amount: u128) {
        let previous = self.balances.insert(*address, amount).unwrap_or(0);
        self.total_supply = self.total_supply - previous + amount;
    }
}

impl Default for NullLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl GovernanceLedger for NullLedger {
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
        let call = self.mint_calls;
        self.mint_calls += 1;
        if self.fail_mint_at == Some(call) {
            self.fail_mint_at = None;
            return Err(LedgerError::Unavailable(format!("scripted mint failure #{call}")));
        }
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        *self.balances.entry(*address).or_insert(0) += amount;
        self.total_supply = supply;
        Ok(())
    }

    fn burn(&mut self, address: &Address, amount: u128) -> Result<(), LedgerError> {
        let call = self.burn_calls;
        self.burn_calls += 1;
        if self.fail_burn_at == Some(call) {
            self.fail_burn_at = None;
            return Err(LedgerError::Unavailable(format!("scripted burn failure #{call}")));
        }
        let available = self.balance_of(address);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        self.balances.insert(*address, available - amount);
        self.total_supply -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_mint_failure_fires_once() {
        let addr = Address::new([1; 20]);
        let mut ledger = NullLedger::new();
        ledger.fail_mint_after(1);
        assert!(ledger.mint(&addr, 1).is_ok());
        assert!(matches!(
            ledger.mint(&addr, 1),
            Err(LedgerError::Unavailable(_))
        ));
        assert!(ledger.mint(&addr, 1).is_ok());
        assert_eq!(ledger.balance_of(&addr), 2);
        assert_eq!(ledger.mint_calls(), 3);
    }

    #[test]
    fn set_balance_tracks_supply() {
        let addr = Address::new([1; 20]);
        let mut ledger = NullLedger::new();
        ledger.set_balance(&addr, 5);
        ledger.set_balance(&addr, 2);
        assert_eq!(ledger.total_supply(), 2);
        ledger.burn(&addr, 2).unwrap();
        assert_eq!(ledger.total_supply(), 0);
        assert_eq!(ledger.burn_calls(), 1);
    }
}
