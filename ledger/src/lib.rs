//! Fungible voting-token ledger.
//!
//! Balances represent unspent voting weight. The governance layer only ever
//! mints (issuing a role's weight) and burns (spending on a vote, or pruning);
//! there is no transfer between holders.

pub mod error;
pub mod ledger;
pub mod token;

pub use error::LedgerError;
pub use ledger::{GovernanceLedger, TokenMetadata};
pub use token::VoteToken;
