//! Nullable infrastructure for deterministic testing.
//!
//! The governance controller depends on its ledger only through the
//! [`GovernanceLedger`](catalyst_ledger::GovernanceLedger) trait. This crate
//! provides a test-friendly implementation that:
//! - Keeps everything in memory
//! - Counts calls so tests can assert on ledger traffic
//! - Can be told to fail a specific upcoming mint or burn
//!
//! Usage: swap the real ledger for a nullable in tests.

pub mod ledger;

pub use ledger::NullLedger;
