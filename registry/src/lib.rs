//! Enumerable key-value registry.
//!
//! Every structural operation (insert, remove, lookup) is O(1) regardless of
//! how many keys have ever been stored. Members live in a dense vector with a
//! key → position index; removal swaps the last member into the vacated slot,
//! so iteration order is *not* preserved across removals.

pub mod enumerable;
pub mod error;

pub use enumerable::{EnumerableRegistry, Snapshot};
pub use error::RegistryError;
