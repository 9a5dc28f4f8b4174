//! Fundamental types for the Catalyst governance registry.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! account addresses, role identifiers and weights, and project names.

pub mod address;
pub mod error;
pub mod project;
pub mod role;

pub use address::Address;
pub use error::TypeError;
pub use project::ProjectName;
pub use role::{Role, RoleId, Weight};
