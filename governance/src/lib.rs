//! Role-weighted governance for Catalyst.
//!
//! Participants are registered against a role carrying an integer weight.
//! An issuance sweep mints each voter's weight as a fungible balance, which
//! voters then spend casting votes on named projects. A prune sweep burns
//! whatever is left so the next cycle starts from zero.
//!
//! Key principle: the [`CatalystController`] is the only writer of roles,
//! voters, projects and balances; every failed call leaves state unchanged.

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod logging;
pub mod projects;
pub mod roles;
pub mod voters;

pub use config::{CatalystConfig, TokenConfig};
pub use controller::{BatchProgress, CatalystController};
pub use error::GovernanceError;
pub use event::{EventBus, GovernanceEvent};
pub use logging::{init_from_config, init_logging, LogFormat};
pub use projects::{Project, ProjectRegistry};
pub use roles::RoleRegistry;
pub use voters::{Voter, VoterRegistry};
