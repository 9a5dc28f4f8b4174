//! Errors raised while constructing the fundamental types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
