use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("arithmetic overflow in ledger update")]
    Overflow,

    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}
