use catalyst_ledger::LedgerError;
use catalyst_types::{Address, ProjectName, RoleId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("cannot assign role 0")]
    InvalidRoleId,

    #[error("role weight must be non-zero")]
    InvalidWeight,

    #[error("role {0} already exists")]
    RoleAlreadyExists(RoleId),

    #[error("role {0} does not exist")]
    RoleNotFound(u64),

    #[error("voter {0} already exists")]
    VoterAlreadyExists(Address),

    #[error("voter {0} does not exist")]
    VoterNotFound(Address),

    #[error("project \"{0}\" already exists")]
    ProjectAlreadyExists(ProjectName),

    #[error("project \"{0}\" does not exist")]
    ProjectNotFound(ProjectName),

    #[error("vote closed on project \"{0}\"")]
    VoteClosed(ProjectName),

    #[error("insufficient voting balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("vote amount must be non-zero")]
    ZeroAmount,

    #[error("{voters} voters exceed the bulk limit of {limit}; use the batched form")]
    BulkLimitExceeded { voters: usize, limit: usize },

    #[error("voters cannot be removed while a batched sweep is unfinished")]
    SweepInProgress,

    #[error("arithmetic overflow in governance accounting")]
    Overflow,

    #[error("ledger error: {0}")]
    Ledger(LedgerError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<LedgerError> for GovernanceError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientBalance { needed, available } => {
                Self::InsufficientBalance { needed, available }
            }
            other => Self::Ledger(other),
        }
    }
}
