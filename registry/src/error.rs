use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("key is already present in the registry")]
    DuplicateKey,

    #[error("key is not present in the registry")]
    KeyNotFound,
}
