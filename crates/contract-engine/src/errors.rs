//! Error types for contract generation

use thiserror::Error;

/// Errors raised while building a contract
///
/// None of these cross the [`crate::DocumentAssembler::generate_full_contract`]
/// boundary; they are logged and replaced by a fixed error fragment there.
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Fragment not found: {0}")]
    FragmentNotFound(String),

    #[error("Fetching '{path}' returned status {status}")]
    FetchStatus { path: String, status: u16 },

    #[error("Fetching '{path}' failed: {message}")]
    Fetch { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path security violation: {0}")]
    PathSecurityViolation(String),

    #[error("Annex conversion failed: {0}")]
    Conversion(String),

    #[error("Amount {0} is outside the supported range 0-999")]
    AmountOutOfRange(i64),

    #[error("A contract is already being generated")]
    GenerationInProgress,

    #[error("Background task failed: {0}")]
    Join(String),
}

impl ContractError {
    /// Whether the error came from retrieving a template or annex
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            ContractError::FragmentNotFound(_)
                | ContractError::FetchStatus { .. }
                | ContractError::Fetch { .. }
                | ContractError::Io(_)
                | ContractError::PathSecurityViolation(_)
        )
    }
}
