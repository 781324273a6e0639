use thiserror::Error;

pub type Result<T, E = HubError> = std::result::Result<T, E>;

/// Library error kinds. Lookup misses and load-time validation failures
/// are the two conditions callers are expected to branch on; everything
/// else is plumbing.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("card not found: {0}")]
    CardNotFound(String),
    #[error("invalid dataset: {0}")]
    Validation(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HubError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, HubError::CardNotFound(_))
    }
}
