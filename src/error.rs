use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasspickError {
    #[error("Error: Store does not exist")]
    StoreDoesntExist,
    #[error("Error: Store does not contain a single entry")]
    EmptyStore,
    #[error("Error: {0} is not in the password store")]
    NotInStore(String),
    #[error("Error: No matches found for search '{0}'")]
    NoMatchesFound(String),
    #[error("Error: Sneaky path {0}")]
    SneakyPath(String),
    #[error("{0}")]
    PassFailed(String),
    #[error("Error: Failed to copy to clipboard")]
    ClipFailed,
    #[error("Error: Failed to read clipboard")]
    PasteFailed,
    #[error("Error: Hashes don't match: {0} vs {1}")]
    HashMismatch(String, String),
    #[error("Error: User aborted")]
    UserAbort,
}
