use thiserror::Error;

/// Errors that can occur during locked-memory operations.
#[derive(Error, Debug)]
pub enum MemlockError {
    /// Operation failed due to a system error.
    #[error("System operation failed: {0}")]
    SystemError(String),

    /// Invalid arguments were provided to the operation.
    #[error("Invalid arguments: {0}")]
    InvalidArgument(String),

    /// The requested operation is not supported on this platform.
    #[error("Operation not supported on this platform: {0}")]
    NotSupported(String),

    /// The system is out of memory or hit a resource limit.
    #[error("Resource limit reached: {0}")]
    ResourceLimit(String),
}
