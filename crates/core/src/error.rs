use thiserror::Error;

/// Errors the launcher can produce before the workflow engine takes over.
/// Whatever the engine itself does is not interpreted here; its exit status
/// is passed through unchanged.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Bad invocation caught after argument parsing (e.g. zero cores).
    #[error("invalid invocation: {0}")]
    Usage(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize run configuration: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
