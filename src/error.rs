use thiserror::Error;

/// Failures of the level-control core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// User-supplied level text matched none of the recognized names.
    #[error("invalid log level '{0}': expected one of debug, info, warn, error")]
    InvalidLevel(String),

    /// The gate was read before it was armed. This is a programming error in
    /// the hosting process, not a user error.
    #[error("log level gate read before initialization")]
    Uninitialized,
}

#[derive(Error, Debug)]
pub enum LevelCtlError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error(transparent)]
    Level(#[from] LevelError),
}
