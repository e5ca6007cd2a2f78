/// Core error types for Beatlist
use thiserror::Error;

/// Result type alias using `PlaylistError`
pub type Result<T> = std::result::Result<T, PlaylistError>;

/// Core error type for playlist loading and saving
#[derive(Error, Debug)]
pub enum PlaylistError {
    /// Playlist file does not exist
    #[error("Playlist not found: {0}")]
    NotFound(String),

    /// Path exists but cannot hold a playlist
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Legacy JSON could not be decoded
    #[error("Malformed legacy playlist: {0}")]
    MalformedLegacy(String),

    /// Binary container could not be encoded or decoded
    #[error("Format error: {0}")]
    Format(String),

    /// Loaded playlist cannot be projected back to its stored form
    #[error("Projection error: {0}")]
    Projection(String),

    /// Catalog lookup failed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl PlaylistError {
    /// Create a not found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create a format error
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Create a projection error
    pub fn projection(msg: impl Into<String>) -> Self {
        Self::Projection(msg.into())
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
