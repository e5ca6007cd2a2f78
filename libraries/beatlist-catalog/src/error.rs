//! Error types for the catalog client.

use thiserror::Error;

/// Errors that can occur when talking to the beatmap catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid catalog URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to parse catalog response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Catalog is offline or unreachable
    #[error("Catalog unreachable: {0}")]
    Unreachable(String),

    /// Rate limited by the catalog
    #[error("Rate limited, retry after {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: u64 },
}

impl From<CatalogError> for beatlist_core::PlaylistError {
    fn from(err: CatalogError) -> Self {
        beatlist_core::PlaylistError::Catalog(err.to_string())
    }
}

/// Result type for catalog client operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
