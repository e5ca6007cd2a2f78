/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Playlist error: {0}")]
    Playlist(#[from] beatlist_core::PlaylistError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] beatlist_catalog::CatalogError),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
