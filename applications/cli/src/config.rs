/// CLI configuration
use crate::error::{CliError, Result};
use beatlist_catalog::{CatalogConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "beatlist.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_catalog")]
    pub catalog: CatalogSettings,

    #[serde(default = "default_playlists")]
    pub playlists: PlaylistSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default)]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistSettings {
    /// Directory `scan` looks in when none is given
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Convert legacy files to the binary format on every load
    #[serde(default)]
    pub force_convert: bool,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `beatlist.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (BEATLIST_CATALOG__BASE_URL, ...)
        settings = settings.add_source(
            config::Environment::with_prefix("BEATLIST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base_url = self.catalog.base_url.trim();
        if base_url.is_empty() {
            return Err(CliError::Config("catalog base_url is required".to_string()));
        }

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CliError::Config(format!(
                "catalog base_url must be an http(s) URL, got {base_url}"
            )));
        }

        if self.catalog.timeout_secs == 0 {
            return Err(CliError::Config(
                "catalog timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Settings for the catalog client
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.catalog.base_url.clone(),
            timeout_secs: self.catalog.timeout_secs,
            connect_timeout_secs: self.catalog.connect_timeout_secs,
            user_agent: self.catalog.user_agent.clone(),
        }
    }
}

// Default values
fn default_catalog() -> CatalogSettings {
    CatalogSettings {
        base_url: default_base_url(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
        user_agent: None,
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_playlists() -> PlaylistSettings {
    PlaylistSettings {
        directory: default_directory(),
        force_convert: false,
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            playlists: default_playlists(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.catalog.timeout_secs, 30);
        assert!(!config.playlists.force_convert);
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(
            &path,
            r#"
[catalog]
base_url = "http://localhost:9000"
timeout_secs = 5

[playlists]
directory = "/srv/playlists"
force_convert = true
"#,
        )
        .unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.catalog.base_url, "http://localhost:9000");
        assert_eq!(config.catalog.timeout_secs, 5);
        assert_eq!(config.catalog.connect_timeout_secs, 10);
        assert_eq!(config.playlists.directory, PathBuf::from("/srv/playlists"));
        assert!(config.playlists.force_convert);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        let result = CliConfig::load(Some(&temp.path().join("nope.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "[catalog]\nbase_url = \"ftp://example.com\"\n").unwrap();

        let result = CliConfig::load(Some(&path));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_validate() {
        let mut config = CliConfig::default();
        config.catalog.base_url = "  ".into();
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.catalog.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.catalog.base_url = "http://127.0.0.1:8080/".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_catalog_config() {
        let mut config = CliConfig::default();
        config.catalog.user_agent = Some("test-agent".into());

        let catalog = config.catalog_config();
        assert_eq!(catalog.base_url, DEFAULT_BASE_URL);
        assert_eq!(catalog.connect_timeout_secs, 10);
        assert_eq!(catalog.user_agent.as_deref(), Some("test-agent"));
    }
}
