//! # Client Configuration
//!
//! Settings for the catalog API and the durable store.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Loading                                │
//! │                                                                         │
//! │  1. Environment Variables (Highest Priority)                            │
//! │     STOREFRONT_API_URL=https://admin.example.com/api/<store-id>         │
//! │     STOREFRONT_API_TIMEOUT_SECS=10                                      │
//! │     STOREFRONT_HOME_BILLBOARD_ID=...                                    │
//! │     STOREFRONT_DB_PATH=/tmp/storefront.db                               │
//! │     STOREFRONT_CART_KEY=cart-storage                                    │
//! │                                                                         │
//! │  2. Config File                                                         │
//! │     Linux:   ~/.config/storefront/storefront.toml                       │
//! │     macOS:   ~/Library/Application Support/com.storefront.client/...    │
//! │     Windows: %APPDATA%\storefront\client\config\storefront.toml         │
//! │                                                                         │
//! │  3. Defaults (Lowest Priority)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Config File
//! ```toml
//! [api]
//! base_url = "https://admin.example.com/api/6429a649"
//! timeout_secs = 10
//! home_billboard_id = "b1f0c7e2"
//!
//! [storage]
//! database_path = "/var/lib/storefront/storefront.db"
//! cart_key = "cart-storage"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use storefront_core::CART_STORAGE_KEY;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "storefront.toml";

/// Database file name inside the platform data directory.
pub const DATABASE_FILE_NAME: &str = "storefront.db";

// =============================================================================
// Errors
// =============================================================================

/// Errors from loading, validating or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {}", .path.display(), .message)]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse config file {}: {}", .path.display(), .message)]
    Parse { path: PathBuf, message: String },

    #[error("Failed to write config file {}: {}", .path.display(), .message)]
    Write { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Could not determine the platform {0} directory")]
    NoPlatformDir(&'static str),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// API Settings
// =============================================================================

/// The `[api]` section: where the catalog lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Catalog API root, including the store path segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Billboard shown on the home feed, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_billboard_id: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            home_billboard_id: None,
        }
    }
}

// =============================================================================
// Storage Settings
// =============================================================================

/// The `[storage]` section: where client state is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// SQLite file. `None` means the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    /// Key the cart snapshot is stored under.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

fn default_cart_key() -> String {
    CART_STORAGE_KEY.to_string()
}

impl StorageSettings {
    /// The database file to open: the configured path, or
    /// `<data dir>/storefront.db`.
    pub fn resolve_database_path(&self) -> ConfigResult<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => project_dirs()
                .map(|dirs| dirs.data_dir().join(DATABASE_FILE_NAME))
                .ok_or(ConfigError::NoPlatformDir("data")),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            database_path: None,
            cart_key: default_cart_key(),
        }
    }
}

// =============================================================================
// Client Config
// =============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

impl ClientConfig {
    /// Loads configuration from `path` (or the default location), then
    /// applies environment overrides and validates.
    ///
    /// A missing file is not an error: defaults are used.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_config_path(),
        };

        let mut config = match path {
            Some(ref p) if p.exists() => {
                info!(path = %p.display(), "Loading configuration");
                Self::read_file(p)?
            }
            Some(ref p) => {
                debug!(path = %p.display(), "No config file, using defaults");
                ClientConfig::default()
            }
            None => {
                warn!("No platform config directory, using defaults");
                ClientConfig::default()
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Writes this configuration as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let write_err = |message: String| ConfigError::Write {
            path: path.to_path_buf(),
            message,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| write_err(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| write_err(e.to_string()))?;

        info!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// `<config dir>/storefront.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Applies `STOREFRONT_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    /// Applies overrides from any variable lookup. Unparseable numbers are
    /// logged and ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("STOREFRONT_API_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.api.base_url = url;
        }

        if let Some(raw) = lookup("STOREFRONT_API_TIMEOUT_SECS") {
            match raw.parse() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(value = %raw, "Ignoring invalid STOREFRONT_API_TIMEOUT_SECS"),
            }
        }

        if let Some(id) = lookup("STOREFRONT_HOME_BILLBOARD_ID") {
            self.api.home_billboard_id = Some(id).filter(|id| !id.is_empty());
        }

        if let Some(path) = lookup("STOREFRONT_DB_PATH") {
            self.storage.database_path = Some(PathBuf::from(path));
        }

        if let Some(key) = lookup("STOREFRONT_CART_KEY") {
            self.storage.cart_key = key;
        }
    }

    /// Checks the settings are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::Invalid(format!("api.base_url '{}': {}", self.api.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "api.base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "api.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.storage.cart_key.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "storage.cart_key must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "storefront", "client")
}
