//! Client configuration
//!
//! Resolves the base URL of the equipment API from three layers, lowest
//! precedence first: the built-in default, the user's config file, and
//! the `KITBASE_API_URL` environment variable. A missing or malformed
//! config file never prevents startup.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the configured base URL
pub const BASE_URL_ENV: &str = "KITBASE_API_URL";

/// Client-side configuration for the API connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend, without the `/api/v1` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load the effective configuration
    ///
    /// Reads the config file when present, then applies the environment
    /// override. Always succeeds; failures fall back to defaults.
    pub fn load() -> Self {
        let from_file = config_path().and_then(|path| Self::read_from(&path));
        let from_env = std::env::var(BASE_URL_ENV).ok();
        Self::resolve(from_file, from_env)
    }

    /// Persist this configuration to the user's config file
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path().context("could not resolve a home directory")?;
        self.save_to(&path)
    }

    /// Merge the configuration layers in precedence order
    fn resolve(from_file: Option<ClientConfig>, from_env: Option<String>) -> Self {
        let mut config = from_file.unwrap_or_default();
        if let Some(url) = from_env
            && !url.trim().is_empty()
        {
            config.base_url = url;
        }
        config
    }

    /// Read and parse a config file, tolerating absence and bad contents
    fn read_from(path: &Path) -> Option<ClientConfig> {
        if !path.exists() {
            return None;
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Could not read config at {}: {e}", path.display());
                return None;
            }
        };

        match toml::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Ignoring malformed config at {}: {e}", path.display());
                None
            }
        }
    }

    /// Write this configuration as TOML, creating parent directories
    fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("serializing configuration")?;
        std::fs::write(path, contents)
            .with_context(|| format!("writing config to {}", path.display()))?;
        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Get the path to the client config file.
///
/// Stored in the user's config directory:
/// - Linux: ~/.config/kitbase/config.toml
/// - macOS: ~/.config/kitbase/config.toml
/// - Windows: %USERPROFILE%/.config/kitbase/config.toml
fn config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("kitbase")
            .join("config.toml"),
    )
}

// ============================================================================
// Tests
// ============================================================================
