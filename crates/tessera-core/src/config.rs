//! Configuration system for Tessera.
//!
//! Resolution order: environment variables → config file → defaults.
//!
//! Config file location:
//!   1. $TESSERA_CONFIG (explicit override)
//!   2. $XDG_CONFIG_HOME/tessera/config.toml
//!   3. ~/.config/tessera/config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::chaincode::LOOKUP_CHAINCODE;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub lifecycle: LifecycleSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleSettings {
    /// Name of the well-known lookup system chaincode.
    pub lookup_chaincode: String,
    /// Version tag attached to system chaincode invocations.
    /// Empty = use the built-in platform version.
    pub syscc_version: String,
}

impl LifecycleSettings {
    /// The version string to tag system chaincode invocations with.
    pub fn resolved_syscc_version(&self) -> &str {
        if self.syscc_version.is_empty() {
            syscc_version()
        } else {
            &self.syscc_version
        }
    }
}

/// The platform's built-in system chaincode version.
pub fn syscc_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ── Defaults ──────────────────────────────────────────────────────────────────

impl Default for LifecycleSettings {
    fn default() -> Self {
        Self {
            lookup_chaincode: LOOKUP_CHAINCODE.to_string(),
            syscc_version: String::new(),
        }
    }
}

// ── Path helpers ──────────────────────────────────────────────────────────────

fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_or_tmp().join(".config"))
        .join("tessera")
}

fn home_or_tmp() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {0}: {1}")]
    ReadFailed(PathBuf, std::io::Error),
    #[error("failed to parse {0}: {1}")]
    ParseFailed(PathBuf, toml::de::Error),
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl CoreConfig {
    /// Load config: env vars → file → defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::file_path();
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadFailed(path.clone(), e))?;
            toml::from_str(&text).map_err(|e| ConfigError::ParseFailed(path.clone(), e))?
        } else {
            CoreConfig::default()
        };
        config.apply_env_overrides();
        tracing::debug!(
            lookup = %config.lifecycle.lookup_chaincode,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Config file path.
    pub fn file_path() -> PathBuf {
        std::env::var("TESSERA_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| config_dir().join("config.toml"))
    }

    /// Apply TESSERA_* env var overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("TESSERA_LIFECYCLE__LOOKUP_CHAINCODE") {
            self.lifecycle.lookup_chaincode = v;
        }
        if let Ok(v) = std::env::var("TESSERA_LIFECYCLE__SYSCC_VERSION") {
            self.lifecycle.syscc_version = v;
        }
    }
}
