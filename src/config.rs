// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
        }
    }
}

fn default_app_name() -> String {
    "Wordbook".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8360
}

fn default_workers() -> usize {
    2
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    "wordbook.db".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::LoadError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.app.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "app.name must not be empty".to_string(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must not be 0".to_string(),
            ));
        }
        if self.server.workers == 0 {
            return Err(ConfigError::ValidationError(
                "server.workers must be at least 1".to_string(),
            ));
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "database.path must not be empty".to_string(),
            ));
        }
        let log_level = self.logging.level.to_ascii_lowercase();
        if !matches!(
            log_level.as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level '{}' is not one of error, warn, info, debug, trace",
                self.logging.level
            )));
        }

        Ok(ValidatedConfig {
            app: self.app,
            server: self.server,
            database: self.database,
            logging: self.logging,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl ValidatedConfig {
    /// Database path resolved against the runtime root when relative.
    pub fn database_path(&self, root: &Path) -> PathBuf {
        let path = Path::new(&self.database.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }
}

/// Load `config.yaml` from the runtime root, writing defaults on first run.
/// Returns the validated config and whether the file was just created.
pub fn load_or_create(root: &Path) -> Result<(ValidatedConfig, bool), ConfigError> {
    let path = root.join(CONFIG_FILE_NAME);
    if path.exists() {
        let config = Config::load(&path)?;
        return Ok((config.validate()?, false));
    }

    fs::create_dir_all(root).map_err(|e| {
        ConfigError::LoadError(format!(
            "Failed to create runtime root {}: {}",
            root.display(),
            e
        ))
    })?;
    let defaults = Config::default();
    let yaml = serde_yaml::to_string(&defaults)
        .map_err(|e| ConfigError::LoadError(format!("Failed to serialize defaults: {}", e)))?;
    fs::write(&path, yaml).map_err(|e| {
        ConfigError::LoadError(format!("Failed to write {}: {}", path.display(), e))
    })?;
    Ok((defaults.validate()?, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_fixtures::TestFixtureRoot;

    #[test]
    fn defaults_validate() {
        let config = Config::default().validate().unwrap();
        assert_eq!(config.app.name, "Wordbook");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn rejects_zero_port_and_workers() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.clone().validate().is_err());
        config.server.port = 8360;
        config.server.workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: Config = serde_yaml::from_str("server:\n  port: 9001\n").unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.app.name, "Wordbook");
    }

    #[test]
    fn load_or_create_writes_defaults_once() {
        let fixture = TestFixtureRoot::new_unique("config-bootstrap").unwrap();
        let (config, created) = load_or_create(fixture.path()).unwrap();
        assert!(created);
        assert!(fixture.path().join(CONFIG_FILE_NAME).exists());
        assert_eq!(config.app.name, "Wordbook");

        let (_config, created) = load_or_create(fixture.path()).unwrap();
        assert!(!created);
    }

    #[test]
    fn database_path_resolves_relative_to_root() {
        let config = Config::default().validate().unwrap();
        let resolved = config.database_path(Path::new("/var/lib/wordbook"));
        assert_eq!(resolved, Path::new("/var/lib/wordbook/wordbook.db"));
    }
}
