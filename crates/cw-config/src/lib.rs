//! # cw-config
//!
//! Layered settings: built-in defaults, then an optional `cookwithus.toml`
//! (or the file named by `COOKWITHUS_CONFIG`), then `COOKWITHUS__*`
//! environment variables, e.g. `COOKWITHUS__SERVER__PORT=8080`.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;
use thiserror::Error;

pub const ENV_PREFIX: &str = "COOKWITHUS";
pub const CONFIG_PATH_VAR: &str = "COOKWITHUS_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub api: ApiSettings,
    pub ids: IdSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Where the resource routes are nested, e.g. "/api/v2". "/" mounts at the root.
    pub base_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    Uuid,
    Sequential,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdSettings {
    pub strategy: IdStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive; `RUST_LOG` wins when set.
    pub filter: String,
    pub format: LogFormat,
}

impl Settings {
    /// Loads `.env`, the optional config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env is normal outside development.
        let _ = dotenvy::dotenv();

        let file = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "cookwithus".to_string());
        let builder = defaults()?
            .add_source(File::with_name(&file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );
        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.api.base_path;
        if !base.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "api.base_path must start with '/', got '{base}'"
            )));
        }
        if base.len() > 1 && base.ends_with('/') {
            return Err(ConfigError::Invalid(format!(
                "api.base_path must not end with '/', got '{base}'"
            )));
        }
        Ok(())
    }
}

impl ApiSettings {
    /// The prefix to nest routes under; `None` means serve at the root.
    pub fn mount_point(&self) -> Option<&str> {
        match self.base_path.as_str() {
            "/" => None,
            other => Some(other),
        }
    }
}

/// Built-in defaults, the bottom layer of every load.
pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("api.base_path", "/api/v2")?
        .set_default("ids.strategy", "uuid")?
        .set_default("log.filter", "info")?
        .set_default("log.format", "pretty")?)
}
