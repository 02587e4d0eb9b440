//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;

use putka_common::personality::Personality;
use putka_verdict::MaskingPolicy;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_MANAGER_HOST, DEFAULT_MANAGER_PORT,
    DEFAULT_MANAGER_PROTO, DEFAULT_RUST_LOG, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    MANAGER_PROTO_LEN,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub putka: PutkaConfig,
    pub manager: ManagerConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Deployment behaviour
#[derive(Debug, Clone)]
pub struct PutkaConfig {
    pub personality: Personality,
    /// What ordinary users may see. Starts from the personality's flags;
    /// `JAILRUN_DETAILS` and `PRESENTATION_ERRORS` override them.
    pub masking: MaskingPolicy,
}

/// Evaluation manager connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    pub host: String,
    pub port: u16,
    pub proto: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            putka: PutkaConfig::from_env()?,
            manager: ManagerConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl PutkaConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let personality: Personality = env::var("PUTKA_PERSONALITY")
            .unwrap_or_default()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PUTKA_PERSONALITY".to_string()))?;

        let mut masking = MaskingPolicy::for_personality(personality);
        if let Ok(value) = env::var("JAILRUN_DETAILS") {
            masking.jailrun_details = parse_flag("JAILRUN_DETAILS", &value)?;
        }
        if let Ok(value) = env::var("PRESENTATION_ERRORS") {
            masking.presentation_errors = parse_flag("PRESENTATION_ERRORS", &value)?;
        }

        Ok(Self {
            personality,
            masking,
        })
    }
}

impl Default for PutkaConfig {
    fn default() -> Self {
        Self {
            personality: Personality::Default,
            masking: MaskingPolicy::for_personality(Personality::Default),
        }
    }
}

impl ManagerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let proto =
            env::var("PUTKA_MANAGER_PROTO").unwrap_or_else(|_| DEFAULT_MANAGER_PROTO.to_string());
        validate_proto(&proto)?;

        Ok(Self {
            host: env::var("PUTKA_MANAGER_HOST")
                .unwrap_or_else(|_| DEFAULT_MANAGER_HOST.to_string()),
            port: env::var("PUTKA_MANAGER_PORT")
                .unwrap_or_else(|_| DEFAULT_MANAGER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PUTKA_MANAGER_PORT".to_string()))?,
            proto,
        })
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_MANAGER_HOST.to_string(),
            port: DEFAULT_MANAGER_PORT,
            proto: DEFAULT_MANAGER_PROTO.to_string(),
        }
    }
}

/// The manager protocol version is sent as a fixed-width prefix.
fn validate_proto(proto: &str) -> Result<(), ConfigError> {
    if proto.chars().count() == MANAGER_PROTO_LEN {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue("PUTKA_MANAGER_PROTO".to_string()))
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue(key.to_string())),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
