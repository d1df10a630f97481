//! Environment-based configuration.

use std::env::{self, VarError};

use crate::server::error::config::ConfigError;

const DEFAULT_BANK_COLLECTION: &str = "banks";
const DEFAULT_CHAT_COLLECTION: &str = "chats";

/// Chat messages kept per user before the oldest are evicted
const DEFAULT_CHAT_RETENTION_LIMIT: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb_url: String,
    pub mongodb_database: String,
    pub bank_collection: String,
    pub chat_collection: String,
    pub chat_retention_limit: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            mongodb_url: required("MONGODB_URL")?,
            mongodb_database: required("MONGODB_DATABASE")?,
            bank_collection: optional("BANK_COLLECTION")?
                .unwrap_or_else(|| DEFAULT_BANK_COLLECTION.to_string()),
            chat_collection: optional("CHAT_COLLECTION")?
                .unwrap_or_else(|| DEFAULT_CHAT_COLLECTION.to_string()),
            chat_retention_limit: match optional("CHAT_RETENTION_LIMIT")? {
                Some(value) => parse_retention_limit(&value)?,
                None => DEFAULT_CHAT_RETENTION_LIMIT,
            },
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var)?.ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Result<Option<String>, ConfigError> {
    match env::var(var) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}

fn parse_retention_limit(value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvValue {
        var: "CHAT_RETENTION_LIMIT".to_string(),
        reason,
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid("must be at least 1".to_string())),
        Ok(limit) => Ok(limit),
        Err(e) => Err(invalid(e.to_string())),
    }
}
