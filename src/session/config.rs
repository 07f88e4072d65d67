use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PAGE_SIZE_ENV: &str = "LTTI_PAGE_SIZE";
pub const RESHUFFLE_POLICY_ENV: &str = "LTTI_RESHUFFLE_POLICY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Page size must be at least 1")]
    ZeroPageSize,
    #[error("Invalid page size: {0}")]
    InvalidPageSize(String),
    #[error("Unknown reshuffle policy: {0} (expected `restart` or `keep-answers`)")]
    UnknownPolicy(String),
}

/// What a new question order does to answers already given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReshufflePolicy {
    /// New order is a full restart: answers cleared, back to the first page.
    #[default]
    Restart,
    /// Answers are indexed by id and survive the new order.
    KeepAnswers,
}

impl FromStr for ReshufflePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "restart" => Ok(ReshufflePolicy::Restart),
            "keep-answers" | "keep_answers" => Ok(ReshufflePolicy::KeepAnswers),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Presentation settings for a [`Session`](crate::session::Session).
/// Checked by [`SessionConfig::validate`] before any session is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub page_size: usize,
    #[serde(default)]
    pub reshuffle_policy: ReshufflePolicy,
}

impl SessionConfig {
    /// 10 pages of 12 statements, reshuffle restarts.
    pub fn v0() -> Self {
        Self {
            page_size: 12,
            reshuffle_policy: ReshufflePolicy::Restart,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }

    /// Start from [`SessionConfig::v0`] and apply `LTTI_PAGE_SIZE` and
    /// `LTTI_RESHUFFLE_POLICY` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`SessionConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::v0();

        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            config.page_size = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPageSize(raw.clone()))?;
        }
        if let Some(raw) = lookup(RESHUFFLE_POLICY_ENV) {
            config.reshuffle_policy = raw.parse()?;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::v0()
    }
}
