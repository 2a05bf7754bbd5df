// src/config.rs
use std::{env, time::Duration};

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Upper bound on a single generation call as seen by the caller.
    pub generation_timeout: Duration,
    /// Client-side timeout for the HTTP request itself, which keeps running after the deadline.
    pub upstream_timeout: Duration,
    pub session_ttl: Duration,
    pub session_max_messages: usize,
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_base_url: DEFAULT_BASE_URL.to_string(),
            generation_timeout: Duration::from_secs(30),
            upstream_timeout: Duration::from_secs(60),
            session_ttl: Duration::from_secs(3600),
            session_max_messages: 20,
            bind_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source. Unset or blank values keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: get("GEMINI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_base_url),
            generation_timeout: seconds(
                "DPAI_GENERATION_TIMEOUT_SECS",
                get("DPAI_GENERATION_TIMEOUT_SECS"),
                defaults.generation_timeout,
            )?,
            upstream_timeout: seconds(
                "DPAI_UPSTREAM_TIMEOUT_SECS",
                get("DPAI_UPSTREAM_TIMEOUT_SECS"),
                defaults.upstream_timeout,
            )?,
            session_ttl: seconds(
                "DPAI_SESSION_TTL_SECS",
                get("DPAI_SESSION_TTL_SECS"),
                defaults.session_ttl,
            )?,
            session_max_messages: match get("DPAI_SESSION_MAX_MESSAGES") {
                Some(raw) => positive("DPAI_SESSION_MAX_MESSAGES", &raw)? as usize,
                None => defaults.session_max_messages,
            },
            bind_addr: get("DPAI_BIND_ADDR").unwrap_or(defaults.bind_addr),
        })
    }
}

fn seconds(name: &'static str, raw: Option<String>, default: Duration) -> Result<Duration, ConfigError> {
    match raw {
        Some(raw) => positive(name, &raw).map(Duration::from_secs),
        None => Ok(default),
    }
}

fn positive(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber { name, value: raw.to_string() }),
    }
}
