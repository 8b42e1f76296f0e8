//! Configuration management for the relay
//!
//! Settings come from an optional YAML file, then `.env` / process environment
//! overrides, then CLI flags (applied by the caller).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// PageSpeed Insights v5 endpoint
pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Referer sent when no app URL is configured
pub const DEFAULT_APP_URL: &str = "http://127.0.0.1:8000";

/// How upstream HTTP errors other than 429 are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamErrorPolicy {
    /// Serve the mock report
    #[default]
    Fallback,
    /// Return the upstream status and body to the caller
    Propagate,
}

impl FromStr for UpstreamErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(Self::Fallback),
            "propagate" => Ok(Self::Propagate),
            other => Err(ConfigError::Invalid(format!(
                "unknown upstream error policy '{}' (expected fallback or propagate)",
                other
            ))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// PageSpeed API key; omitted from requests when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Public URL of this app, sent as the `Referer` header
    #[serde(default = "default_app_url")]
    pub app_url: String,

    /// PageSpeed endpoint (overridable for testing)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Address the HTTP server binds to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Freshness window for cached reports
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Upstream request timeout
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub upstream_errors: UpstreamErrorPolicy,

    /// Origins allowed by CORS
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_app_url() -> String {
    DEFAULT_APP_URL.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    600
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            app_url: default_app_url(),
            api_url: default_api_url(),
            bind: default_bind(),
            cache_ttl_secs: default_cache_ttl_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            upstream_errors: UpstreamErrorPolicy::default(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".pagespeed-relay").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default path if it exists,
    /// then apply environment overrides.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = match path {
            Some(p) => Self::load_from(PathBuf::from(p))?,
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::load_from(p)?,
                _ => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in production).
    ///
    /// Empty values are ignored, so `GOOGLE_PAGESPEED_API_KEY=` leaves the key unset.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get("GOOGLE_PAGESPEED_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(url) = get("APP_URL") {
            self.app_url = url;
        }
        if let Some(url) = get("PAGESPEED_API_URL") {
            self.api_url = url;
        }
        if let Some(bind) = get("PAGESPEED_RELAY_BIND") {
            self.bind = bind;
        }
        if let Some(ttl) = get("PAGESPEED_CACHE_TTL_SECS") {
            self.cache_ttl_secs = ttl.parse().map_err(|_| {
                ConfigError::Invalid(format!("PAGESPEED_CACHE_TTL_SECS is not a number: {}", ttl))
            })?;
        }
        if let Some(policy) = get("PAGESPEED_UPSTREAM_ERRORS") {
            self.upstream_errors = policy.parse()?;
        }
        Ok(())
    }

    /// Validate values that would otherwise fail at first use
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api_url must not be empty".to_string()).into());
        }
        if self.request_timeout_secs == 0 {
            return Err(
                ConfigError::Invalid("request_timeout_secs must be positive".to_string()).into(),
            );
        }
        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
