use crate::{CollectionSpec, CoreError, Distance, Result, SAMPLE_DIMENSION};
use std::time::Duration;

pub const DEFAULT_URL: &str = "http://localhost:6333";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_COLLECTION: &str = "test_collection";

pub const ENV_URL: &str = "VECPROBE_URL";
pub const ENV_TIMEOUT_SECS: &str = "VECPROBE_TIMEOUT_SECS";
pub const ENV_COLLECTION: &str = "VECPROBE_COLLECTION";
pub const ENV_API_KEY: &str = "VECPROBE_API_KEY";

/// Runtime configuration for a probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Base URL of the REST endpoint
    pub url: String,

    /// Bound on every request, connect included
    pub timeout: Duration,

    /// Collection that gets dropped and recreated
    pub collection: String,

    pub api_key: Option<String>,
}

impl ProbeConfig {
    /// Reads the `VECPROBE_*` variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset or blank keys
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let url = get(ENV_URL)
            .unwrap_or_else(|| DEFAULT_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "{ENV_URL} must be an http(s) URL, got '{url}'"
            )));
        }

        let timeout_secs = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                CoreError::Config(format!("{ENV_TIMEOUT_SECS} must be a number, got '{raw}'"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(CoreError::Config(format!(
                "{ENV_TIMEOUT_SECS} must be greater than zero"
            )));
        }

        let collection = get(ENV_COLLECTION).unwrap_or_else(|| DEFAULT_COLLECTION.to_string());

        Ok(Self {
            url,
            timeout: Duration::from_secs(timeout_secs),
            collection,
            api_key: get(ENV_API_KEY),
        })
    }

    /// Collection the run recreates: sample dimension, dot product.
    pub fn collection_spec(&self) -> Result<CollectionSpec> {
        CollectionSpec::new(self.collection.clone(), SAMPLE_DIMENSION, Distance::Dot)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            collection: DEFAULT_COLLECTION.to_string(),
            api_key: None,
        }
    }
}
