//! Client configuration.

use crate::error::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const ENV_ENDPOINT: &str = "ROUTE53DOMAINS_ENDPOINT";
pub const ENV_REGION: &str = "ROUTE53DOMAINS_REGION";
pub const ENV_TIMEOUT_SECS: &str = "ROUTE53DOMAINS_TIMEOUT_SECS";

const DEFAULT_REGION: &str = "us-east-1";

/// Connection settings for [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL requests are POSTed to.
    pub endpoint: String,
    /// Region the endpoint belongs to.
    pub region: String,
    /// Whole-request timeout.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: endpoint_for_region(DEFAULT_REGION),
            region: DEFAULT_REGION.to_string(),
            timeout_secs: 60,
            user_agent: format!("route53domains-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Parses a JSON document; missing keys take their defaults.
    pub fn from_json(json: &str) -> ClientResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Reads overrides from `ROUTE53DOMAINS_*` environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but with an arbitrary variable source.
    ///
    /// A region without an explicit endpoint selects that region's endpoint.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(region) = lookup(ENV_REGION).filter(|r| !r.is_empty()) {
            config.endpoint = endpoint_for_region(&region);
            config.region = region;
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|e| !e.is_empty()) {
            config.endpoint = endpoint;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw
                .trim()
                .parse()
                .map_err(|e| ClientError::Config(format!("{ENV_TIMEOUT_SECS}={raw:?}: {e}")))?;
        }

        config.check()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn check(&self) -> ClientResult<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ClientError::Config("timeout_secs must be positive".into()));
        }
        Ok(())
    }
}

/// The public endpoint of a region.
#[must_use]
pub fn endpoint_for_region(region: &str) -> String {
    format!("https://route53domains.{region}.amazonaws.com")
}
