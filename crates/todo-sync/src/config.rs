//! Client Configuration
//!
//! The only external input is the GraphQL endpoint address, plus the cache
//! strategy used after a toggle.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncError};

/// Endpoint used when nothing else is configured (Hasura's default route)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/v1/graphql";

/// How the local cache reacts to a successful toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleStrategy {
    /// Write the returned row into the entity table; list membership unchanged
    #[default]
    MergeEntity,
    /// Leave the cache alone; the change shows up on the next refetch
    Untouched,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
    #[serde(default)]
    pub toggle_strategy: ToggleStrategy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            toggle_strategy: ToggleStrategy::default(),
        }
    }
}

impl ClientConfig {
    /// Build a validated config for `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let config = Self {
            endpoint: endpoint.into().trim().to_string(),
            toggle_strategy: ToggleStrategy::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config document and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SyncError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_toggle_strategy(mut self, strategy: ToggleStrategy) -> Self {
        self.toggle_strategy = strategy;
        self
    }

    /// The endpoint must be an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| SyncError::Config(format!("endpoint {:?}: {}", self.endpoint, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(SyncError::Config(format!(
                "endpoint scheme must be http or https, got {}",
                other
            ))),
        }
    }
}
