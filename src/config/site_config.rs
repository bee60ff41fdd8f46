use crate::core::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::env;
use std::time::Duration;

/// Production dashboard. Any deployment may point elsewhere through the
/// environment or [`SiteConfig::with_dashboard_url`].
pub const DEFAULT_DASHBOARD_URL: &str = "https://www.easygrow.contractors";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const MAX_TIMEOUT_SECS: u64 = 120;

pub const DASHBOARD_URL_VAR: &str = "DASHBOARD_URL";
pub const LEGACY_DASHBOARD_URL_VAR: &str = "NEXT_PUBLIC_DASHBOARD_URL";
pub const TIMEOUT_VAR: &str = "LEAD_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub dashboard_url: String,
    pub request_timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            dashboard_url: DEFAULT_DASHBOARD_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();

        if let Some(url) = get(DASHBOARD_URL_VAR).or_else(|| get(LEGACY_DASHBOARD_URL_VAR)) {
            config = config.with_dashboard_url(url);
        }

        if let Some(raw) = get(TIMEOUT_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| SiteError::InvalidConfigValueError {
                    field: TIMEOUT_VAR.to_string(),
                    value: raw.clone(),
                    reason: "Expected a whole number of seconds".to_string(),
                })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        tracing::debug!("Site config: {:?}", config);
        Ok(config)
    }

    pub fn with_dashboard_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.dashboard_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl ConfigProvider for SiteConfig {
    fn dashboard_url(&self) -> &str {
        &self.dashboard_url
    }

    fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_url("dashboard_url", &self.dashboard_url)?;
        validate_range(
            "request_timeout",
            self.request_timeout.as_secs(),
            1,
            MAX_TIMEOUT_SECS,
        )?;
        Ok(())
    }
}
