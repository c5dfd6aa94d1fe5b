//! Client configuration, built once at startup.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;
use crate::utils::log_sanitizer::mask_secret;

/// Default Cloudflare v4 API endpoint.
pub const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";

pub const ENV_EMAIL: &str = "CLOUDFLARE_EMAIL";
pub const ENV_API_KEY: &str = "CLOUDFLARE_API_KEY";
pub const ENV_ZONE_ID: &str = "CLOUDFLARE_ZONE_ID";
/// Optional override of [`CF_API_BASE`], mostly for pointing at a mock server.
pub const ENV_API_BASE: &str = "CLOUDFLARE_API_BASE";
pub const ENV_REQUIRE_CREDENTIALS: &str = "CF_MANAGER_REQUIRE_CREDENTIALS";

/// Global API key authentication (`X-Auth-Email` + `X-Auth-Key`).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("api_key", &mask_secret(&self.api_key))
            .finish()
    }
}

/// Everything the client needs to talk to one zone.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub credentials: Credentials,
    pub zone_id: String,
    /// Fail before sending anything when a credential or the zone id is empty.
    ///
    /// Off by default: the remote API is left to reject bad auth.
    pub require_credentials: bool,
    /// Whole-request timeout. `None` keeps the transport defaults.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(credentials: Credentials, zone_id: impl Into<String>) -> Self {
        Self {
            base_url: CF_API_BASE.to_string(),
            credentials,
            zone_id: zone_id.into(),
            require_credentials: false,
            request_timeout: None,
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary lookup function.
    ///
    /// Unset credential variables become empty strings unless
    /// `CF_MANAGER_REQUIRE_CREDENTIALS` is truthy.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).unwrap_or_default();

        let mut config = Self::new(
            Credentials {
                email: var(ENV_EMAIL),
                api_key: var(ENV_API_KEY),
            },
            var(ENV_ZONE_ID),
        );

        if let Some(base) = lookup(ENV_API_BASE)
            && !base.trim().is_empty()
        {
            config = config.with_base_url(base.trim());
        }

        config.require_credentials = lookup(ENV_REQUIRE_CREDENTIALS)
            .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"));

        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn require_credentials(mut self, required: bool) -> Self {
        self.require_credentials = required;
        self
    }

    /// Checks the required fields when `require_credentials` is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.require_credentials {
            return Ok(());
        }
        for (name, value) in [
            (ENV_EMAIL, &self.credentials.email),
            (ENV_API_KEY, &self.credentials.api_key),
            (ENV_ZONE_ID, &self.zone_id),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingVariable(name.to_string()));
            }
        }
        Ok(())
    }
}
