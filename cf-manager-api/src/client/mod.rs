//! Cloudflare zone client

mod http;
mod zone;

use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::config::{ClientConfig, ENV_API_KEY, ENV_EMAIL};
use crate::error::ConfigError;
use crate::utils::log_sanitizer::mask_secret;

const USER_AGENT: &str = concat!("cf-manager/", env!("CARGO_PKG_VERSION"));

/// Client for one Cloudflare zone, authenticated with a global API key.
///
/// Every request carries `X-Auth-Email`, `X-Auth-Key` and
/// `Content-Type: application/json`, even when the credentials are empty.
#[derive(Debug)]
pub struct CloudflareClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) zone_id: String,
}

impl CloudflareClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let client = create_http_client(&config)?;
        log::debug!(
            "Cloudflare client for zone '{}' at {} (email '{}', key {})",
            config.zone_id,
            config.base_url,
            config.credentials.email,
            mask_secret(&config.credentials.api_key)
        );

        Ok(Self {
            client,
            base_url: config.base_url,
            zone_id: config.zone_id,
        })
    }

    /// URL of a path under the zone, e.g. `zone_url(&["dns_records", id])`.
    ///
    /// Each segment is percent-encoded.
    pub(crate) fn zone_url(&self, segments: &[&str]) -> String {
        let mut url = format!(
            "{}/zones/{}",
            self.base_url,
            urlencoding::encode(&self.zone_id)
        );
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }
}

fn auth_headers(config: &ClientConfig) -> Result<HeaderMap, ConfigError> {
    let email = HeaderValue::from_str(&config.credentials.email)
        .map_err(|_| ConfigError::InvalidHeader(ENV_EMAIL.to_string()))?;
    let mut api_key = HeaderValue::from_str(&config.credentials.api_key)
        .map_err(|_| ConfigError::InvalidHeader(ENV_API_KEY.to_string()))?;
    api_key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert("X-Auth-Email", email);
    headers.insert("X-Auth-Key", api_key);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn create_http_client(config: &ClientConfig) -> Result<Client, ConfigError> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(auth_headers(config)?);
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ConfigError::HttpClient(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::Credentials;

    fn client_for(zone: &str) -> CloudflareClient {
        let config = ClientConfig::new(Credentials::default(), zone).with_base_url("http://api.test/v4/");
        CloudflareClient::new(config).unwrap()
    }

    #[test]
    fn zone_url_joins_segments() {
        let client = client_for("zone-1");
        assert_eq!(client.zone_url(&[]), "http://api.test/v4/zones/zone-1");
        assert_eq!(
            client.zone_url(&["dns_records", "rec-9"]),
            "http://api.test/v4/zones/zone-1/dns_records/rec-9"
        );
    }

    #[test]
    fn zone_url_encodes_segments() {
        let client = client_for("zone 1");
        assert_eq!(
            client.zone_url(&["firewall", "rules", "../x?y"]),
            "http://api.test/v4/zones/zone%201/firewall/rules/..%2Fx%3Fy"
        );
    }

    #[test]
    fn empty_credentials_still_build_headers() {
        let headers = auth_headers(&ClientConfig::new(Credentials::default(), "")).unwrap();
        assert_eq!(headers.get("x-auth-email").unwrap(), "");
        assert_eq!(headers.get("x-auth-key").unwrap(), "");
        assert!(headers.get("x-auth-key").unwrap().is_sensitive());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn newline_in_credentials_is_rejected() {
        let creds = Credentials {
            email: "ops@example.com\r\nX-Injected: 1".to_string(),
            api_key: "k".to_string(),
        };
        let err = CloudflareClient::new(ClientConfig::new(creds, "zone-1")).err().unwrap();
        assert!(matches!(err, ConfigError::InvalidHeader(name) if name == ENV_EMAIL));
    }

    #[test]
    fn strict_config_is_checked_at_construction() {
        let config = ClientConfig::new(Credentials::default(), "zone-1").require_credentials(true);
        assert!(matches!(
            CloudflareClient::new(config),
            Err(ConfigError::MissingVariable(_))
        ));
    }
}
