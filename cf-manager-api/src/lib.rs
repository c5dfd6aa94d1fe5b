//! # cf-manager-api
//!
//! A small client for managing one Cloudflare zone: DNS records and
//! IP-blocking firewall rules, authenticated with a global API key
//! (`X-Auth-Email` + `X-Auth-Key`).
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cf_manager_api::{ClientConfig, CloudflareClient, NewDnsRecord, ZoneManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // CLOUDFLARE_EMAIL, CLOUDFLARE_API_KEY, CLOUDFLARE_ZONE_ID
//!     let client = CloudflareClient::new(ClientConfig::from_env()?)?;
//!
//!     for record in client.list_dns_records().await? {
//!         println!("{record}");
//!     }
//!
//!     let record = NewDnsRecord::new("A", "www.example.com", "192.0.2.1");
//!     client.add_dns_record(&record).await?;
//!
//!     client.block_ip("198.51.100.7").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ApiError>`](ApiError). No operation is
//! retried. [`ApiError::kind`] tells apart:
//!
//! - [`FailureKind::Transport`]: no usable response (network, TLS, timeout,
//!   non-JSON body)
//! - [`FailureKind::Api`]: the API answered with a status the operation does
//!   not accept; [`ApiError::Api`] carries the body verbatim
//! - [`FailureKind::Client`]: an argument was rejected before sending

mod client;
mod config;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::CloudflareClient;

pub use config::{
    CF_API_BASE, ClientConfig, Credentials, ENV_API_BASE, ENV_API_KEY, ENV_EMAIL,
    ENV_REQUIRE_CREDENTIALS, ENV_ZONE_ID,
};

pub use error::{ApiError, ConfigError, FailureKind, Result};

pub use http_client::{HttpUtils, OK_ONLY, OK_OR_CREATED};

pub use traits::ZoneManager;

pub use types::{
    AUTO_TTL, DeletedResource, DnsRecord, FilterExpression, FirewallRule, FirewallRuleRequest,
    NewDnsRecord, RuleConfiguration, RuleFilter,
};

pub use utils::log_sanitizer;
