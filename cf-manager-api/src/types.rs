use std::fmt;
use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

// ============ Response envelope ============

/// Cloudflare response envelope. Only `result` is read; error bodies are
/// kept as raw JSON by the caller.
#[derive(Debug, Deserialize)]
pub(crate) struct CloudflareResponse<T> {
    pub result: Option<T>,
}

// ============ DNS records ============

/// A DNS record as returned by the zone's `dns_records` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    #[serde(default = "default_ttl")]
    pub ttl: u32,
    #[serde(default)]
    pub proxied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.record_type, self.name, self.content)
    }
}

/// TTL value meaning "automatic" to Cloudflare.
pub const AUTO_TTL: u32 = 1;

const fn default_ttl() -> u32 {
    AUTO_TTL
}

/// Body of `POST /zones/{zone}/dns_records`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDnsRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub proxied: bool,
}

impl NewDnsRecord {
    /// An unproxied record with automatic TTL.
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
            content: content.into(),
            ttl: AUTO_TTL,
            proxied: false,
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_proxied(mut self, proxied: bool) -> Self {
        self.proxied = proxied;
        self
    }

    /// Rejects blank fields. Type names, TTL ranges and content formats are
    /// left to the API.
    pub fn validate(&self) -> Result<()> {
        for (param, value) in [
            ("type", &self.record_type),
            ("name", &self.name),
            ("content", &self.content),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::invalid_input(param, "must not be empty"));
            }
        }
        Ok(())
    }
}

// ============ Firewall rules ============

/// Target/value pair of an IP access rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfiguration {
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub value: String,
}

/// Filter attached to a firewall rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub expression: String,
}

/// A firewall rule as listed by the zone.
///
/// Filter-based rules carry `action`/`filter`, access rules carry
/// `mode`/`configuration`; whichever is absent stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirewallRule {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<RuleConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default)]
    pub paused: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<RuleFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
}

const MISSING: &str = "-";

impl FirewallRule {
    pub fn target(&self) -> &str {
        self.configuration
            .as_ref()
            .map_or(MISSING, |c| c.target.as_str())
    }

    pub fn value(&self) -> &str {
        self.configuration
            .as_ref()
            .map_or(MISSING, |c| c.value.as_str())
    }

    /// `mode` for access rules, `action` for filter-based rules.
    pub fn mode_or_action(&self) -> &str {
        self.mode
            .as_deref()
            .or(self.action.as_deref())
            .unwrap_or(MISSING)
    }
}

impl fmt::Display for FirewallRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rule ID: {} | Target: {} | Value: {} | Mode: {}",
            self.id,
            self.target(),
            self.value(),
            self.mode_or_action()
        )
    }
}

/// Filter expression of a new firewall rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterExpression {
    pub expression: String,
}

/// One element of the `POST /zones/{zone}/firewall/rules` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirewallRuleRequest {
    pub action: String,
    pub priority: u32,
    pub paused: bool,
    pub description: String,
    pub filter: FilterExpression,
}

impl FirewallRuleRequest {
    /// Active rule blocking all traffic whose source address is `ip`.
    ///
    /// Takes a parsed address so nothing but a literal IP can end up inside
    /// the filter expression.
    pub fn block_ip(ip: IpAddr) -> Self {
        Self {
            action: "block".to_string(),
            priority: 1,
            paused: false,
            description: format!("Blocked IP {ip}"),
            filter: FilterExpression {
                expression: format!("(ip.src eq \"{ip}\")"),
            },
        }
    }
}

// ============ Deletes ============

/// `result` of a successful DELETE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedResource {
    pub id: String,
}
