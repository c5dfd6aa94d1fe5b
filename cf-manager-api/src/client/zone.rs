//! `ZoneManager` for the Cloudflare zone endpoints

use std::net::IpAddr;

use async_trait::async_trait;

use crate::error::{ApiError, Result};
use crate::http_client::{HttpUtils, OK_ONLY, OK_OR_CREATED};
use crate::traits::ZoneManager;
use crate::types::{DeletedResource, DnsRecord, FirewallRule, FirewallRuleRequest, NewDnsRecord};

use super::CloudflareClient;

const DNS_RECORDS: &str = "dns_records";
const FIREWALL: &str = "firewall";
const RULES: &str = "rules";

/// Rejects blank ids, which would otherwise address the whole collection.
fn require_id<'a>(param: &str, id: &'a str) -> Result<&'a str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::invalid_input(param, "must not be empty"));
    }
    Ok(id)
}

pub(crate) fn parse_ip(ip: &str) -> Result<IpAddr> {
    ip.trim()
        .parse()
        .map_err(|_| ApiError::invalid_input("ip", format!("'{ip}' is not an IPv4 or IPv6 address")))
}

impl CloudflareClient {
    /// `result` of a delete, falling back to the requested id when the API
    /// returns none.
    fn deleted(body: serde_json::Value, requested_id: &str) -> Result<DeletedResource> {
        Ok(HttpUtils::extract_optional_result(body)?.unwrap_or_else(|| DeletedResource {
            id: requested_id.to_string(),
        }))
    }
}

#[async_trait]
impl ZoneManager for CloudflareClient {
    fn zone_id(&self) -> &str {
        &self.zone_id
    }

    async fn list_dns_records(&self) -> Result<Vec<DnsRecord>> {
        let body = self.get(&self.zone_url(&[DNS_RECORDS]), OK_ONLY).await?;
        HttpUtils::extract_result(body)
    }

    async fn add_dns_record(&self, record: &NewDnsRecord) -> Result<DnsRecord> {
        record.validate()?;
        let body = self
            .post(&self.zone_url(&[DNS_RECORDS]), record, OK_OR_CREATED)
            .await?;
        HttpUtils::extract_result(body)
    }

    async fn delete_dns_record(&self, record_id: &str) -> Result<DeletedResource> {
        let record_id = require_id("record id", record_id)?;
        let body = self
            .delete(&self.zone_url(&[DNS_RECORDS, record_id]), OK_ONLY)
            .await?;
        Self::deleted(body, record_id)
    }

    async fn block_ip(&self, ip: &str) -> Result<Vec<FirewallRule>> {
        let ip = parse_ip(ip)?;
        let rules = [FirewallRuleRequest::block_ip(ip)];
        let body = self
            .post(&self.zone_url(&[FIREWALL, RULES]), &rules, OK_OR_CREATED)
            .await?;
        log::info!("Blocked {ip} in zone {}", self.zone_id);
        Ok(HttpUtils::extract_optional_result(body)?.unwrap_or_default())
    }

    async fn unblock_ip(&self, rule_id: &str) -> Result<DeletedResource> {
        let rule_id = require_id("rule id", rule_id)?;
        let body = self
            .delete(&self.zone_url(&[FIREWALL, RULES, rule_id]), OK_ONLY)
            .await?;
        Self::deleted(body, rule_id)
    }

    async fn list_firewall_rules(&self) -> Result<Vec<FirewallRule>> {
        let body = self
            .get(&self.zone_url(&[FIREWALL, RULES]), OK_ONLY)
            .await?;
        HttpUtils::extract_result(body)
    }
}
