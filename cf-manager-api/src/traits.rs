use async_trait::async_trait;

use crate::error::Result;
use crate::types::{DeletedResource, DnsRecord, FirewallRule, NewDnsRecord};

/// DNS and firewall operations on a single zone.
///
/// Each method performs exactly one request against the remote service;
/// nothing is cached between calls.
#[async_trait]
pub trait ZoneManager: Send + Sync {
    /// Identifier of the zone every operation is scoped to.
    fn zone_id(&self) -> &str;

    /// Lists every DNS record in the zone.
    async fn list_dns_records(&self) -> Result<Vec<DnsRecord>>;

    /// Creates `record` and returns it as stored by the API.
    async fn add_dns_record(&self, record: &NewDnsRecord) -> Result<DnsRecord>;

    /// Deletes the DNS record `record_id`.
    async fn delete_dns_record(&self, record_id: &str) -> Result<DeletedResource>;

    /// Creates a rule blocking all traffic from `ip`.
    ///
    /// `ip` must parse as an IPv4 or IPv6 address; anything else is rejected
    /// before a request is built. Returns the rules the API created.
    async fn block_ip(&self, ip: &str) -> Result<Vec<FirewallRule>>;

    /// Deletes the firewall rule `rule_id`.
    async fn unblock_ip(&self, rule_id: &str) -> Result<DeletedResource>;

    /// Lists the zone's firewall rules.
    async fn list_firewall_rules(&self) -> Result<Vec<FirewallRule>>;
}
