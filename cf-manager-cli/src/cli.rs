//! Command-line arguments

use std::time::Duration;

use cf_manager_api::{AUTO_TTL, NewDnsRecord};
use clap::{ArgGroup, Parser};

/// Operation flags that take no record options.
const OTHER_OPERATIONS: [&str; 5] = ["list_dns", "delete_dns", "block_ip", "unblock_ip", "list_firewall"];

#[derive(Debug, Parser)]
#[command(
    name = "cf-manager",
    version,
    about = "Cloudflare DNS and Firewall Management Tool",
    long_about = "Manages DNS records and IP block rules of one Cloudflare zone.\n\n\
                  Credentials are read from CLOUDFLARE_EMAIL, CLOUDFLARE_API_KEY and \
                  CLOUDFLARE_ZONE_ID."
)]
#[command(group(
    ArgGroup::new("operation")
        .args(["list_dns", "add_dns", "delete_dns", "block_ip", "unblock_ip", "list_firewall"])
        .multiple(false)
))]
pub struct Cli {
    /// List all DNS records
    #[arg(long)]
    pub list_dns: bool,

    /// Add a new DNS record
    #[arg(long, num_args = 3, value_names = ["TYPE", "NAME", "CONTENT"])]
    pub add_dns: Option<Vec<String>>,

    /// TTL of the record created by --add-dns (1 = automatic)
    #[arg(
        long,
        default_value_t = AUTO_TTL,
        requires = "add_dns",
        conflicts_with_all = OTHER_OPERATIONS
    )]
    pub ttl: u32,

    /// Proxy the record created by --add-dns through Cloudflare
    #[arg(long, requires = "add_dns", conflicts_with_all = OTHER_OPERATIONS)]
    pub proxied: bool,

    /// Delete a DNS record by ID
    #[arg(long, value_name = "RECORD_ID")]
    pub delete_dns: Option<String>,

    /// Block an IP address
    #[arg(long, value_name = "IP")]
    pub block_ip: Option<String>,

    /// Unblock an IP address by rule ID
    #[arg(long, value_name = "RULE_ID")]
    pub unblock_ip: Option<String>,

    /// List all firewall rules
    #[arg(long)]
    pub list_firewall: bool,

    /// Fail before sending anything if a credential or the zone ID is unset
    #[arg(long)]
    pub require_credentials: bool,

    /// Request timeout in seconds (default: no timeout beyond the transport's)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print results and errors as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "CF_MANAGER_LOG")]
    pub log_level: String,
}

/// The single operation selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ListDns,
    AddDns(NewDnsRecord),
    DeleteDns(String),
    BlockIp(String),
    UnblockIp(String),
    ListFirewall,
}

impl Operation {
    /// Prefix of the failure message, e.g. `Failed to add DNS record`.
    pub fn failure_label(&self) -> &'static str {
        match self {
            Self::ListDns => "Failed to fetch DNS records",
            Self::AddDns(_) => "Failed to add DNS record",
            Self::DeleteDns(_) => "Failed to delete DNS record",
            Self::BlockIp(_) => "Failed to block IP",
            Self::UnblockIp(_) => "Failed to unblock IP",
            Self::ListFirewall => "Failed to fetch firewall rules",
        }
    }
}

impl Cli {
    /// `None` when no operation flag was given.
    pub fn operation(&self) -> Option<Operation> {
        if self.list_dns {
            return Some(Operation::ListDns);
        }
        if let Some([record_type, name, content]) = self.add_dns.as_deref() {
            return Some(Operation::AddDns(
                NewDnsRecord::new(record_type.as_str(), name.as_str(), content.as_str())
                    .with_ttl(self.ttl)
                    .with_proxied(self.proxied),
            ));
        }
        if let Some(id) = &self.delete_dns {
            return Some(Operation::DeleteDns(id.clone()));
        }
        if let Some(ip) = &self.block_ip {
            return Some(Operation::BlockIp(ip.clone()));
        }
        if let Some(id) = &self.unblock_ip {
            return Some(Operation::UnblockIp(id.clone()));
        }
        if self.list_firewall {
            return Some(Operation::ListFirewall);
        }
        None
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
