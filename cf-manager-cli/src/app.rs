//! Runs one operation and renders its outcome.

use std::io::{self, Write};

use cf_manager_api::{ApiError, ZoneManager};
use serde::Serialize;

use crate::cli::Operation;

/// Where and how results are printed.
pub struct Output<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    pub json: bool,
}

impl Output<'_> {
    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        writeln!(self.out, "{text}")
    }

    fn failure(&mut self, op: &Operation, error: &ApiError) -> io::Result<()> {
        if self.json {
            let text = serde_json::to_string_pretty(&serde_json::json!({ "error": error }))
                .map_err(io::Error::other)?;
            return writeln!(self.err, "{text}");
        }
        writeln!(self.err, "{}: {error}", op.failure_label())
    }
}

/// Executes `op` against `zone` and prints the result.
///
/// Returns `Ok(false)` when the operation failed; the failure has already
/// been printed. `Err` only for I/O errors on the output streams.
pub async fn execute(op: &Operation, zone: &dyn ZoneManager, output: &mut Output<'_>) -> io::Result<bool> {
    tracing::debug!(zone = zone.zone_id(), ?op, "executing operation");

    let result = match op {
        Operation::ListDns => zone.list_dns_records().await.map(|records| {
            if output.json {
                return output.json(&records);
            }
            for record in &records {
                writeln!(output.out, "{record}")?;
            }
            Ok(())
        }),
        Operation::AddDns(record) => zone.add_dns_record(record).await.map(|created| {
            if output.json {
                return output.json(&created);
            }
            let rendered = serde_json::to_string(&created).map_err(io::Error::other)?;
            writeln!(output.out, "Successfully added DNS record: {rendered}")
        }),
        Operation::DeleteDns(id) => zone.delete_dns_record(id).await.map(|deleted| {
            if output.json {
                return output.json(&deleted);
            }
            writeln!(output.out, "Successfully deleted DNS record")
        }),
        Operation::BlockIp(ip) => zone.block_ip(ip).await.map(|rules| {
            if output.json {
                return output.json(&rules);
            }
            writeln!(output.out, "Successfully blocked IP: {ip}")?;
            for rule in &rules {
                writeln!(output.out, "Rule ID: {}", rule.id)?;
            }
            Ok(())
        }),
        Operation::UnblockIp(id) => zone.unblock_ip(id).await.map(|deleted| {
            if output.json {
                return output.json(&deleted);
            }
            writeln!(output.out, "Successfully unblocked IP")
        }),
        Operation::ListFirewall => zone.list_firewall_rules().await.map(|rules| {
            if output.json {
                return output.json(&rules);
            }
            for rule in &rules {
                writeln!(output.out, "{rule}")?;
            }
            Ok(())
        }),
    };

    match result {
        Ok(printed) => printed.map(|()| true),
        Err(error) => {
            tracing::debug!(kind = ?error.kind(), "operation failed");
            output.failure(op, &error)?;
            Ok(false)
        }
    }
}
