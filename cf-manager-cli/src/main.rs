//! `cf-manager`: manage DNS records and IP blocks of one Cloudflare zone.

mod app;
mod cli;
mod logging;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use cf_manager_api::{ClientConfig, CloudflareClient};
use clap::{CommandFactory, Parser};

use app::Output;
use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(op) = cli.operation() else {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    logging::init(&cli.log_level);

    let client = match build_client(&cli) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let mut output = Output {
        out: &mut stdout,
        err: &mut stderr,
        json: cli.json,
    };

    match app::execute(&op, &client, &mut output).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_client(cli: &Cli) -> anyhow::Result<CloudflareClient> {
    let mut config = ClientConfig::from_env().context("invalid configuration")?;
    if cli.require_credentials {
        config = config.require_credentials(true);
    }
    if let Some(timeout) = cli.request_timeout() {
        config = config.with_timeout(timeout);
    }
    tracing::debug!(
        base_url = %config.base_url,
        zone = %config.zone_id,
        credentials = ?config.credentials,
        "configuration loaded"
    );
    CloudflareClient::new(config).context("failed to create Cloudflare client")
}
