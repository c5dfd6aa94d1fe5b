use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr subscriber. stdout carries command output only.
///
/// `RUST_LOG` wins over `level` when set. Records from the `log` facade used
/// by the API crate are forwarded too.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(filter)
        .try_init();

    if let Err(e) = result {
        eprintln!("logging disabled: {e}");
    }
}

fn default_directives(level: &str) -> String {
    format!("warn,cf_manager_cli={level},cf_manager_api={level}")
}
