use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `LSTREE_LOG=debug`.
pub const LOG_ENV: &str = "LSTREE_LOG";

/// Install a stderr subscriber. Silent unless `LSTREE_LOG` asks for output.
pub fn init_logging() -> anyhow::Result<()> {
    let directive = filter_directive(std::env::var(LOG_ENV).ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("cannot initialize logging: {err}"))
}

fn filter_directive(value: Option<String>) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value.trim().to_owned(),
        _ => "off".to_owned(),
    }
}
