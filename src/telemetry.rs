use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "states_ranker=debug"
    } else {
        "warn"
    }
}

/// Install the global stderr subscriber. `RUST_LOG` overrides `verbose`.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let value = default_filter(verbose);
            EnvFilter::try_new(value)
                .with_context(|| format!("invalid log filter '{}'", value))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}
