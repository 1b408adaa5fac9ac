use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging.
///
/// Production gets structured JSON lines; development gets a readable
/// console format with code locations. `RUST_LOG` overrides the configured
/// log level in both.
pub fn init_observability(
    service_name: &str,
    service_version: &str,
    log_level: &str,
    production: bool,
) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    if production {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_filter(env_filter))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::info!(
        service.name = service_name,
        service.version = service_version,
        production,
        "logging initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent_failure() {
        // Whichever call registers the global subscriber first wins; the
        // second must report an error instead of panicking.
        let first = init_observability("mealbook-test", "0.0.0", "debug", false);
        let second = init_observability("mealbook-test", "0.0.0", "debug", false);

        assert!(first.is_ok() || second.is_err());
    }
}
