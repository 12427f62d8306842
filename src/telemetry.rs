//! Tracing setup for applications embedding `chart-bars`.
//!
//! Layout builders emit `debug!`/`trace!` events; nothing is printed unless
//! the host installs a subscriber, either its own or one of the helpers below.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Same as [`init_default_tracing`] but with an explicit directive string,
/// e.g. `"chart_bars=trace"` to see per-frame primitive counts.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        return match tracing_subscriber::EnvFilter::try_new(directives) {
            Ok(filter) => install(filter),
            Err(_) => false,
        };
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::init_tracing_with_filter;

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn helpers_are_noops_without_feature() {
        assert!(!init_tracing_with_filter("chart_bars=trace"));
        assert!(!super::init_default_tracing());
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn rejects_malformed_directives() {
        assert!(!init_tracing_with_filter("chart_bars=[["));
    }
}
