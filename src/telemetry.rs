//! Telemetry helpers for applications embedding `timeslider-rs`.
//!
//! Tracing setup stays explicit and opt-in. Hosts can call
//! `init_default_tracing` or install their own `tracing` subscriber.

#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "warn,timeslider_rs=info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Without `RUST_LOG` the filter is `warn,timeslider_rs=info`; selection and
/// drag decisions log at `debug`, frame presentation at `trace`.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(all(test, not(feature = "telemetry")))]
mod tests {
    use super::init_default_tracing;

    #[test]
    fn disabled_feature_never_installs_a_subscriber() {
        assert!(!init_default_tracing());
    }
}
