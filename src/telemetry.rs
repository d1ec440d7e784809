//! Opt-in log output for hosts without their own `tracing` subscriber.
//!
//! Markers emit `trace!` for skipped hidden markers, `debug!` per built frame
//! or batch draw, and `warn!` when a raster backend meets a color it cannot
//! parse.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `true` only for the call that installed it. Without the `telemetry`
/// feature this is a no-op returning `false`.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
