// File: crates/chart-core/src/telemetry.rs
// Summary: Log subscriber setup for binaries that render charts (feature `telemetry`).

/// Directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Install a compact stderr subscriber filtered by `RUST_LOG`, else [`DEFAULT_FILTER`].
/// `false` means nothing was installed: the feature is off or a global
/// subscriber already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_tracing(fallback: &str) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(not(feature = "telemetry"))]
#[must_use]
pub fn init_tracing(_fallback: &str) -> bool {
    false
}

