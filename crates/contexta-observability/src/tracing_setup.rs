//! Standard tracing subscriber setup for binaries.

/// Initialize a tracing subscriber with env-based filtering.
///
/// Default directives:
/// - `contexta=info`
/// - `contexta_viewer=info`
/// - `contexta_core=warn`
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("contexta=info".parse().unwrap_or_default())
        .add_directive("contexta_viewer=info".parse().unwrap_or_default())
        .add_directive("contexta_core=warn".parse().unwrap_or_default());

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
