use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Called from the handler constructor,
/// so repeated calls must stay silent no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
