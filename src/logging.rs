use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `golf_league=debug`.
pub const LOG_ENV: &str = "GOLF_LEAGUE_LOG";

/// Install the fmt subscriber. Safe to call more than once; later calls are
/// ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
