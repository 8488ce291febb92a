use tracing::Level;

/// Installs the stderr `fmt` subscriber used by every demo binary.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
