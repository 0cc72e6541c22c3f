use crate::types::LogLevel;

/// Install the stderr subscriber. Stdout stays reserved for command output.
pub fn init(level: LogLevel) {
    // A subscriber may already be installed when driven from tests
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
