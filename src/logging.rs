// 📜 Logging setup for the binaries
// The library only emits tracing events; installing a subscriber is the caller's call.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a fmt subscriber filtered by RUST_LOG (default: info for this crate, warn elsewhere)
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,wuge_name_engine=info,wuge=info,wuge_server=info"));

    // stderr keeps stdout clean for --json output
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
