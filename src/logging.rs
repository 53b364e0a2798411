use std::io::{self, IsTerminal};

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Installs the global stderr subscriber. `RUST_LOG` overrides the default `info` filter.
///
/// Only the first call installs anything; later calls return without effect.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .try_init();
}
