//! Logger setup shared by the binary and the integration tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`, writing to stderr.
///
/// `RUST_LOG` is honored unless `level` forces a filter. Calling this more than once
/// is harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp_millis().try_init();
}
