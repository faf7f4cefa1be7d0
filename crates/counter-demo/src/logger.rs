//! Logging setup
//!
//! Logs go to stderr through env_logger so they never interleave with the
//! demo's stdout. `RUST_LOG` overrides the default `warn` level.

use env_logger::Env;

/// Initialize env_logger, honouring RUST_LOG
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}
