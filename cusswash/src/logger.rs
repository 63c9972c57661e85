// cusswash/src/logger.rs
//! Logger bootstrap for the CLI.
//!
//! Respects `RUST_LOG` when set; an explicit level from the command line
//! overrides it.

use log::LevelFilter;

pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    // Tests may initialize more than once; later calls are harmless no-ops.
    let _ = builder.try_init();
}
