//! # formstate-log
//!
//! Installs a `tracing` subscriber for applications and tests using the
//! formstate crates.
//!
//! ```no_run
//! // Filter and format from FORMSTATE_LOG / RUST_LOG / FORMSTATE_LOG_FORMAT,
//! // otherwise a preset chosen by build profile.
//! formstate_log::auto_init()?;
//! # Ok::<(), formstate_log::LogError>(())
//! ```

mod builder;
mod config;
mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format, Writer};
pub use error::{LogError, LogResult};

/// Initialize from the environment if a filter variable is set, otherwise
/// with the development or production preset depending on the build.
pub fn auto_init() -> LogResult<()> {
    if std::env::var("FORMSTATE_LOG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with the default configuration
pub fn init() -> LogResult<()> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}

/// Initialize for tests; a no-op when a subscriber is already installed.
pub fn init_test() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    // Another test thread may win the race; either way a subscriber is set.
    let _ = init_with(Config::test());
}
