use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `env_filter` uses the `EnvFilter` directive syntax, e.g.
/// `info,evm_deploy=debug`. An invalid filter falls back to `info`.
pub fn initialize(env_filter: &str) {
    let filter = EnvFilter::try_new(env_filter).unwrap_or_else(|e| {
        eprintln!("invalid log filter {:?}: {}, using `info`", env_filter, e);
        EnvFilter::new("info")
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_filter(filter))
        .init();
}

/// Like [`initialize`], but can be called multiple times in a row. Later calls
/// are ignored.
///
/// Useful for tests.
pub fn initialize_reentrant(env_filter: &str) {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| initialize(env_filter));
}
