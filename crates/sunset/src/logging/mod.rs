use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber that prints deprecation notices.
///
/// Call this once at startup. Safe to call multiple times. Only takes
/// effect when `RUST_LOG` is set, e.g. `RUST_LOG=deprecation=warn`. If the
/// application already installed a global subscriber, that one is kept.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .try_init();
        if let Err(err) = installed {
            tracing::debug!("keeping the existing subscriber for deprecation notices: {err}");
        }
    });
}
