//! Logging setup
//!
//! Output goes to stderr through `tracing-subscriber`. `RUST_LOG` takes
//! precedence over the filter stored in preferences:
//!
//! ```bash
//! RUST_LOG=calccore=trace simplecalc
//! ```

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Build the filter: `RUST_LOG` if set, else `fallback`, else `warn`.
pub fn filter_for(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize logging. Only the first call takes effect.
pub fn init(fallback_filter: &str) {
    INIT.call_once(|| {
        let result = tracing_subscriber::fmt()
            .with_env_filter(filter_for(fallback_filter))
            .with_target(true)
            .compact()
            .try_init();
        if let Err(e) = result {
            eprintln!("[simplecalc] logging already initialized: {e}");
        }
    });
}
