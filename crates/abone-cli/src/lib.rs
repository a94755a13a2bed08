//! Interactive terminal front end for the recurring-payment tracker.

pub mod cli;
pub mod errors;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env()
            .add_directive("abone_cli=info".parse().unwrap())
            .add_directive("abone_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("abone tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
