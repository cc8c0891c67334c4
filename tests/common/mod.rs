//! Shared helpers for the integration tests.

use tracing_subscriber::{EnvFilter, fmt};

/// Route compiler tracing into the test output. `RUST_LOG` overrides the
/// default `debug` filter.
pub fn init_test_logging() {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Listing lines as owned strings, for comparing against literals.
#[allow(dead_code)]
pub fn listing_of(module: &crumble::ast::Module<'_>) -> Vec<String> {
    crumble::get_assembly(module)
        .expect("module should compile")
        .into_lines()
}
