//! Tracing setup.
//!
//! Log output goes to stderr so stdout carries only upload confirmations and
//! the run summary. Priority: RUST_LOG > `--log-level` > "info".

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
