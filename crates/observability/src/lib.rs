//! Tracing/logging setup shared by every process embedding the catalog domain.
//!
//! The domain crates only emit `tracing` events; binaries that embed them call
//! [`init`] once at startup to install a subscriber.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&config::ObservabilityConfig::from_env());
}

/// Environment-driven configuration.
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};
pub use self::tracing::init_with;
