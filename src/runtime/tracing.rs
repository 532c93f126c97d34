//! Observability setup.
//!
//! Structured logging via the `tracing` crate: hierarchical spans from the
//! client entry points down to each actor's message handling, with log
//! levels controlled through `RUST_LOG`.
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Full payloads at function entry points
//! RUST_LOG=debug cargo run
//!
//! # Filter to the pricing core only
//! RUST_LOG=catalog_pricing::pricing=debug cargo run
//! ```

/// Initializes the tracing/logging infrastructure for the application.
///
/// The compact format shows span hierarchy inline and hides module paths;
/// actor log lines already carry an `entity_type` field.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
