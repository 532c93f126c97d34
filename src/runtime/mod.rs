//! Runtime orchestration and lifecycle management.
//!
//! - **Actor lifecycle management**: starting, wiring, and shutting down actors
//! - **System orchestration**: injecting cross-actor dependencies
//! - **Observability setup**: initializing tracing and logging
//!
//! # Main Components
//!
//! - [`PricingSystem`] - the orchestrator that owns every actor and client
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod pricing_system;
pub mod tracing;

pub use self::pricing_system::*;
pub use self::tracing::*;
