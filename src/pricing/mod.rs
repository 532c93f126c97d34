//! The pricing resolution core.
//!
//! Computes a product's effective price by walking its profile's based-on
//! chain back to the global wholesale price, applying each ancestor's
//! adjustment along the way.
//!
//! # Main Components
//!
//! - [`apply_adjustment`] - the fixed/percentage increase/decrease formula
//! - [`load_chain`] - walks ancestor profiles into a lookup table
//! - [`resolve_based_on_price`] - the recursive resolver over that table
//! - [`compute_preview`] - per-product base/delta/new-price rows
//! - [`validate_no_negatives`] - the negative-price business rule
//! - [`PricingService`] - preview / create-draft / publish entry points
//!
//! Resolution is a pure function of currently stored state: every call walks
//! the chain afresh, nothing is cached between calls.

pub mod adjustment;
pub mod chain;
pub mod preview;
pub mod resolve;
pub mod service;
pub mod validate;

pub use adjustment::*;
pub use chain::*;
pub use preview::*;
pub use resolve::*;
pub use service::*;
pub use validate::*;
