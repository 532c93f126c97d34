//! Pricing-profile resource logic: chain-node queries, item upserts, and the
//! conditional status flip that backs publishing.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::ProfileClient;
use crate::framework::ResourceActor;
use crate::model::PricingProfile;

/// Creates a new PricingProfile actor and its client.
///
/// The actor's context (a [`ProductClient`](crate::clients::ProductClient))
/// is injected later, when the runtime starts the actor's loop.
pub fn new() -> (ResourceActor<PricingProfile>, ProfileClient) {
    let profile_id_counter = Arc::new(AtomicU64::new(1));
    let next_profile_id = move || {
        let id = profile_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("profile_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_profile_id);
    let client = ProfileClient::new(generic_client);

    (actor, client)
}
