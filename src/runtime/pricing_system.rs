use tracing::{error, info};

use crate::clients::{ProductClient, ProfileClient, UserClient};
use crate::pricing::PricingService;

/// The runtime orchestrator for the catalog-pricing backend.
///
/// Owns the three resource actors (users, products, pricing profiles), the
/// clients that talk to them, and the [`PricingService`] built on top.
///
/// # Wiring
///
/// User and Product actors have no dependencies. The PricingProfile actor
/// receives a [`ProductClient`] as its context so profile creation can
/// verify its selections against the catalog. The profile actor never calls
/// itself; chain resolution happens in the service, outside the actor's
/// message loop.
pub struct PricingSystem {
    /// Client for the User actor.
    pub user_client: UserClient,

    /// Client for the Product actor (the catalog collaborator).
    pub product_client: ProductClient,

    /// Client for the PricingProfile actor.
    pub profile_client: ProfileClient,

    /// Preview / create-draft / publish entry points.
    pub pricing: PricingService,

    /// Task handles for all running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PricingSystem {
    /// Creates and initializes a new `PricingSystem` with all actors running.
    pub fn new() -> Self {
        // 1. Create actors (no dependencies yet)
        let (user_actor, user_client) = crate::user_actor::new();
        let (product_actor, product_client) = crate::product_actor::new();
        let (profile_actor, profile_client) = crate::profile_actor::new();

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        // Profile actor needs the catalog for selection checks
        let profile_handle = tokio::spawn(profile_actor.run(product_client.clone()));

        let pricing = PricingService::new(product_client.clone(), profile_client.clone());

        Self {
            user_client,
            product_client,
            profile_client,
            pricing,
            handles: vec![user_handle, product_handle, profile_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping every client closes the actors' channels; each actor drains
    /// its queue and exits its loop. Returns an error if any actor task
    /// panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.pricing);
        drop(self.user_client);
        drop(self.product_client);
        drop(self.profile_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for PricingSystem {
    fn default() -> Self {
        Self::new()
    }
}
