//! Entity trait implementation for the PricingProfile domain type.
//!
//! The actor's context is a [`ProductClient`]: profile creation verifies
//! that every initial selection references a product the owning user can
//! see. Validation that needs the profile actor itself (chain resolution,
//! the negative-price rule) lives in
//! [`PricingService`](crate::pricing::PricingService) instead; a hook
//! calling back into its own actor would deadlock the message loop.

use async_trait::async_trait;

use super::actions::{ItemWrite, ProfileAction, ProfileActionResult, StatusFlip};
use crate::clients::ProductClient;
use crate::framework::ActorEntity;
use crate::model::{PricingProfile, ProfileCreate, ProfileStatus, ProfileUpdate};

#[async_trait]
impl ActorEntity for PricingProfile {
    type Id = String;
    type CreateParams = ProfileCreate;
    type UpdateParams = ProfileUpdate;
    type Action = ProfileAction;
    type ActionResult = ProfileActionResult;
    type Context = ProductClient;

    /// Creates a new PricingProfile from creation parameters.
    ///
    /// New profiles always start in [`ProfileStatus::Draft`]; duplicate
    /// product ids in `items` collapse to the last adjustment given.
    fn from_create_params(id: String, params: ProfileCreate) -> Result<Self, String> {
        if params.name.trim().chars().count() < 2 {
            return Err("name must be at least 2 characters".to_string());
        }
        if params.description.trim().is_empty() {
            return Err("description must not be empty".to_string());
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            name: params.name,
            description: params.description,
            based_on: params.based_on,
            price_adjust_mode: params.price_adjust_mode,
            increment_mode: params.increment_mode,
            status: ProfileStatus::Draft,
            items: params.items.into_iter().collect(),
        })
    }

    /// Verifies every initial selection against the catalog before the
    /// profile is stored.
    async fn on_create(&mut self, products: &Self::Context) -> Result<(), String> {
        for product_id in self.items.keys() {
            let known = products
                .find_for_user(&self.user_id, product_id)
                .await
                .map_err(|e| e.to_string())?
                .is_some();
            if !known {
                return Err(format!("unknown product: {product_id}"));
            }
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: ProfileUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), String> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(based_on) = update.based_on {
            self.based_on = based_on;
        }
        if let Some(mode) = update.price_adjust_mode {
            self.price_adjust_mode = mode;
        }
        if let Some(increment) = update.increment_mode {
            self.increment_mode = increment;
        }
        if let Some(status) = update.status {
            // The only status reachable by plain update is ARCHIVED; the
            // DRAFT -> COMPLETED flip must go through publish.
            if status != ProfileStatus::Archived {
                return Err(format!("status can only be updated to ARCHIVED, got {status}"));
            }
            self.status = status;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProfileAction,
        _ctx: &Self::Context,
    ) -> Result<ProfileActionResult, String> {
        match action {
            ProfileAction::ChainNode {
                user_id,
                product_ids,
            } => {
                let node = (self.user_id == user_id).then(|| self.chain_node(&product_ids));
                Ok(ProfileActionResult::ChainNode(node))
            }
            ProfileAction::UpsertItem {
                user_id,
                product_id,
                adjustment,
            } => {
                if self.user_id != user_id {
                    return Ok(ProfileActionResult::UpsertItem(None));
                }
                let write = match self.items.insert(product_id, adjustment) {
                    Some(_) => ItemWrite::Replaced,
                    None => ItemWrite::Inserted,
                };
                Ok(ProfileActionResult::UpsertItem(Some(write)))
            }
            ProfileAction::RemoveItem {
                user_id,
                product_id,
            } => {
                if self.user_id != user_id {
                    return Ok(ProfileActionResult::RemoveItem(None));
                }
                let existed = self.items.remove(&product_id).is_some();
                Ok(ProfileActionResult::RemoveItem(Some(existed)))
            }
            ProfileAction::SetStatus {
                user_id,
                expected,
                status,
            } => {
                if self.user_id != user_id {
                    return Ok(ProfileActionResult::SetStatus(None));
                }
                let flip = if self.status == expected {
                    self.status = status;
                    StatusFlip::Updated
                } else {
                    StatusFlip::Conflict {
                        current: self.status,
                    }
                };
                Ok(ProfileActionResult::SetStatus(Some(flip)))
            }
        }
    }
}
