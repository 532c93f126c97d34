//! # Profile Client
//!
//! High-level API for the PricingProfile actor. Exposes the storage
//! operations the pricing core consumes (chain-node reads, the conditional
//! status flip) alongside profile and item CRUD.

use std::collections::HashSet;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    ChainNode, PricingProfile, ProductId, ProfileCreate, ProfileId, ProfileStatus, ProfileUpdate,
    UserId,
};
use crate::profile_actor::{
    ItemWrite, ProfileAction, ProfileActionResult, ProfileError, StatusFlip,
};

/// Client for interacting with the PricingProfile actor.
#[derive(Clone)]
pub struct ProfileClient {
    inner: ResourceClient<PricingProfile>,
}

impl ProfileClient {
    pub fn new(inner: ResourceClient<PricingProfile>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_profile(&self, params: ProfileCreate) -> Result<String, ProfileError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetch a profile by id, visible only to its owner.
    #[instrument(skip(self))]
    pub async fn find_for_user(
        &self,
        user_id: &UserId,
        id: &ProfileId,
    ) -> Result<Option<PricingProfile>, ProfileError> {
        debug!("Sending request");
        let profile = self.inner.get(id.clone()).await.map_err(Self::map_error)?;
        Ok(profile.filter(|p| &p.user_id == user_id))
    }

    /// Apply a partial update, scoped to the owning user.
    ///
    /// `None` means the profile is not visible to this user. Field-level
    /// rejections (e.g. a status other than ARCHIVED) surface as
    /// [`ProfileError::ValidationError`].
    #[instrument(skip(self, update))]
    pub async fn update_profile(
        &self,
        user_id: &UserId,
        id: &ProfileId,
        update: ProfileUpdate,
    ) -> Result<Option<PricingProfile>, ProfileError> {
        debug!("Sending request");
        if self.find_for_user(user_id, id).await?.is_none() {
            return Ok(None);
        }
        match self.inner.update(id.clone(), update).await {
            Ok(profile) => Ok(Some(profile)),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Delete a profile and, with it, all of its selections.
    ///
    /// Returns whether anything was deleted.
    #[instrument(skip(self))]
    pub async fn delete_for_user(
        &self,
        user_id: &UserId,
        id: &ProfileId,
    ) -> Result<bool, ProfileError> {
        debug!("Sending request");
        if self.find_for_user(user_id, id).await?.is_none() {
            return Ok(false);
        }
        match self.inner.delete(id.clone()).await {
            Ok(()) => Ok(true),
            Err(FrameworkError::NotFound(_)) => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Read one level of a based-on chain, scoped to `user_id` and filtered
    /// to `product_ids`.
    ///
    /// `None` covers a missing profile and one owned by another user; the
    /// chain walk treats both as "chain ends here".
    #[instrument(skip(self, product_ids))]
    pub async fn chain_node(
        &self,
        user_id: &UserId,
        id: &ProfileId,
        product_ids: HashSet<ProductId>,
    ) -> Result<Option<ChainNode>, ProfileError> {
        debug!("Sending request");
        let action = ProfileAction::ChainNode {
            user_id: user_id.clone(),
            product_ids,
        };
        match self.inner.perform_action(id.clone(), action).await {
            Ok(ProfileActionResult::ChainNode(node)) => Ok(node),
            Ok(_) => unreachable!("ChainNode action must return ChainNode result"),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Insert or replace one product selection.
    #[instrument(skip(self))]
    pub async fn upsert_item(
        &self,
        user_id: &UserId,
        id: &ProfileId,
        product_id: ProductId,
        adjustment: Decimal,
    ) -> Result<Option<ItemWrite>, ProfileError> {
        debug!("Sending request");
        let action = ProfileAction::UpsertItem {
            user_id: user_id.clone(),
            product_id,
            adjustment,
        };
        match self.inner.perform_action(id.clone(), action).await {
            Ok(ProfileActionResult::UpsertItem(write)) => Ok(write),
            Ok(_) => unreachable!("UpsertItem action must return UpsertItem result"),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Remove one product selection. Inner bool: whether it existed.
    #[instrument(skip(self))]
    pub async fn remove_item(
        &self,
        user_id: &UserId,
        id: &ProfileId,
        product_id: ProductId,
    ) -> Result<Option<bool>, ProfileError> {
        debug!("Sending request");
        let action = ProfileAction::RemoveItem {
            user_id: user_id.clone(),
            product_id,
        };
        match self.inner.perform_action(id.clone(), action).await {
            Ok(ProfileActionResult::RemoveItem(existed)) => Ok(existed),
            Ok(_) => unreachable!("RemoveItem action must return RemoveItem result"),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Conditionally flip the profile status.
    ///
    /// The check-and-set runs inside the profile actor's message loop, so it
    /// can never interleave with another status write.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        user_id: &UserId,
        id: &ProfileId,
        expected: ProfileStatus,
        status: ProfileStatus,
    ) -> Result<Option<StatusFlip>, ProfileError> {
        debug!("Sending request");
        let action = ProfileAction::SetStatus {
            user_id: user_id.clone(),
            expected,
            status,
        };
        match self.inner.perform_action(id.clone(), action).await {
            Ok(ProfileActionResult::SetStatus(flip)) => Ok(flip),
            Ok(_) => unreachable!("SetStatus action must return SetStatus result"),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<PricingProfile> for ProfileClient {
    type Error = ProfileError;

    fn inner(&self) -> &ResourceClient<PricingProfile> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProfileError::NotFound(id),
            FrameworkError::Custom(msg) => ProfileError::ValidationError(msg),
            other => ProfileError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};
    use crate::model::{BasedOn, IncrementMode, PriceAdjustMode};
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_chain_node_passes_scope_through() {
        let (client, mut receiver) = create_mock_client::<PricingProfile>(10);
        let profile_client = ProfileClient::new(client);

        let wanted: HashSet<_> = ["product_1".to_string()].into_iter().collect();
        let node_task = tokio::spawn(async move {
            profile_client
                .chain_node(&"user_1".to_string(), &"profile_1".to_string(), wanted)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, "profile_1");
        match action {
            ProfileAction::ChainNode {
                user_id,
                product_ids,
            } => {
                assert_eq!(user_id, "user_1");
                assert!(product_ids.contains("product_1"));
            }
            _ => panic!("Expected ChainNode action"),
        }

        let node = ChainNode {
            based_on: BasedOn::Root,
            price_adjust_mode: PriceAdjustMode::Fixed,
            increment_mode: IncrementMode::Increase,
            adjustments: HashMap::new(),
        };
        responder
            .send(Ok(ProfileActionResult::ChainNode(Some(node.clone()))))
            .unwrap();

        let result = node_task.await.unwrap();
        assert_eq!(result.unwrap(), Some(node));
    }

    #[tokio::test]
    async fn test_chain_node_missing_profile_ends_chain() {
        let (client, mut receiver) = create_mock_client::<PricingProfile>(10);
        let profile_client = ProfileClient::new(client);

        let node_task = tokio::spawn(async move {
            profile_client
                .chain_node(
                    &"user_1".to_string(),
                    &"profile_9".to_string(),
                    HashSet::new(),
                )
                .await
        });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(FrameworkError::NotFound("profile_9".to_string())))
            .unwrap();

        let result = node_task.await.unwrap();
        assert_eq!(result.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_status_conflict_reports_current() {
        let (client, mut receiver) = create_mock_client::<PricingProfile>(10);
        let profile_client = ProfileClient::new(client);

        let flip_task = tokio::spawn(async move {
            profile_client
                .set_status(
                    &"user_1".to_string(),
                    &"profile_1".to_string(),
                    ProfileStatus::Draft,
                    ProfileStatus::Completed,
                )
                .await
        });

        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        match action {
            ProfileAction::SetStatus { expected, status, .. } => {
                assert_eq!(expected, ProfileStatus::Draft);
                assert_eq!(status, ProfileStatus::Completed);
            }
            _ => panic!("Expected SetStatus action"),
        }

        responder
            .send(Ok(ProfileActionResult::SetStatus(Some(
                StatusFlip::Conflict {
                    current: ProfileStatus::Completed,
                },
            ))))
            .unwrap();

        let result = flip_task.await.unwrap();
        assert_eq!(
            result.unwrap(),
            Some(StatusFlip::Conflict {
                current: ProfileStatus::Completed
            })
        );
    }
}
