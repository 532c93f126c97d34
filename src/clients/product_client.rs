//! # Product Client
//!
//! High-level API for the Product actor: catalog CRUD plus the user-scoped
//! wholesale price quote the pricing core consumes.

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, UserId};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<String, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Fetch a product by id, visible only to its owner.
    ///
    /// A product owned by someone else comes back as `None`, same as a
    /// product that does not exist.
    #[instrument(skip(self))]
    pub async fn find_for_user(
        &self,
        user_id: &UserId,
        id: &ProductId,
    ) -> Result<Option<Product>, ProductError> {
        debug!("Sending request");
        let product = self.inner.get(id.clone()).await.map_err(Self::map_error)?;
        Ok(product.filter(|p| &p.user_id == user_id))
    }

    /// Quote the global wholesale price for one product.
    ///
    /// `None` covers both a missing product and one owned by another user.
    #[instrument(skip(self))]
    pub async fn base_price(
        &self,
        user_id: &UserId,
        id: &ProductId,
    ) -> Result<Option<Decimal>, ProductError> {
        debug!("Quoting base price for product {}", id);
        let action = ProductAction::QuoteBasePrice {
            user_id: user_id.clone(),
        };
        match self.inner.perform_action(id.clone(), action).await {
            Ok(ProductActionResult::BasePrice(price)) => Ok(price),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::Custom(msg) => ProductError::ValidationError(msg),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
