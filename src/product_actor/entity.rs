//! Entity trait implementation for the Product domain type.

use async_trait::async_trait;

use super::actions::{ProductAction, ProductActionResult};
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductUpdate};

#[async_trait]
impl ActorEntity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();

    /// Creates a new Product from creation parameters.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        if params.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if params.sku.trim().is_empty() {
            return Err("sku must not be empty".to_string());
        }
        Ok(Self::new(
            id,
            params.user_id,
            params.title,
            params.sku,
            params.brand,
            params.global_wholesale_price,
        ))
    }

    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), String> {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(price) = update.global_wholesale_price {
            self.global_wholesale_price = price;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::QuoteBasePrice { user_id } => {
                let price = (self.user_id == user_id).then_some(self.global_wholesale_price);
                Ok(ProductActionResult::BasePrice(price))
            }
        }
    }
}
