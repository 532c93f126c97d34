use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::UserId;

/// A catalog product.
///
/// Read-only to the pricing core: resolution only ever consumes the stored
/// wholesale price, it never writes back to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub user_id: UserId,
    pub title: String,
    pub sku: String,
    pub brand: String,
    /// Base wholesale price every based-on chain terminates at.
    pub global_wholesale_price: Decimal,
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub user_id: UserId,
    pub title: String,
    pub sku: String,
    pub brand: String,
    pub global_wholesale_price: Decimal,
}

/// Payload for updating an existing product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub global_wholesale_price: Option<Decimal>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `user_id` - Owning user
    /// * `title` - Display title
    /// * `sku` - Stock keeping unit
    /// * `brand` - Brand name
    /// * `global_wholesale_price` - Base wholesale price
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        title: impl Into<String>,
        sku: impl Into<String>,
        brand: impl Into<String>,
        global_wholesale_price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            title: title.into(),
            sku: sku.into(),
            brand: brand.into(),
            global_wholesale_price,
        }
    }
}
