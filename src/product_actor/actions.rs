//! Custom actions for the Product actor.

use rust_decimal::Decimal;

use crate::model::UserId;

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Quotes the global wholesale price, scoped to the requesting user.
    ///
    /// A product owned by a different user answers `None`, exactly like a
    /// missing product; existence never leaks across users.
    QuoteBasePrice { user_id: UserId },
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// Result from QuoteBasePrice - the wholesale price, or `None` when the
    /// product is not visible to the requesting user.
    BasePrice(Option<Decimal>),
}
