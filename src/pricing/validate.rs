//! The negative-price business rule.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{instrument, warn};

use crate::clients::{ProductClient, ProfileClient};
use crate::model::{PricingTerms, ProductId, UserId};
use crate::pricing::chain::load_chain;
use crate::pricing::preview::priced_row;
use crate::pricing::service::PricingError;

/// Result of a negative-price check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceValidation {
    Valid,
    Invalid { offending_titles: Vec<String> },
}

/// Resolves every product under `terms` and rejects the set if any final
/// price comes out negative.
///
/// This check runs at two independent points of a profile's life: before a
/// draft is first persisted, and again inside publish; base prices and
/// ancestor profiles may have drifted between the two moments, so neither
/// run can stand in for the other.
#[instrument(skip(products, profiles, terms, product_ids))]
pub async fn validate_no_negatives(
    products: &ProductClient,
    profiles: &ProfileClient,
    user_id: &UserId,
    terms: &PricingTerms,
    product_ids: &[ProductId],
) -> Result<PriceValidation, PricingError> {
    let scope: HashSet<ProductId> = product_ids.iter().cloned().collect();
    let chain = load_chain(profiles, user_id, &terms.based_on, &scope).await?;

    let mut offending_titles = Vec::new();
    for product_id in product_ids {
        let Some(product) = products.find_for_user(user_id, product_id).await? else {
            warn!(%product_id, "Product not visible, skipping validation row");
            continue;
        };
        let row = priced_row(terms, &chain, product_id, product.global_wholesale_price);
        if row.new_price < Decimal::ZERO {
            offending_titles.push(product.title);
        }
    }

    if offending_titles.is_empty() {
        Ok(PriceValidation::Valid)
    } else {
        Ok(PriceValidation::Invalid { offending_titles })
    }
}
