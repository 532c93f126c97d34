//! Per-product price preview rows.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{instrument, warn};

use crate::clients::{ProductClient, ProfileClient};
use crate::model::{ChainNode, PricingTerms, ProductId, ProfileId, UserId};
use crate::pricing::adjustment::{apply_adjustment, Adjusted};
use crate::pricing::chain::load_chain;
use crate::pricing::resolve::resolve_based_on_price;
use crate::pricing::service::PricingError;

/// One preview line: the resolved based-on price, the delta this profile's
/// own adjustment adds or removes, and the final price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    pub base: Decimal,
    pub delta: Decimal,
    pub new_price: Decimal,
}

/// Prices one product through an already-loaded chain and applies the
/// profile-under-edit's own adjustment on top.
///
/// An unselected product gets a zero adjustment here; a preview row always
/// shows a number, unlike ancestor levels, where unselected products skip
/// adjustment entirely.
pub fn priced_row(
    terms: &PricingTerms,
    chain: &HashMap<ProfileId, ChainNode>,
    product_id: &ProductId,
    raw_base: Decimal,
) -> PreviewRow {
    let base = resolve_based_on_price(
        &terms.based_on,
        product_id,
        raw_base,
        chain,
        0,
        HashSet::new(),
    );
    let adjustment = terms
        .adjustments
        .get(product_id)
        .copied()
        .unwrap_or(Decimal::ZERO);
    let Adjusted { delta, new_price } = apply_adjustment(
        base,
        adjustment,
        terms.price_adjust_mode,
        terms.increment_mode,
    );
    PreviewRow {
        base,
        delta,
        new_price,
    }
}

/// Computes preview rows for every requested product.
///
/// Loads the based-on chain once, then prices each product against it.
/// Products the user cannot see are left out of the result (and logged);
/// everything else about the computation is pure, so identical stored state
/// always produces identical rows.
#[instrument(skip(products, profiles, terms, product_ids))]
pub async fn compute_preview(
    products: &ProductClient,
    profiles: &ProfileClient,
    user_id: &UserId,
    terms: &PricingTerms,
    product_ids: &[ProductId],
) -> Result<HashMap<ProductId, PreviewRow>, PricingError> {
    let scope: HashSet<ProductId> = product_ids.iter().cloned().collect();
    let chain = load_chain(profiles, user_id, &terms.based_on, &scope).await?;

    let mut rows = HashMap::new();
    for product_id in product_ids {
        let Some(raw_base) = products.base_price(user_id, product_id).await? else {
            warn!(%product_id, "Product not visible, skipping preview row");
            continue;
        };
        rows.insert(product_id.clone(), priced_row(terms, &chain, product_id, raw_base));
    }
    Ok(rows)
}
