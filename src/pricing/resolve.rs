//! The recursive based-on price resolver.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::model::{BasedOn, ChainNode, ProductId, ProfileId};
use crate::pricing::adjustment::apply_adjustment;
use crate::pricing::chain::MAX_CHAIN_DEPTH;

/// Resolves the effective based-on price of one product through a loaded
/// chain.
///
/// - `BasedOn::Root` returns `raw_base` unchanged.
/// - Depth past [`MAX_CHAIN_DEPTH`], a reference already visited in this
///   resolution, or a node the loader could not reach all return `raw_base`:
///   the same fallback, never an error, never a loop.
/// - Otherwise the node's own `based_on` resolves first; the node then
///   applies its adjustment for this product, or passes the ancestor price
///   through untouched when the product is not selected in it.
///
/// The visited set moves by value through the recursion, so one product's
/// resolution can never inherit another's visitation state.
pub fn resolve_based_on_price(
    based_on: &BasedOn,
    product_id: &ProductId,
    raw_base: Decimal,
    chain: &HashMap<ProfileId, ChainNode>,
    depth: usize,
    mut visited: HashSet<ProfileId>,
) -> Decimal {
    let BasedOn::Profile(id) = based_on else {
        return raw_base;
    };
    if depth > MAX_CHAIN_DEPTH || visited.contains(id) {
        return raw_base;
    }
    visited.insert(id.clone());

    let Some(node) = chain.get(id) else {
        return raw_base;
    };
    let ancestor_price =
        resolve_based_on_price(&node.based_on, product_id, raw_base, chain, depth + 1, visited);

    match node.adjustments.get(product_id) {
        Some(adjustment) => {
            apply_adjustment(
                ancestor_price,
                *adjustment,
                node.price_adjust_mode,
                node.increment_mode,
            )
            .new_price
        }
        // Unselected products fall through to the ancestor price.
        None => ancestor_price,
    }
}
