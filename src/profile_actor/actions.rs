//! Custom actions for the PricingProfile actor.
//!
//! Every action carries the requesting user's id; a profile owned by someone
//! else answers `None`, indistinguishable from a profile that does not exist.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::model::{ChainNode, ProductId, ProfileStatus, UserId};

/// Custom actions for PricingProfile entities.
#[derive(Debug, Clone)]
pub enum ProfileAction {
    /// Reads this profile as one level of a based-on chain, with its
    /// adjustments filtered down to `product_ids` before they leave the
    /// actor.
    ChainNode {
        user_id: UserId,
        product_ids: HashSet<ProductId>,
    },
    /// Inserts or replaces one product selection.
    UpsertItem {
        user_id: UserId,
        product_id: ProductId,
        adjustment: Decimal,
    },
    /// Removes one product selection.
    RemoveItem {
        user_id: UserId,
        product_id: ProductId,
    },
    /// Flips the status only if it still equals `expected` when the actor
    /// processes the request. This is the conditional write behind publish.
    SetStatus {
        user_id: UserId,
        expected: ProfileStatus,
        status: ProfileStatus,
    },
}

/// Results from ProfileActions - variants match 1:1 with ProfileAction.
/// The outer `Option` is `None` when the profile is not visible to the
/// requesting user.
#[derive(Debug, Clone)]
pub enum ProfileActionResult {
    ChainNode(Option<ChainNode>),
    UpsertItem(Option<ItemWrite>),
    /// Inner bool: whether the selection existed.
    RemoveItem(Option<bool>),
    SetStatus(Option<StatusFlip>),
}

/// What an item upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemWrite {
    Inserted,
    Replaced,
}

/// Outcome of a conditional status flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFlip {
    Updated,
    /// The profile was no longer in the expected status; nothing changed.
    Conflict { current: ProfileStatus },
}
