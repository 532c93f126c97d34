use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{ProductId, ProfileId, UserId};

/// Wire form of [`BasedOn::Root`]: prices taken straight from the catalog's
/// global wholesale price.
pub const ROOT_MARKER: &str = "globalWholesalePrice";

/// What a profile derives its prices from: the raw catalog price, or another
/// profile's resolved prices.
///
/// Followed transitively these references form a chain that must terminate
/// at [`BasedOn::Root`]. Resolution tolerates chains that don't (cycles,
/// dangling ids) by falling back to the raw base price.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BasedOn {
    Root,
    Profile(ProfileId),
}

impl BasedOn {
    /// Parses the wire form: the root marker, or a profile id.
    pub fn from_ref(s: &str) -> Self {
        if s == ROOT_MARKER {
            BasedOn::Root
        } else {
            BasedOn::Profile(s.to_string())
        }
    }
}

impl Display for BasedOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasedOn::Root => f.write_str(ROOT_MARKER),
            BasedOn::Profile(id) => f.write_str(id),
        }
    }
}

/// How an adjustment magnitude is interpreted: `Fixed` as a dollar amount,
/// `Dynamic` as a percentage of the based-on price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceAdjustMode {
    Fixed,
    Dynamic,
}

/// Direction of an adjustment. Stored magnitudes are non-negative; this is
/// the only source of sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncrementMode {
    Increase,
    Decrease,
}

/// Lifecycle status of a pricing profile.
///
/// `Draft -> Completed` happens only through the publish flow; `Archived` is
/// reachable from either via a plain update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileStatus {
    Draft,
    Completed,
    Archived,
}

impl Display for ProfileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileStatus::Draft => f.write_str("DRAFT"),
            ProfileStatus::Completed => f.write_str("COMPLETED"),
            ProfileStatus::Archived => f.write_str("ARCHIVED"),
        }
    }
}

/// A user-defined pricing profile.
///
/// The profile owns its product selections (`items`): deleting the profile
/// deletes them with it. A product absent from `items` is not priced by this
/// profile; its price passes through from the based-on ancestor unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingProfile {
    pub id: String,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub based_on: BasedOn,
    pub price_adjust_mode: PriceAdjustMode,
    pub increment_mode: IncrementMode,
    pub status: ProfileStatus,
    /// Selected products and their adjustment magnitudes.
    pub items: HashMap<ProductId, Decimal>,
}

/// Payload for creating a new profile. Status always starts at [`ProfileStatus::Draft`].
#[derive(Debug, Clone)]
pub struct ProfileCreate {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub based_on: BasedOn,
    pub price_adjust_mode: PriceAdjustMode,
    pub increment_mode: IncrementMode,
    pub items: Vec<(ProductId, Decimal)>,
}

/// Payload for updating an existing profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub based_on: Option<BasedOn>,
    pub price_adjust_mode: Option<PriceAdjustMode>,
    pub increment_mode: Option<IncrementMode>,
    /// Only [`ProfileStatus::Archived`] is accepted here; the
    /// `Draft -> Completed` flip goes through the publish flow instead.
    pub status: Option<ProfileStatus>,
}

/// One level of a loaded based-on chain: the ancestor's own reference, its
/// modes, and its adjustments filtered to the products a resolution asked
/// about.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainNode {
    pub based_on: BasedOn,
    pub price_adjust_mode: PriceAdjustMode,
    pub increment_mode: IncrementMode,
    pub adjustments: HashMap<ProductId, Decimal>,
}

/// The pricing-relevant slice of a profile: what it is based on, how it
/// adjusts, and its per-product magnitudes.
///
/// Preview works on terms that may not be stored anywhere yet (a form being
/// edited); validation and publish build them from a stored profile.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingTerms {
    pub based_on: BasedOn,
    pub price_adjust_mode: PriceAdjustMode,
    pub increment_mode: IncrementMode,
    pub adjustments: HashMap<ProductId, Decimal>,
}

impl PricingProfile {
    /// The pricing terms currently stored on this profile.
    pub fn terms(&self) -> PricingTerms {
        PricingTerms {
            based_on: self.based_on.clone(),
            price_adjust_mode: self.price_adjust_mode,
            increment_mode: self.increment_mode,
            adjustments: self.items.clone(),
        }
    }

    /// Chain-node view of this profile, restricted to `product_ids`.
    ///
    /// The restriction happens here, inside the owning actor, so a resolution
    /// over a handful of products never ships a large catalog's worth of
    /// adjustments across the channel.
    pub fn chain_node(&self, product_ids: &HashSet<ProductId>) -> ChainNode {
        ChainNode {
            based_on: self.based_on.clone(),
            price_adjust_mode: self.price_adjust_mode,
            increment_mode: self.increment_mode,
            adjustments: self
                .items
                .iter()
                .filter(|(pid, _)| product_ids.contains(*pid))
                .map(|(pid, adj)| (pid.clone(), *adj))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn based_on_round_trips_through_wire_form() {
        assert_eq!(BasedOn::from_ref("globalWholesalePrice"), BasedOn::Root);
        assert_eq!(
            BasedOn::from_ref("profile_7"),
            BasedOn::Profile("profile_7".to_string())
        );
        assert_eq!(BasedOn::Root.to_string(), ROOT_MARKER);
        assert_eq!(BasedOn::Profile("profile_7".into()).to_string(), "profile_7");
    }

    #[test]
    fn chain_node_filters_to_requested_products() {
        let mut items = HashMap::new();
        items.insert("product_1".to_string(), Decimal::new(250, 2));
        items.insert("product_2".to_string(), Decimal::new(100, 2));
        let profile = PricingProfile {
            id: "profile_1".into(),
            user_id: "user_1".into(),
            name: "Summer".into(),
            description: "Summer pricing".into(),
            based_on: BasedOn::Root,
            price_adjust_mode: PriceAdjustMode::Fixed,
            increment_mode: IncrementMode::Increase,
            status: ProfileStatus::Draft,
            items,
        };

        let wanted: HashSet<_> = ["product_1".to_string()].into_iter().collect();
        let node = profile.chain_node(&wanted);
        assert_eq!(node.adjustments.len(), 1);
        assert!(node.adjustments.contains_key("product_1"));
        assert_eq!(node.based_on, BasedOn::Root);
    }
}
