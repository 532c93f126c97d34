//! The chain loader: turns a based-on reference into a lookup table of
//! ancestor profiles.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::clients::ProfileClient;
use crate::model::{BasedOn, ChainNode, ProductId, ProfileId, UserId};
use crate::profile_actor::ProfileError;

/// Deepest based-on chain resolution will follow. Anything past this level
/// falls back to the raw base price.
pub const MAX_CHAIN_DEPTH: usize = 10;

/// Walks the ancestor chain starting at `root_ref`, loading each profile's
/// chain node scoped to `user_id` and filtered to `product_ids`.
///
/// The walk stops early, without error, when it reaches the root marker,
/// a profile the user cannot see, a reference already visited in this walk,
/// or the depth bound. Levels left unloaded simply resolve to the raw base
/// price later. Only actor transport failures are `Err`.
#[instrument(skip(profiles, product_ids))]
pub async fn load_chain(
    profiles: &ProfileClient,
    user_id: &UserId,
    root_ref: &BasedOn,
    product_ids: &HashSet<ProductId>,
) -> Result<HashMap<ProfileId, ChainNode>, ProfileError> {
    let mut chain = HashMap::new();
    let mut visited: HashSet<ProfileId> = HashSet::new();
    let mut current = root_ref.clone();
    let mut depth = 0usize;

    while let BasedOn::Profile(id) = current {
        if depth > MAX_CHAIN_DEPTH {
            debug!(%id, depth, "Depth bound hit, stopping walk");
            break;
        }
        if !visited.insert(id.clone()) {
            debug!(%id, "Reference already visited, stopping walk");
            break;
        }
        let Some(node) = profiles.chain_node(user_id, &id, product_ids.clone()).await? else {
            debug!(%id, "Profile not visible, chain ends here");
            break;
        };
        current = node.based_on.clone();
        chain.insert(id, node);
        depth += 1;
    }

    debug!(levels = chain.len(), "Chain loaded");
    Ok(chain)
}
