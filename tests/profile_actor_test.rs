use std::collections::HashSet;

use catalog_pricing::clients::{ProductClient, ProfileClient};
use catalog_pricing::framework::mock::MockClient;
use catalog_pricing::model::{
    BasedOn, IncrementMode, PriceAdjustMode, PricingProfile, Product, ProfileCreate,
    ProfileStatus,
};
use catalog_pricing::profile_actor::{ProfileError, StatusFlip};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn owned_product(id: &str, user: &str) -> Product {
    Product::new(id, user, "Pinot Noir", "HGVPIN216", "High Garden", dec("50.00"))
}

fn create_params(user: &str, items: Vec<(String, Decimal)>) -> ProfileCreate {
    ProfileCreate {
        user_id: user.to_string(),
        name: "Uplift".to_string(),
        description: "Fixed increase".to_string(),
        based_on: BasedOn::Root,
        price_adjust_mode: PriceAdjustMode::Fixed,
        increment_mode: IncrementMode::Increase,
        items,
    }
}

/// Real PricingProfile actor with a mocked catalog: profile creation checks
/// every selection against the products the owner can see.
#[tokio::test]
async fn test_profile_create_verifies_selections_against_catalog() {
    let mut product_mock = MockClient::<Product>::new();
    // on_create looks each selected product up.
    product_mock
        .expect_get("product_1".to_string())
        .return_ok(Some(owned_product("product_1", "user_1")));

    let product_client = ProductClient::new(product_mock.client());

    let (profile_actor, profile_client) = catalog_pricing::profile_actor::new();
    let actor_handle = tokio::spawn(profile_actor.run(product_client.clone()));

    let profile_id = profile_client
        .create_profile(create_params(
            "user_1",
            vec![("product_1".to_string(), dec("5"))],
        ))
        .await
        .expect("create should pass the catalog check");

    let profile = profile_client
        .find_for_user(&"user_1".to_string(), &profile_id)
        .await
        .unwrap()
        .expect("profile stored");
    assert_eq!(profile.status, ProfileStatus::Draft);
    assert_eq!(profile.items["product_1"], dec("5"));

    product_mock.verify();

    drop(profile_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_profile_create_rejects_unknown_product() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock
        .expect_get("product_missing".to_string())
        .return_ok(None);

    let product_client = ProductClient::new(product_mock.client());

    let (profile_actor, profile_client) = catalog_pricing::profile_actor::new();
    let actor_handle = tokio::spawn(profile_actor.run(product_client.clone()));

    let err = profile_client
        .create_profile(create_params(
            "user_1",
            vec![("product_missing".to_string(), dec("5"))],
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, ProfileError::ValidationError(_)), "got: {err:?}");

    product_mock.verify();

    drop(profile_client);
    actor_handle.await.unwrap();
}

/// A selection owned by a different user fails the same way as a missing
/// one: the catalog never reveals foreign products.
#[tokio::test]
async fn test_profile_create_rejects_foreign_product() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock
        .expect_get("product_1".to_string())
        .return_ok(Some(owned_product("product_1", "someone_else")));

    let product_client = ProductClient::new(product_mock.client());

    let (profile_actor, profile_client) = catalog_pricing::profile_actor::new();
    let actor_handle = tokio::spawn(profile_actor.run(product_client.clone()));

    let err = profile_client
        .create_profile(create_params(
            "user_1",
            vec![("product_1".to_string(), dec("5"))],
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, ProfileError::ValidationError(_)));

    product_mock.verify();

    drop(profile_client);
    actor_handle.await.unwrap();
}

/// Chain-node reads scope both to the user and to the requested products,
/// and the conditional status flip only fires from the expected status.
#[tokio::test]
async fn test_chain_node_scoping_and_conditional_flip() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock
        .expect_get("product_1".to_string())
        .return_ok(Some(owned_product("product_1", "user_1")));
    product_mock
        .expect_get("product_2".to_string())
        .return_ok(Some(owned_product("product_2", "user_1")));

    let product_client = ProductClient::new(product_mock.client());

    let (profile_actor, profile_client) = catalog_pricing::profile_actor::new();
    let actor_handle = tokio::spawn(profile_actor.run(product_client.clone()));

    let profile_id = profile_client
        .create_profile(create_params(
            "user_1",
            vec![
                ("product_1".to_string(), dec("5")),
                ("product_2".to_string(), dec("9")),
            ],
        ))
        .await
        .unwrap();

    // Only product_1 was asked about, so only its adjustment comes back.
    let scope: HashSet<_> = ["product_1".to_string()].into_iter().collect();
    let node = profile_client
        .chain_node(&"user_1".to_string(), &profile_id, scope.clone())
        .await
        .unwrap()
        .expect("owner sees the node");
    assert_eq!(node.adjustments.len(), 1);
    assert_eq!(node.adjustments["product_1"], dec("5"));

    // A different user sees nothing at all.
    let foreign = profile_client
        .chain_node(&"user_2".to_string(), &profile_id, scope)
        .await
        .unwrap();
    assert_eq!(foreign, None);

    // Conditional flip: wrong expectation reports the current status and
    // changes nothing.
    let conflict = profile_client
        .set_status(
            &"user_1".to_string(),
            &profile_id,
            ProfileStatus::Completed,
            ProfileStatus::Archived,
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        conflict,
        StatusFlip::Conflict {
            current: ProfileStatus::Draft
        }
    );

    let flip = profile_client
        .set_status(
            &"user_1".to_string(),
            &profile_id,
            ProfileStatus::Draft,
            ProfileStatus::Completed,
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(flip, StatusFlip::Updated);

    let profile = profile_client
        .find_for_user(&"user_1".to_string(), &profile_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(profile.status, ProfileStatus::Completed);

    product_mock.verify();

    drop(profile_client);
    actor_handle.await.unwrap();
}

/// MockClient over the profile type lets pricing tests script chain shapes
/// without a running actor.
#[tokio::test]
async fn test_mocked_profile_chain_node() {
    let mut profile_mock = MockClient::<PricingProfile>::new();
    profile_mock
        .expect_action("profile_1".to_string())
        .return_ok(catalog_pricing::profile_actor::ProfileActionResult::ChainNode(None));

    let profile_client = ProfileClient::new(profile_mock.client());
    let node = profile_client
        .chain_node(
            &"user_1".to_string(),
            &"profile_1".to_string(),
            HashSet::new(),
        )
        .await
        .unwrap();
    assert_eq!(node, None);

    profile_mock.verify();
}
