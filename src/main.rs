//! Demo binary: drives the pricing system end to end.
//!
//! Creates a user and two products, sets up a chained pair of pricing
//! profiles, previews the resolved prices, and publishes.

use catalog_pricing::model::{
    BasedOn, IncrementMode, PriceAdjustMode, ProductCreate, UserCreate,
};
use catalog_pricing::pricing::{DraftOutcome, DraftProfileInput, PublishOutcome};
use catalog_pricing::runtime::{setup_tracing, PricingSystem};
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting catalog-pricing demo");

    let system = PricingSystem::new();

    let user_id = system
        .user_client
        .create_user(UserCreate {
            email: "demo@example.com".to_string(),
            name: "Demo User".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(user_id = %user_id, "User created");

    let span = tracing::info_span!("catalog_setup");
    let (wine_id, riesling_id) = async {
        let wine_id = system
            .product_client
            .create_product(ProductCreate {
                user_id: user_id.clone(),
                title: "High Garden Pinot Noir 2021".to_string(),
                sku: "HGVPIN216".to_string(),
                brand: "High Garden".to_string(),
                global_wholesale_price: Decimal::new(27999, 2), // 279.99
            })
            .await
            .map_err(|e| e.to_string())?;
        let riesling_id = system
            .product_client
            .create_product(ProductCreate {
                user_id: user_id.clone(),
                title: "Koyama Riesling 2018".to_string(),
                sku: "KOYRIE18".to_string(),
                brand: "Koyama Wines".to_string(),
                global_wholesale_price: Decimal::new(21500, 2), // 215.00
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((wine_id, riesling_id))
    }
    .instrument(span)
    .await?;
    info!(%wine_id, %riesling_id, "Products created");

    // A wholesale uplift profile straight off the global price.
    let base_outcome = system
        .pricing
        .create_draft(
            &user_id,
            DraftProfileInput {
                name: "Wholesale uplift".to_string(),
                description: "Fixed $5 increase across the range".to_string(),
                based_on: BasedOn::Root,
                price_adjust_mode: PriceAdjustMode::Fixed,
                increment_mode: IncrementMode::Increase,
                items: vec![
                    (wine_id.clone(), "5".to_string()),
                    (riesling_id.clone(), "5".to_string()),
                ],
            },
        )
        .await
        .map_err(|e| e.to_string())?;
    let uplift_id = match base_outcome {
        DraftOutcome::Created { profile_id } => profile_id,
        DraftOutcome::Rejected { message, .. } => return Err(message),
    };
    info!(%uplift_id, "Uplift profile drafted");

    // A seasonal discount chained on top of the uplift.
    let season_outcome = system
        .pricing
        .create_draft(
            &user_id,
            DraftProfileInput {
                name: "Summer sale".to_string(),
                description: "10% off the uplifted price".to_string(),
                based_on: BasedOn::Profile(uplift_id.clone()),
                price_adjust_mode: PriceAdjustMode::Dynamic,
                increment_mode: IncrementMode::Decrease,
                items: vec![(wine_id.clone(), "10".to_string())],
            },
        )
        .await
        .map_err(|e| e.to_string())?;
    let sale_id = match season_outcome {
        DraftOutcome::Created { profile_id } => profile_id,
        DraftOutcome::Rejected { message, .. } => return Err(message),
    };
    info!(%sale_id, "Sale profile drafted");

    // Preview the sale profile's stored terms.
    let rows = system
        .pricing
        .preview_profile(&user_id, &sale_id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or("sale profile vanished")?;
    for (product_id, row) in &rows {
        info!(%product_id, base = %row.base, delta = %row.delta, new_price = %row.new_price, "Preview row");
    }

    let span = tracing::info_span!("publishing");
    let publish_outcome = async {
        system.pricing.publish(&user_id, &sale_id).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;
    match publish_outcome {
        PublishOutcome::Published => info!(%sale_id, "Profile published"),
        other => error!(outcome = ?other, "Publish did not go through"),
    }

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
