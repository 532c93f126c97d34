//! Mutation entry points for the pricing surface: preview, draft creation,
//! and publishing.
//!
//! Expected failures (bad input, negative prices, not-found, lost publish
//! races) are values in the returned outcome enums; `Err` is reserved for
//! actor transport trouble.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{info, instrument};

use crate::clients::{ProductClient, ProfileClient};
use crate::model::{
    money_or_zero, parse_money, BasedOn, IncrementMode, PriceAdjustMode, PricingTerms, ProductId,
    ProfileCreate, ProfileId, ProfileStatus, UserId,
};
use crate::pricing::preview::{compute_preview, PreviewRow};
use crate::pricing::validate::{validate_no_negatives, PriceValidation};
use crate::product_actor::ProductError;
use crate::profile_actor::{ProfileError, StatusFlip};

/// Hard failures underneath the pricing entry points.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// A rejected input field and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// What a draft-creation request came back with.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftOutcome {
    Created {
        profile_id: ProfileId,
    },
    Rejected {
        message: String,
        field_errors: Vec<FieldError>,
    },
}

/// What a publish request came back with.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishOutcome {
    Published,
    /// No such profile for this user. Foreign profiles land here too.
    NotFound,
    /// The profile was not (or no longer) in DRAFT; nothing changed.
    NotDraft { status: ProfileStatus },
    /// Publishing would store a negative price for these products.
    Blocked { offending_titles: Vec<String> },
}

/// Preview input in wire form, as the profile editor sends it while the
/// user types.
///
/// Adjustments that don't parse are treated as zero here; a preview must
/// never error on a half-typed number, and it must never propagate one into
/// a displayed price either.
#[derive(Debug, Clone)]
pub struct PreviewInput {
    pub based_on: BasedOn,
    pub price_adjust_mode: PriceAdjustMode,
    pub increment_mode: IncrementMode,
    pub product_ids: Vec<ProductId>,
    pub adjustments: HashMap<ProductId, String>,
}

impl PreviewInput {
    fn terms(&self) -> PricingTerms {
        PricingTerms {
            based_on: self.based_on.clone(),
            price_adjust_mode: self.price_adjust_mode,
            increment_mode: self.increment_mode,
            adjustments: self
                .adjustments
                .iter()
                .map(|(id, raw)| (id.clone(), money_or_zero(raw)))
                .collect(),
        }
    }
}

/// Input for creating a draft profile. Adjustments arrive in wire form and
/// are validated here, before anything is persisted.
#[derive(Debug, Clone)]
pub struct DraftProfileInput {
    pub name: String,
    pub description: String,
    pub based_on: BasedOn,
    pub price_adjust_mode: PriceAdjustMode,
    pub increment_mode: IncrementMode,
    /// Selected products with their wire adjustment strings ("0" for a
    /// product that is selected but not yet priced).
    pub items: Vec<(ProductId, String)>,
}

/// The pricing surface the surrounding application calls into.
///
/// Stateless between calls: every operation re-reads the catalog and profile
/// actors and recomputes from scratch.
#[derive(Clone)]
pub struct PricingService {
    products: ProductClient,
    profiles: ProfileClient,
}

impl PricingService {
    pub fn new(products: ProductClient, profiles: ProfileClient) -> Self {
        Self { products, profiles }
    }

    /// Preview rows for a profile being edited, which may not be stored
    /// anywhere yet.
    #[instrument(skip(self, input))]
    pub async fn preview(
        &self,
        user_id: &UserId,
        input: &PreviewInput,
    ) -> Result<HashMap<ProductId, PreviewRow>, PricingError> {
        compute_preview(
            &self.products,
            &self.profiles,
            user_id,
            &input.terms(),
            &input.product_ids,
        )
        .await
    }

    /// Preview rows for a stored profile's current terms, over its own
    /// selections. `None` when the profile is not visible to this user.
    #[instrument(skip(self))]
    pub async fn preview_profile(
        &self,
        user_id: &UserId,
        profile_id: &ProfileId,
    ) -> Result<Option<HashMap<ProductId, PreviewRow>>, PricingError> {
        let Some(profile) = self.profiles.find_for_user(user_id, profile_id).await? else {
            return Ok(None);
        };
        let product_ids: Vec<ProductId> = profile.items.keys().cloned().collect();
        let rows = compute_preview(
            &self.products,
            &self.profiles,
            user_id,
            &profile.terms(),
            &product_ids,
        )
        .await?;
        Ok(Some(rows))
    }

    /// Validates and creates a draft profile.
    ///
    /// Field problems and negative resolved prices reject the input before
    /// any row is persisted.
    #[instrument(skip(self, input))]
    pub async fn create_draft(
        &self,
        user_id: &UserId,
        input: DraftProfileInput,
    ) -> Result<DraftOutcome, PricingError> {
        let mut field_errors = Vec::new();

        if input.name.trim().chars().count() < 2 {
            field_errors.push(FieldError::new("name", "must be at least 2 characters"));
        }
        if input.description.trim().is_empty() {
            field_errors.push(FieldError::new("description", "must not be empty"));
        }

        let mut items = Vec::with_capacity(input.items.len());
        for (product_id, raw) in &input.items {
            match parse_money(raw) {
                Ok(adjustment) => items.push((product_id.clone(), adjustment)),
                Err(e) => field_errors.push(FieldError::new(
                    format!("adjustments.{product_id}"),
                    e.to_string(),
                )),
            }
        }
        for (product_id, _) in &items {
            if self
                .products
                .find_for_user(user_id, product_id)
                .await?
                .is_none()
            {
                field_errors.push(FieldError::new(
                    "productIds",
                    format!("unknown product: {product_id}"),
                ));
            }
        }

        if !field_errors.is_empty() {
            return Ok(DraftOutcome::Rejected {
                message: "Please fix the highlighted fields.".to_string(),
                field_errors,
            });
        }

        // First negative-price check: on the incoming terms, before any
        // row exists.
        let terms = PricingTerms {
            based_on: input.based_on.clone(),
            price_adjust_mode: input.price_adjust_mode,
            increment_mode: input.increment_mode,
            adjustments: items.iter().cloned().collect(),
        };
        let product_ids: Vec<ProductId> = items.iter().map(|(id, _)| id.clone()).collect();
        if let PriceValidation::Invalid { offending_titles } = validate_no_negatives(
            &self.products,
            &self.profiles,
            user_id,
            &terms,
            &product_ids,
        )
        .await?
        {
            return Ok(DraftOutcome::Rejected {
                message: format!(
                    "New price would be negative for: {}",
                    offending_titles.join(", ")
                ),
                field_errors: Vec::new(),
            });
        }

        let create = ProfileCreate {
            user_id: user_id.clone(),
            name: input.name,
            description: input.description,
            based_on: input.based_on,
            price_adjust_mode: input.price_adjust_mode,
            increment_mode: input.increment_mode,
            items,
        };
        match self.profiles.create_profile(create).await {
            Ok(profile_id) => {
                info!(%profile_id, "Draft profile created");
                Ok(DraftOutcome::Created { profile_id })
            }
            // The entity re-checks its own invariants on create; a rejection
            // there is still the caller's input problem, not a transport one.
            Err(ProfileError::ValidationError(message)) => {
                Ok(DraftOutcome::Rejected {
                    message,
                    field_errors: Vec::new(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Publishes a draft profile: re-validates against current stored state,
    /// then conditionally flips DRAFT to COMPLETED.
    #[instrument(skip(self))]
    pub async fn publish(
        &self,
        user_id: &UserId,
        profile_id: &ProfileId,
    ) -> Result<PublishOutcome, PricingError> {
        let Some(profile) = self.profiles.find_for_user(user_id, profile_id).await? else {
            return Ok(PublishOutcome::NotFound);
        };
        if profile.status != ProfileStatus::Draft {
            return Ok(PublishOutcome::NotDraft {
                status: profile.status,
            });
        }

        // Second negative-price check: stored base prices or ancestor
        // profiles may have changed since the draft was created.
        let product_ids: Vec<ProductId> = profile.items.keys().cloned().collect();
        if let PriceValidation::Invalid { offending_titles } = validate_no_negatives(
            &self.products,
            &self.profiles,
            user_id,
            &profile.terms(),
            &product_ids,
        )
        .await?
        {
            return Ok(PublishOutcome::Blocked { offending_titles });
        }

        match self
            .profiles
            .set_status(
                user_id,
                profile_id,
                ProfileStatus::Draft,
                ProfileStatus::Completed,
            )
            .await?
        {
            Some(StatusFlip::Updated) => {
                info!(%profile_id, "Profile published");
                Ok(PublishOutcome::Published)
            }
            // Lost the race to a concurrent status write.
            Some(StatusFlip::Conflict { current }) => {
                Ok(PublishOutcome::NotDraft { status: current })
            }
            None => Ok(PublishOutcome::NotFound),
        }
    }
}
