//! Service trait definitions
//!
//! These traits define the contract for the external collaborators.
//! Implementations live in `modules::integrations`.

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use super::ServiceError;

/// Number of recipes requested from the search API
pub const RECIPE_RESULT_LIMIT: u32 = 10;

/// One block of text found in an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub description: String,
}

/// Parameters of an outbound recipe search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    /// Comma-separated ingredient names
    pub ingredients: String,
    /// Maximum number of recipes to return
    pub number: u32,
}

impl RecipeQuery {
    /// Build a query from the caller's ingredient list, capped at
    /// [`RECIPE_RESULT_LIMIT`] results
    pub fn from_ingredients(ingredients: &[String]) -> Self {
        Self {
            ingredients: ingredients.join(","),
            number: RECIPE_RESULT_LIMIT,
        }
    }
}

/// Text detection on a stored image
#[async_trait]
pub trait TextDetector: Send + Sync {
    /// Detect text blocks in the image at `image_path`.
    ///
    /// The first block, if any, holds the full text of the image.
    async fn detect_text(&self, image_path: &Path) -> Result<Vec<TextBlock>, ServiceError>;
}

/// Recipe search and lookup
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Find recipes that use the given ingredients. The body is returned as-is.
    async fn find_by_ingredients(&self, query: &RecipeQuery) -> Result<Value, ServiceError>;

    /// Fetch full information for a single recipe. The body is returned as-is.
    async fn recipe_information(&self, id: &str) -> Result<Value, ServiceError>;
}
