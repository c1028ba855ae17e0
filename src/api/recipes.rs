use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::api::error::{ApiError, ErrorBody};
use crate::domain::RecipeQuery;
use crate::infrastructure::AppState;

const SEARCH_FAILED: &str = "Failed to fetch recipes";
const DETAILS_FAILED: &str = "Failed to fetch recipe details";

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecipeSearchRequest {
    pub ingredients: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/recipes",
    request_body = RecipeSearchRequest,
    responses(
        (status = 200, description = "Recipe search results, as returned by the recipe API"),
        (status = 500, description = "Recipe API call failed", body = ErrorBody)
    )
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Json(payload): Json<RecipeSearchRequest>,
) -> Result<Json<Value>, ApiError> {
    let query = RecipeQuery::from_ingredients(&payload.ingredients);
    tracing::info!("Searching recipes for '{}'", query.ingredients);

    state
        .recipes
        .find_by_ingredients(&query)
        .await
        .map(Json)
        .map_err(|e| ApiError::fetch(SEARCH_FAILED, e))
}

#[utoipa::path(
    get,
    path = "/recipe/{id}",
    params(
        ("id" = String, Path, description = "Recipe identifier")
    ),
    responses(
        (status = 200, description = "Recipe information, as returned by the recipe API"),
        (status = 500, description = "Recipe API call failed", body = ErrorBody)
    )
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!("Fetching recipe {}", id);

    state
        .recipes
        .recipe_information(&id)
        .await
        .map(Json)
        .map_err(|e| ApiError::fetch(DETAILS_FAILED, e))
}
