pub mod detect;
pub mod error;
pub mod health;
pub mod recipes;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Image upload
        .route(
            "/detect-ingredients",
            post(detect::detect_ingredients).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Recipes
        .route("/recipes", post(recipes::search_recipes))
        .route("/recipe/:id", get(recipes::get_recipe))
        .with_state(state)
}
