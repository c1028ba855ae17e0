use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::detect::detect_ingredients,
        api::recipes::search_recipes,
        api::recipes::get_recipe,
    ),
    components(
        schemas(
            api::detect::DetectedIngredients,
            api::detect::ImageUpload,
            api::recipes::RecipeSearchRequest,
            api::error::ErrorBody,
        )
    ),
    tags(
        (name = "recipe-relay", description = "Ingredient detection and recipe search relay")
    )
)]
pub struct ApiDoc;
