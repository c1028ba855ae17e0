use std::path::Path;

use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::error::{ApiError, ErrorBody};
use crate::domain::ingredients::extract_ingredients;
use crate::infrastructure::AppState;
use crate::infrastructure::upload::TempUpload;

/// Name of the multipart field carrying the image
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetectedIngredients {
    pub detected_ingredients: Vec<String>,
}

/// Multipart form accepted by the detection endpoint
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUpload {
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

fn upload_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::UploadTooLarge
    } else {
        ApiError::InvalidUpload(e.body_text())
    }
}

/// Stream the `image` field to a temp file. Other fields are skipped.
async fn receive_image(
    multipart: &mut Multipart,
    upload_dir: &Path,
) -> Result<Option<TempUpload>, ApiError> {
    while let Some(mut field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let mut upload = TempUpload::create(upload_dir)
            .await
            .map_err(ApiError::processing)?;
        while let Some(chunk) = field.chunk().await.map_err(upload_error)? {
            upload
                .write_chunk(&chunk)
                .await
                .map_err(ApiError::processing)?;
        }
        upload.finish().await.map_err(ApiError::processing)?;

        tracing::debug!("Stored upload at {:?}", upload.path());
        return Ok(Some(upload));
    }

    Ok(None)
}

#[utoipa::path(
    post,
    path = "/detect-ingredients",
    request_body(content = ImageUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Ingredient lines found in the image", body = DetectedIngredients),
        (status = 400, description = "No image, or nothing detected", body = ErrorBody),
        (status = 500, description = "Detection failed", body = ErrorBody)
    )
)]
pub async fn detect_ingredients(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<DetectedIngredients>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!("Not a multipart request: {}", e);
        ApiError::MissingInput
    })?;

    let upload = receive_image(&mut multipart, &state.config.upload_dir)
        .await?
        .ok_or(ApiError::MissingInput)?;

    let blocks = state
        .detector
        .detect_text(upload.path())
        .await
        .map_err(ApiError::processing)?;

    // The image is not needed past this point
    drop(upload);

    let detected_ingredients = extract_ingredients(&blocks).ok_or(ApiError::NoDetection)?;
    tracing::info!("Detected {} ingredient lines", detected_ingredients.len());

    Ok(Json(DetectedIngredients {
        detected_ingredients,
    }))
}
