//! Google Cloud Vision text detection
//!
//! Sends the image inline (base64) to `images:annotate` with the
//! `TEXT_DETECTION` feature and returns the text annotations.

use std::path::Path;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::json;

use super::google_auth::{ServiceAccountKey, VISION_SCOPE};
use crate::domain::{ServiceError, TextBlock, TextDetector};
use crate::infrastructure::config::Config;

/// How requests to Vision are authorized
#[derive(Debug, Clone)]
pub enum VisionAuth {
    ServiceAccount(ServiceAccountKey),
    ApiKey(String),
    /// Nothing configured; every detection fails with a credentials error
    Missing,
}

impl VisionAuth {
    /// Resolve auth from the config. A service account wins over an API key.
    pub fn from_config(config: &Config) -> Result<Self, ServiceError> {
        if let Some(path) = &config.google_credentials_path {
            return ServiceAccountKey::from_file(path).map(VisionAuth::ServiceAccount);
        }
        if let Some(key) = &config.google_vision_api_key {
            return Ok(VisionAuth::ApiKey(key.clone()));
        }
        tracing::warn!(
            "Neither GOOGLE_APPLICATION_CREDENTIALS nor GOOGLE_VISION_API_KEY is set, text detection is disabled"
        );
        Ok(VisionAuth::Missing)
    }
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    text_annotations: Vec<EntityAnnotation>,
    error: Option<RpcStatus>,
}

#[derive(Debug, Deserialize)]
struct EntityAnnotation {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct RpcStatus {
    #[serde(default)]
    message: String,
}

pub struct GoogleVisionClient {
    http: reqwest::Client,
    base_url: String,
    auth: VisionAuth,
}

impl GoogleVisionClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, auth: VisionAuth) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
        }
    }

    fn annotate_url(&self) -> String {
        format!("{}/v1/images:annotate", self.base_url)
    }
}

#[async_trait]
impl TextDetector for GoogleVisionClient {
    async fn detect_text(&self, image_path: &Path) -> Result<Vec<TextBlock>, ServiceError> {
        let image = tokio::fs::read(image_path).await?;

        let body = json!({
            "requests": [{
                "image": { "content": BASE64.encode(&image) },
                "features": [{ "type": "TEXT_DETECTION" }]
            }]
        });

        let request = match &self.auth {
            VisionAuth::ServiceAccount(key) => {
                let token = key.fetch_access_token(&self.http, VISION_SCOPE).await?;
                self.http.post(self.annotate_url()).bearer_auth(token)
            }
            VisionAuth::ApiKey(key) => self
                .http
                .post(self.annotate_url())
                .query(&[("key", key.as_str())]),
            VisionAuth::Missing => {
                return Err(ServiceError::Credentials(
                    "No Google Vision credentials configured".to_string(),
                ));
            }
        };

        let resp = request
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AnnotateResponse = resp
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;

        let Some(first) = parsed.responses.into_iter().next() else {
            return Ok(Vec::new());
        };

        if let Some(error) = first.error {
            return Err(ServiceError::Remote(error.message));
        }

        tracing::debug!("Vision returned {} text blocks", first.text_annotations.len());

        Ok(first
            .text_annotations
            .into_iter()
            .map(|a| TextBlock {
                description: a.description,
            })
            .collect())
    }
}
