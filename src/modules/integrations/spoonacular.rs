//! Spoonacular recipe API
//!
//! Responses are passed through untouched as JSON values.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::domain::{RecipeProvider, RecipeQuery, ServiceError};

pub struct SpoonacularClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl SpoonacularClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: String) -> Result<Self, ServiceError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ServiceError::Transport(format!("Invalid Spoonacular base URL '{}': {}", base_url, e))
        })?;
        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// `base_url` with `segments` appended as individually encoded path segments.
    ///
    /// Empty and dot-only segments are rejected: URL normalization would
    /// drop or collapse them even when percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ServiceError> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || s.chars().all(|c| c == '.'))
        {
            return Err(ServiceError::InvalidRequest(format!(
                "'{}' is not a valid path segment",
                bad
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ServiceError::Transport("Base URL cannot hold a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, url: Url, params: &[(&str, String)]) -> Result<Value, ServiceError> {
        tracing::debug!("Spoonacular GET {}", url.path());

        let resp = self
            .http
            .get(url)
            .query(params)
            .query(&[("apiKey", self.api_key.as_str())])
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

        resp.json::<Value>()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    async fn find_by_ingredients(&self, query: &RecipeQuery) -> Result<Value, ServiceError> {
        let url = self.endpoint(&["recipes", "findByIngredients"])?;
        self.get_json(
            url,
            &[
                ("ingredients", query.ingredients.clone()),
                ("number", query.number.to_string()),
            ],
        )
        .await
    }

    async fn recipe_information(&self, id: &str) -> Result<Value, ServiceError> {
        let url = self.endpoint(&["recipes", id, "information"])?;
        self.get_json(url, &[]).await
    }
}
