//! Application state containing the configuration and service clients

use std::sync::Arc;

use crate::domain::{RecipeProvider, ServiceError, TextDetector};
use crate::infrastructure::config::Config;
use crate::modules::integrations::{GoogleVisionClient, SpoonacularClient, VisionAuth};

/// Application state shared across all handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Text detection for uploaded images
    pub detector: Arc<dyn TextDetector>,
    /// Recipe search and lookup
    pub recipes: Arc<dyn RecipeProvider>,
}

impl AppState {
    /// Create the state with the production clients built from `config`
    pub fn from_config(config: Config) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| ServiceError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        let auth = VisionAuth::from_config(&config)?;
        let detector = GoogleVisionClient::new(http.clone(), config.vision_base_url.clone(), auth);
        let recipes = SpoonacularClient::new(
            http,
            &config.spoonacular_base_url,
            config.spoonacular_api_key.clone(),
        )?;

        Ok(Self::new(config, Arc::new(detector), Arc::new(recipes)))
    }

    /// Create the state from already-built services
    pub fn new(
        config: Config,
        detector: Arc<dyn TextDetector>,
        recipes: Arc<dyn RecipeProvider>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            detector,
            recipes,
        }
    }
}
