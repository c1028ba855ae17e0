use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";
pub const DEFAULT_VISION_BASE_URL: &str = "https://vision.googleapis.com";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Process-wide settings, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub spoonacular_api_key: String,
    pub spoonacular_base_url: String,
    /// Path to a Google service-account JSON key
    pub google_credentials_path: Option<PathBuf>,
    /// Plain API key for Vision, used when no service account is configured
    pub google_vision_api_key: Option<String>,
    pub vision_base_url: String,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub http_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let spoonacular_api_key = non_empty("SPOONACULAR_API_KEY").unwrap_or_else(|| {
            tracing::warn!("SPOONACULAR_API_KEY is not set, recipe requests will be rejected");
            String::new()
        });

        Self {
            port: non_empty("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            spoonacular_api_key,
            spoonacular_base_url: non_empty("SPOONACULAR_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SPOONACULAR_BASE_URL.to_string()),
            google_credentials_path: non_empty("GOOGLE_APPLICATION_CREDENTIALS").map(PathBuf::from),
            google_vision_api_key: non_empty("GOOGLE_VISION_API_KEY"),
            vision_base_url: non_empty("VISION_BASE_URL")
                .unwrap_or_else(|| DEFAULT_VISION_BASE_URL.to_string()),
            upload_dir: non_empty("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            max_upload_bytes: non_empty("MAX_UPLOAD_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            http_timeout: Duration::from_secs(
                non_empty("HTTP_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            ),
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.port, 4000);
        assert_eq!(config.spoonacular_api_key, "");
        assert_eq!(config.spoonacular_base_url, DEFAULT_SPOONACULAR_BASE_URL);
        assert_eq!(config.vision_base_url, DEFAULT_VISION_BASE_URL);
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(config.google_credentials_path.is_none());
        assert!(config.google_vision_api_key.is_none());
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("SPOONACULAR_API_KEY", "secret"),
            ("GOOGLE_APPLICATION_CREDENTIALS", "/etc/keys/vision.json"),
            ("UPLOAD_DIR", "/tmp/relay"),
            ("HTTP_TIMEOUT_SECS", "5"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.spoonacular_api_key, "secret");
        assert_eq!(
            config.google_credentials_path,
            Some(PathBuf::from("/etc/keys/vision.json"))
        );
        assert_eq!(config.upload_dir, PathBuf::from("/tmp/relay"));
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let config = config_from(&[("PORT", "not-a-port"), ("MAX_UPLOAD_BYTES", "-1")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config_from(&[("GOOGLE_VISION_API_KEY", "  "), ("PORT", "")]);
        assert!(config.google_vision_api_key.is_none());
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
