//! Google service-account authentication
//!
//! Exchanges a signed JWT assertion for a short-lived OAuth access token
//! (the "two-legged" server-to-server flow).

use std::path::Path;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::domain::ServiceError;

pub const VISION_SCOPE: &str = "https://www.googleapis.com/auth/cloud-vision";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// The fields of a service-account key file that the token flow needs
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl ServiceAccountKey {
    /// Load and validate a key file. The private key is parsed up front so a
    /// broken file is reported at startup rather than on the first request.
    pub fn from_file(path: &Path) -> Result<Self, ServiceError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ServiceError::Credentials(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let key: ServiceAccountKey = serde_json::from_str(&raw).map_err(|e| {
            ServiceError::Credentials(format!("Invalid key file {}: {}", path.display(), e))
        })?;
        key.encoding_key()?;
        Ok(key)
    }

    fn encoding_key(&self) -> Result<EncodingKey, ServiceError> {
        EncodingKey::from_rsa_pem(self.private_key.as_bytes())
            .map_err(|e| ServiceError::Credentials(format!("Invalid private key: {}", e)))
    }

    /// Sign the JWT assertion sent to the token endpoint
    pub fn signed_assertion(&self, scope: &str) -> Result<String, ServiceError> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope,
            aud: &self.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.private_key_id.clone();

        encode(&header, &claims, &self.encoding_key()?)
            .map_err(|e| ServiceError::Credentials(format!("Failed to sign assertion: {}", e)))
    }

    /// Obtain an access token for `scope`
    pub async fn fetch_access_token(
        &self,
        client: &reqwest::Client,
        scope: &str,
    ) -> Result<String, ServiceError> {
        let assertion = self.signed_assertion(scope)?;

        let resp = client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ServiceError::Credentials(format!(
                "Token endpoint returned status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;

        Ok(token.access_token)
    }
}
