//! Environment-driven configuration for the composer services.

use serde::{Deserialize, Serialize};
use url::Url;

/// Object-store endpoint used when none is configured.
pub const DEFAULT_S3_ENDPOINT: &str = "https://s3.rwth-aachen.de";

/// Credential/endpoint settings attached verbatim to the submission payload.
///
/// Field names follow the workflow service contract, which expects the
/// camelCase keys the configuration form produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Config {
    pub endpoint: String,
    #[serde(rename = "accessKey")]
    pub access_key: String,
    #[serde(rename = "secretKey")]
    pub secret_key: String,
}

impl Default for S3Config {
    fn default() -> Self {
        S3Config {
            endpoint: DEFAULT_S3_ENDPOINT.to_string(),
            access_key: String::new(),
            secret_key: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Base URL of the backend exposing `/api/templates/` and `/api/workflows/`.
    pub api_base: Url,
    pub s3: S3Config,
}

impl StudioConfig {
    pub fn new(api_base: Url) -> Self {
        StudioConfig {
            api_base,
            s3: S3Config::default(),
        }
    }

    /// Read configuration from environment variables.
    /// Returns None if `COMPOSER_API_URL` is unset or unparseable.
    pub fn from_env() -> Option<Self> {
        let api_base = Url::parse(&std::env::var("COMPOSER_API_URL").ok()?).ok()?;

        let s3 = S3Config {
            endpoint: std::env::var("COMPOSER_S3_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_S3_ENDPOINT.to_string()),
            access_key: std::env::var("COMPOSER_S3_ACCESS_KEY").unwrap_or_default(),
            secret_key: std::env::var("COMPOSER_S3_SECRET_KEY").unwrap_or_default(),
        };

        Some(StudioConfig { api_base, s3 })
    }
}
