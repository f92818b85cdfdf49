//! HTTP client for the external classifier service.

use serde::Deserialize;
use std::collections::HashMap;

use super::validate::PredictionFeatures;

/// Default base URL for the model service.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Errors from the classifier service.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned an error status
    #[error("classifier error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the prediction response
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

/// A crowd-level prediction from the model service.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct Prediction {
    /// Discrete crowd level label (e.g. "Low", "Medium", "High").
    pub crowd_level: String,

    /// Numeric class code behind the label.
    pub crowd_level_code: i32,

    /// Probability of the predicted class.
    pub confidence: f64,

    /// Full class distribution, keyed by label.
    pub probabilities: HashMap<String, f64>,
}

/// Configuration for the classifier client.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Base URL of the model service.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClassifierConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 10,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the crowd-level model service.
///
/// The model is opaque: this client posts a feature vector and gets a
/// class plus distribution back. Nothing here knows how the model was
/// trained.
#[derive(Debug, Clone)]
pub struct ClassifierClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClassifierClient {
    /// Create a new classifier client.
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Request a prediction for a validated feature vector.
    pub async fn predict(
        &self,
        features: &PredictionFeatures,
    ) -> Result<Prediction, ClassifierError> {
        let url = format!("{}/predict", self.base_url);

        let response = self.http.post(&url).json(features).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClassifierError::Json {
            message: e.to_string(),
        })
    }
}
