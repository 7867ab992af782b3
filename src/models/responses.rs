use serde::{Deserialize, Serialize};

/// Outcome of `/predict`
///
/// Serializes as exactly one of `{"prediction": "..."}` or `{"error": "..."}`.
/// Both are sent with HTTP 200; callers branch on the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionResponse {
    Prediction(String),
    Error(String),
}

impl PredictionResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, PredictionResponse::Error(_))
    }

    pub fn message(&self) -> &str {
        match self {
            PredictionResponse::Prediction(message) | PredictionResponse::Error(message) => message,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Description of the loaded artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    pub features: Vec<String>,
    pub feature_count: usize,
    pub country_index: usize,
    pub known_categories: usize,
    pub classifier: String,
}

/// Error response for requests rejected before prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
