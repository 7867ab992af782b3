// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FeatureVector, LabelMessages, PredictionLabel, COUNTRY_INDEX, FEATURE_COUNT, FEATURE_NAMES};
pub use requests::PredictionRequest;
pub use responses::{ErrorResponse, HealthResponse, ModelInfoResponse, PredictionResponse};
