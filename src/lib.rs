//! Mental Health Predictor - inference service for the workplace mental-health questionnaire
//!
//! This library turns a questionnaire into the feature vector a pre-trained
//! classifier expects, runs the classifier and maps its label to a message.
//! Every handled failure is reported in the response payload.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{assemble_features, PredictError, Predictor};
pub use crate::models::{FeatureVector, LabelMessages, PredictionLabel, PredictionRequest, PredictionResponse};
pub use crate::services::{CategoryEncoder, Classifier, LabelEncoder, ModelArtifacts, OnnxClassifier};
