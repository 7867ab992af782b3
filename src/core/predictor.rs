use crate::core::{features::assemble_features, labels::interpret_label};
use crate::models::{FeatureVector, LabelMessages, PredictionLabel, PredictionRequest, PredictionResponse};
use crate::services::{CategoryEncoder, Classifier, ClassifierError, EncoderError, ModelArtifacts};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use thiserror::Error;

/// Failures of a single prediction
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PredictError {
    #[error("Country encoding failed for '{country}': {source}")]
    Encoding {
        country: String,
        #[source]
        source: EncoderError,
    },

    #[error("Backend error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("Backend error: classifier panicked: {0}")]
    Panic(String),
}

impl From<PredictError> for PredictionResponse {
    fn from(err: PredictError) -> Self {
        PredictionResponse::Error(err.to_string())
    }
}

/// Request-handling pipeline over the loaded artifacts
///
/// # Pipeline Stages
/// 1. Encode the country
/// 2. Assemble the feature vector in training order
/// 3. Run the classifier on a batch of one
/// 4. Interpret the raw label
///
/// Holds only shared read-only handles, so one instance serves every
/// worker concurrently.
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn Classifier>,
    encoder: Arc<dyn CategoryEncoder>,
    messages: LabelMessages,
}

impl Predictor {
    pub fn new(artifacts: ModelArtifacts, messages: LabelMessages) -> Self {
        Self {
            classifier: artifacts.classifier,
            encoder: artifacts.encoder,
            messages,
        }
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn encoder(&self) -> &dyn CategoryEncoder {
        self.encoder.as_ref()
    }

    /// Answer a questionnaire
    ///
    /// Never fails: every error becomes an `error` payload.
    pub fn predict(&self, request: &PredictionRequest) -> PredictionResponse {
        match self.try_predict(request) {
            Ok(label) => {
                if let PredictionLabel::Unexpected(raw) = label {
                    tracing::warn!("Classifier returned unexpected label {}", raw);
                }
                PredictionResponse::Prediction(self.messages.describe(label))
            }
            Err(err) => err.into(),
        }
    }

    /// Run the pipeline, surfacing each stage's failure
    pub fn try_predict(&self, request: &PredictionRequest) -> Result<PredictionLabel, PredictError> {
        let country_code = self.encode_country(&request.country)?;
        let features = assemble_features(request, country_code);

        match self.infer(&features) {
            Ok(raw) => Ok(interpret_label(raw)),
            Err(err) => {
                tracing::error!(error = %err, features = ?features.values(), "Inference failed");
                Err(err)
            }
        }
    }

    fn encode_country(&self, country: &str) -> Result<f64, PredictError> {
        self.encoder.transform(country).map_err(|source| {
            tracing::info!("Rejecting unknown country {:?}: {}", country, source);
            PredictError::Encoding {
                country: country.to_string(),
                source,
            }
        })
    }

    /// Run the classifier on a single-row batch and take the only output
    fn infer(&self, features: &FeatureVector) -> Result<f64, PredictError> {
        let batch = [*features];
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.classifier.predict(&batch)));

        let predictions = match outcome {
            Ok(result) => result?,
            Err(payload) => return Err(PredictError::Panic(panic_message(payload.as_ref()))),
        };

        match predictions.as_slice() {
            [raw] => Ok(*raw),
            [] => Err(ClassifierError::EmptyOutput.into()),
            many => Err(ClassifierError::BatchMismatch {
                expected: 1,
                got: many.len(),
            }
            .into()),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
