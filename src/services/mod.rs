// Service exports
pub mod classifier;
pub mod encoder;

pub use classifier::{Classifier, ClassifierError, OnnxClassifier};
pub use encoder::{CategoryEncoder, EncoderError, EncoderLoadError, LabelEncoder};

use crate::config::ModelSettings;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while loading the trained artifacts at startup
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to load classifier: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("failed to load encoder from {path}: {source}")]
    Encoder {
        path: String,
        #[source]
        source: EncoderLoadError,
    },
}

/// Immutable handles to the trained classifier and country encoder
#[derive(Clone)]
pub struct ModelArtifacts {
    pub classifier: Arc<dyn Classifier>,
    pub encoder: Arc<dyn CategoryEncoder>,
}

impl ModelArtifacts {
    pub fn new(classifier: Arc<dyn Classifier>, encoder: Arc<dyn CategoryEncoder>) -> Self {
        Self { classifier, encoder }
    }

    /// Load both artifacts from the configured paths
    pub fn load(settings: &ModelSettings) -> Result<Self, ArtifactError> {
        let encoder = LabelEncoder::load(&settings.encoder_path).map_err(|source| ArtifactError::Encoder {
            path: settings.encoder_path.clone(),
            source,
        })?;
        tracing::info!(
            "Loaded country encoder from {} ({} categories)",
            settings.encoder_path,
            encoder.vocabulary_size()
        );

        let classifier = OnnxClassifier::load(&settings.classifier_path)?;
        tracing::info!("Loaded classifier from {}", settings.classifier_path);

        Ok(Self::new(Arc::new(classifier), Arc::new(encoder)))
    }
}
