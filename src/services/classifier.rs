use crate::models::{FeatureVector, FEATURE_COUNT};
use std::path::Path;
use thiserror::Error;
use tract_onnx::prelude::*;

/// Errors that can occur while running the classifier
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("model load error: {0}")]
    Load(String),

    #[error("inference error: {0}")]
    Inference(String),

    #[error("classifier returned no output")]
    EmptyOutput,

    #[error("classifier returned {got} predictions for a batch of {expected}")]
    BatchMismatch { expected: usize, got: usize },
}

/// Pre-trained binary classifier
pub trait Classifier: Send + Sync {
    /// One raw prediction per feature vector, in batch order
    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<f64>, ClassifierError>;

    /// Short description for operators
    fn describe(&self) -> String;
}

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// ONNX classifier graph executed with tract
///
/// The graph takes a single float32 input of shape `[1, FEATURE_COUNT]`; its
/// first output holds the predicted label.
pub struct OnnxClassifier {
    model: OnnxPlan,
    source: String,
}

impl OnnxClassifier {
    pub fn load<P: AsRef<Path>>(model_path: P) -> Result<Self, ClassifierError> {
        let source = model_path.as_ref().display().to_string();
        let model = tract_onnx::onnx()
            .model_for_path(model_path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    InferenceFact::dt_shape(f32::datum_type(), tvec!(1, FEATURE_COUNT)),
                )
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ClassifierError::Load(format!("{}: {:#}", source, e)))?;

        Ok(Self { model, source })
    }

    fn predict_one(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        let inference = |e: TractError| ClassifierError::Inference(format!("{:#}", e));

        let input = Tensor::from_shape(&[1, FEATURE_COUNT], &features.to_f32()).map_err(inference)?;
        let outputs = self.model.run(tvec!(input.into())).map_err(inference)?;

        let labels = outputs
            .first()
            .ok_or(ClassifierError::EmptyOutput)?
            .cast_to::<f64>()
            .map_err(inference)?;

        labels
            .as_slice::<f64>()
            .map_err(inference)?
            .first()
            .copied()
            .ok_or(ClassifierError::EmptyOutput)
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<f64>, ClassifierError> {
        batch.iter().map(|features| self.predict_one(features)).collect()
    }

    fn describe(&self) -> String {
        format!("onnx:{}", self.source)
    }
}

impl std::fmt::Debug for OnnxClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxClassifier").field("source", &self.source).finish()
    }
}
