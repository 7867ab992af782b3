use serde::{Deserialize, Serialize};

/// Number of features the classifier was trained on
pub const FEATURE_COUNT: usize = 23;

/// Position of the encoded country within the feature vector
pub const COUNTRY_INDEX: usize = 2;

/// Feature names in training order
///
/// This order is fixed by the trained classifier. Changing it requires
/// retraining.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "gender",
    "country",
    "self_employed",
    "family_history",
    "work_interfere",
    "no_employees",
    "remote_work",
    "tech_company",
    "benefits",
    "care_options",
    "wellness_program",
    "seek_help",
    "anonymity",
    "leave",
    "mental_health_consequence",
    "phys_health_consequence",
    "coworkers",
    "supervisor",
    "mental_health_interview",
    "phys_health_interview",
    "mental_vs_physical",
    "obs_consequence",
];

/// Classifier input for a single questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Single-precision copy for graph runtimes with float32 inputs
    pub fn to_f32(&self) -> [f32; FEATURE_COUNT] {
        self.0.map(|v| v as f32)
    }
}

/// Interpreted classifier output
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PredictionLabel {
    /// Label 0
    Negative,
    /// Label 1
    Positive,
    /// Anything else, carrying the raw value for diagnostics
    Unexpected(f64),
}

/// Human-readable messages for the two known labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMessages {
    pub negative: String,
    pub positive: String,
}

impl LabelMessages {
    pub fn new(negative: impl Into<String>, positive: impl Into<String>) -> Self {
        Self {
            negative: negative.into(),
            positive: positive.into(),
        }
    }

    /// Message for an interpreted label
    pub fn describe(&self, label: PredictionLabel) -> String {
        match label {
            PredictionLabel::Negative => self.negative.clone(),
            PredictionLabel::Positive => self.positive.clone(),
            PredictionLabel::Unexpected(raw) => {
                format!("Prediction returned unexpected value: {}", raw)
            }
        }
    }
}

impl Default for LabelMessages {
    fn default() -> Self {
        Self {
            negative: crate::config::default_negative_message(),
            positive: crate::config::default_positive_message(),
        }
    }
}

impl From<&crate::config::LabelSettings> for LabelMessages {
    fn from(settings: &crate::config::LabelSettings) -> Self {
        Self::new(settings.negative.clone(), settings.positive.clone())
    }
}
