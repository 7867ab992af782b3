use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while encoding a category
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncoderError {
    #[error("previously unseen label: '{0}'")]
    UnknownCategory(String),
}

/// Fitted categorical-to-numeric mapping over a closed vocabulary
pub trait CategoryEncoder: Send + Sync {
    /// Numeric code for a category value
    fn transform(&self, value: &str) -> Result<f64, EncoderError>;

    /// Number of categories the encoder was fit on
    fn vocabulary_size(&self) -> usize;
}

/// Errors raised while loading an encoder artifact
#[derive(Debug, Error)]
pub enum EncoderLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("encoder vocabulary is empty")]
    EmptyVocabulary,

    #[error("duplicate category in vocabulary: '{0}'")]
    DuplicateCategory(String),
}

/// On-disk encoder vocabulary: either `["a", "b"]` or `{"classes": ["a", "b"]}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EncoderArtifact {
    Classes(Vec<String>),
    Object { classes: Vec<String> },
}

impl EncoderArtifact {
    fn into_classes(self) -> Vec<String> {
        match self {
            EncoderArtifact::Classes(classes) | EncoderArtifact::Object { classes } => classes,
        }
    }
}

/// Label encoder whose code is the category's position in the fitted class list
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    codes: HashMap<String, usize>,
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Build an encoder from classes in code order
    pub fn from_classes<I, S>(classes: I) -> Result<Self, EncoderLoadError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes: Vec<String> = classes.into_iter().map(Into::into).collect();
        if classes.is_empty() {
            return Err(EncoderLoadError::EmptyVocabulary);
        }

        let mut codes = HashMap::with_capacity(classes.len());
        for (code, class) in classes.iter().enumerate() {
            if codes.insert(class.clone(), code).is_some() {
                return Err(EncoderLoadError::DuplicateCategory(class.clone()));
            }
        }

        Ok(Self { codes, classes })
    }

    /// Parse a JSON vocabulary artifact
    pub fn from_json(json: &str) -> Result<Self, EncoderLoadError> {
        let artifact: EncoderArtifact = serde_json::from_str(json)?;
        Self::from_classes(artifact.into_classes())
    }

    /// Load a JSON vocabulary artifact from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EncoderLoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[cfg(test)]
    fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl CategoryEncoder for LabelEncoder {
    fn transform(&self, value: &str) -> Result<f64, EncoderError> {
        self.codes
            .get(value)
            .map(|&code| code as f64)
            .ok_or_else(|| EncoderError::UnknownCategory(value.to_string()))
    }

    fn vocabulary_size(&self) -> usize {
        self.classes.len()
    }
}
