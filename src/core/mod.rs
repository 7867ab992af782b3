// Core prediction pipeline exports
pub mod features;
pub mod labels;
pub mod predictor;

pub use features::assemble_features;
pub use labels::{coerce_label, interpret_label};
pub use predictor::{PredictError, Predictor};
