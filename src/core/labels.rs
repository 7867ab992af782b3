use crate::models::PredictionLabel;

/// Integer value of a raw prediction, if it has one
///
/// Only finite integral values coerce; fractional, NaN and infinite values
/// are indeterminate.
#[inline]
pub fn coerce_label(raw: f64) -> Option<i64> {
    if raw.is_finite() && raw.fract() == 0.0 && raw >= i64::MIN as f64 && raw < i64::MAX as f64 {
        Some(raw as i64)
    } else {
        None
    }
}

/// Interpret a raw classifier output
pub fn interpret_label(raw: f64) -> PredictionLabel {
    match coerce_label(raw) {
        Some(0) => PredictionLabel::Negative,
        Some(1) => PredictionLabel::Positive,
        _ => PredictionLabel::Unexpected(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(interpret_label(0.0), PredictionLabel::Negative);
        assert_eq!(interpret_label(1.0), PredictionLabel::Positive);
        assert_eq!(interpret_label(-0.0), PredictionLabel::Negative);
    }

    #[test]
    fn test_other_integers_unexpected() {
        assert_eq!(interpret_label(7.0), PredictionLabel::Unexpected(7.0));
        assert_eq!(interpret_label(-1.0), PredictionLabel::Unexpected(-1.0));
    }

    #[test]
    fn test_non_integral_never_rounds() {
        assert_eq!(interpret_label(0.4), PredictionLabel::Unexpected(0.4));
        assert_eq!(interpret_label(0.999), PredictionLabel::Unexpected(0.999));
        assert!(matches!(interpret_label(f64::NAN), PredictionLabel::Unexpected(v) if v.is_nan()));
        assert_eq!(coerce_label(f64::INFINITY), None);
    }
}
