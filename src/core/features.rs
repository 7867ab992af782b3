use crate::models::{FeatureVector, PredictionRequest};

/// Arrange a request into the classifier's training order
///
/// `country_code` is the encoder output for `request.country` and lands at
/// `COUNTRY_INDEX`. Every other answer is widened to `f64` unchanged.
pub fn assemble_features(request: &PredictionRequest, country_code: f64) -> FeatureVector {
    let values = [
        request.age as f64,
        request.gender as f64,
        country_code,
        request.self_employed as f64,
        request.family_history as f64,
        request.work_interfere as f64,
        request.no_employees as f64,
        request.remote_work as f64,
        request.tech_company as f64,
        request.benefits as f64,
        request.care_options as f64,
        request.wellness_program as f64,
        request.seek_help as f64,
        request.anonymity as f64,
        request.leave as f64,
        request.mental_health_consequence as f64,
        request.phys_health_consequence as f64,
        request.coworkers as f64,
        request.supervisor as f64,
        request.mental_health_interview as f64,
        request.phys_health_interview as f64,
        request.mental_vs_physical as f64,
        request.obs_consequence as f64,
    ];

    FeatureVector(values)
}
