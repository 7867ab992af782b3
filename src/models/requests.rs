use serde::{Deserialize, Serialize};

/// Questionnaire answers submitted to `/predict`
///
/// Every field is required. Answers are integer-coded; `country` is the
/// free-text country name resolved by the category encoder. Declaration
/// order matches the feature order the classifier was trained on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub age: i64,
    pub gender: i64,
    pub country: String,
    pub self_employed: i64,
    pub family_history: i64,
    pub work_interfere: i64,
    pub no_employees: i64,
    pub remote_work: i64,
    pub tech_company: i64,
    pub benefits: i64,
    pub care_options: i64,
    pub wellness_program: i64,
    pub seek_help: i64,
    pub anonymity: i64,
    pub leave: i64,
    pub mental_health_consequence: i64,
    pub phys_health_consequence: i64,
    pub coworkers: i64,
    pub supervisor: i64,
    pub mental_health_interview: i64,
    pub phys_health_interview: i64,
    pub mental_vs_physical: i64,
    pub obs_consequence: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> serde_json::Value {
        serde_json::json!({
            "age": 34, "gender": 1, "country": "Canada", "self_employed": 0,
            "family_history": 1, "work_interfere": 2, "no_employees": 3,
            "remote_work": 0, "tech_company": 1, "benefits": 1, "care_options": 0,
            "wellness_program": 0, "seek_help": 1, "anonymity": 1, "leave": 2,
            "mental_health_consequence": 0, "phys_health_consequence": 0,
            "coworkers": 1, "supervisor": 1, "mental_health_interview": 0,
            "phys_health_interview": 1, "mental_vs_physical": 0, "obs_consequence": 0
        })
    }

    #[test]
    fn test_deserialize_complete_request() {
        let request: PredictionRequest = serde_json::from_value(body()).unwrap();
        assert_eq!(request.country, "Canada");
        assert_eq!(request.leave, 2);
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut value = body();
        value.as_object_mut().unwrap().remove("supervisor");

        let err = serde_json::from_value::<PredictionRequest>(value).unwrap_err();
        assert!(err.to_string().contains("supervisor"));
    }

    #[test]
    fn test_mistyped_field_rejected() {
        let mut value = body();
        value["age"] = serde_json::json!("thirty");
        assert!(serde_json::from_value::<PredictionRequest>(value).is_err());

        let mut value = body();
        value["country"] = serde_json::json!(12);
        assert!(serde_json::from_value::<PredictionRequest>(value).is_err());
    }
}
