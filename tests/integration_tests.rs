// Integration tests for the prediction HTTP surface

use actix_web::{http::StatusCode, test, web, App};
use mental_health_predictor::config::CorsSettings;
use mental_health_predictor::models::{ErrorResponse, FeatureVector, LabelMessages};
use mental_health_predictor::routes::{self, AppState};
use mental_health_predictor::services::{Classifier, ClassifierError, LabelEncoder, ModelArtifacts};
use mental_health_predictor::Predictor;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Classifier double that always returns the same label
struct ConstantClassifier(f64);

impl Classifier for ConstantClassifier {
    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<f64>, ClassifierError> {
        Ok(vec![self.0; batch.len()])
    }

    fn describe(&self) -> String {
        format!("constant:{}", self.0)
    }
}

struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _batch: &[FeatureVector]) -> Result<Vec<f64>, ClassifierError> {
        Err(ClassifierError::Inference("graph evaluation failed".to_string()))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

fn app_state(classifier: Arc<dyn Classifier>) -> AppState {
    let encoder = LabelEncoder::from_classes(["Canada", "Germany", "United Kingdom", "United States"]).unwrap();
    AppState {
        predictor: Predictor::new(
            ModelArtifacts::new(classifier, Arc::new(encoder)),
            LabelMessages::default(),
        ),
    }
}

fn questionnaire(country: &str) -> Value {
    json!({
        "age": 0, "gender": 0, "country": country, "self_employed": 0,
        "family_history": 0, "work_interfere": 1, "no_employees": 0,
        "remote_work": 0, "tech_company": 0, "benefits": 0, "care_options": 0,
        "wellness_program": 0, "seek_help": 0, "anonymity": 0, "leave": 0,
        "mental_health_consequence": 0, "phys_health_consequence": 0,
        "coworkers": 0, "supervisor": 0, "mental_health_interview": 0,
        "phys_health_interview": 0, "mental_vs_physical": 0, "obs_consequence": 0
    })
}

/// Layer counting events at INFO and above
struct InfoEventCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for InfoEventCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() <= tracing::Level::INFO {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

macro_rules! init_app {
    ($classifier:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state($classifier)))
                .app_data(routes::json_config())
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_label_zero_is_fit() {
    let app = init_app!(Arc::new(ConstantClassifier(0.0)));

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(questionnaire("United States"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "prediction": "✅ You are mentally fit." }));
}

#[actix_web::test]
async fn test_label_one_is_check_up() {
    let app = init_app!(Arc::new(ConstantClassifier(1.0)));

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(questionnaire("Canada"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let message = body["prediction"].as_str().unwrap();
    assert!(message.contains("check-up"));
    assert!(body.get("error").is_none());
}

#[actix_web::test]
async fn test_unknown_country_is_error_payload() {
    let app = init_app!(Arc::new(ConstantClassifier(0.0)));

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(questionnaire("Atlantis"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("prediction").is_none());
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Atlantis"), "error should name the country: {}", error);
}

#[actix_web::test]
async fn test_unknown_country_logged_once() {
    let app = init_app!(Arc::new(ConstantClassifier(0.0)));

    let events = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(InfoEventCounter(events.clone()));
    let _default = tracing::subscriber::set_default(subscriber);

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(questionnaire("Atlantis"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(events.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn test_unexpected_label_is_echoed() {
    let app = init_app!(Arc::new(ConstantClassifier(7.0)));

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(questionnaire("Germany"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert!(body.get("error").is_none());
    assert!(body["prediction"].as_str().unwrap().contains('7'));
}

#[actix_web::test]
async fn test_backend_failure_is_error_payload() {
    let app = init_app!(Arc::new(FailingClassifier));

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(questionnaire("Germany"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Backend error:"));
    assert!(error.contains("graph evaluation failed"));
}

#[actix_web::test]
async fn test_missing_field_rejected_before_prediction() {
    let app = init_app!(Arc::new(ConstantClassifier(0.0)));

    let mut body = questionnaire("Canada");
    body.as_object_mut().unwrap().remove("obs_consequence");

    let req = test::TestRequest::post().uri("/predict").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("prediction").is_none());

    let rejection: ErrorResponse = serde_json::from_value(body).unwrap();
    assert_eq!(rejection.error, "invalid_json");
    assert_eq!(rejection.status_code, 400);
    assert!(rejection.message.contains("obs_consequence"), "message: {}", rejection.message);
}

#[actix_web::test]
async fn test_mistyped_field_rejected_before_prediction() {
    let app = init_app!(Arc::new(ConstantClassifier(0.0)));

    let mut body = questionnaire("Canada");
    body["benefits"] = json!("yes");

    let req = test::TestRequest::post().uri("/predict").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!(Arc::new(ConstantClassifier(0.0)));

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_model_info() {
    let app = init_app!(Arc::new(ConstantClassifier(0.0)));

    let req = test::TestRequest::get().uri("/model/info").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["feature_count"], 23);
    assert_eq!(body["country_index"], 2);
    assert_eq!(body["features"][2], "country");
    assert_eq!(body["known_categories"], 4);
    assert_eq!(body["classifier"], "constant:0");
}

#[actix_web::test]
async fn test_cors_allows_configured_origin() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(Arc::new(ConstantClassifier(0.0)))))
            .app_data(routes::json_config())
            .wrap(routes::cors(&CorsSettings::default()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/predict")
        .insert_header(("Origin", "http://localhost:5500"))
        .set_json(questionnaire("Canada"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5500"
    );
    assert_eq!(
        resp.headers().get("access-control-allow-credentials").unwrap(),
        "true"
    );
}
