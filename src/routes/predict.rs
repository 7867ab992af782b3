use actix_web::{web, HttpResponse, Responder};
use crate::core::Predictor;
use crate::models::{HealthResponse, ModelInfoResponse, PredictionRequest, COUNTRY_INDEX, FEATURE_COUNT, FEATURE_NAMES};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
}

/// Configure prediction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/model/info", web::get().to(model_info))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Loaded artifact summary
///
/// GET /model/info
async fn model_info(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ModelInfoResponse {
        features: FEATURE_NAMES.iter().map(|name| name.to_string()).collect(),
        feature_count: FEATURE_COUNT,
        country_index: COUNTRY_INDEX,
        known_categories: state.predictor.encoder().vocabulary_size(),
        classifier: state.predictor.classifier().describe(),
    })
}

/// Prediction endpoint
///
/// POST /predict
///
/// Request body: the 23 questionnaire fields, all required.
///
/// Always answers 200 once the body binds:
/// ```json
/// { "prediction": "string" }
/// ```
/// or
/// ```json
/// { "error": "string" }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictionRequest>,
) -> impl Responder {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("predict", %request_id);
    let _guard = span.enter();

    tracing::debug!("Predicting for country {:?}", req.country);

    let response = state.predictor.predict(&req);

    tracing::debug!("Responding with {:?}", response);

    HttpResponse::Ok().json(response)
}
