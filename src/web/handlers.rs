//! HTTP handlers for API endpoints.

use crate::error::Result;
use crate::facilities::{Analytics, Facility, FeedbackReceipt, FeedbackSubmission, ImageAnalysis};
use crate::web::response::ApiResponse;
use crate::web::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

/// Endpoints advertised by the index route.
pub const ENDPOINTS: [&str; 5] = [
    "GET /api/facilities",
    "GET /api/facility/:id",
    "POST /api/feedback",
    "GET /api/analytics",
    "POST /api/analyze-image",
];

#[derive(Debug, Serialize)]
pub struct ServiceBanner {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

/// Service banner with the list of endpoints.
pub async fn index() -> Json<ServiceBanner> {
    Json(ServiceBanner {
        message: crate::SERVICE_NAME,
        version: crate::API_VERSION,
        endpoints: ENDPOINTS.to_vec(),
    })
}

/// Health check endpoint.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "facility-sim",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }))
}

/// Every facility in store order, unmodified.
pub async fn list_facilities(State(state): State<AppState>) -> Json<ApiResponse<Vec<Facility>>> {
    let facilities = state.store.list().await;
    let count = facilities.len();
    Json(ApiResponse::ok(facilities).with_count(count))
}

/// A single facility. Reading it refreshes its live sensor values.
pub async fn get_facility(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Facility>>> {
    let facility = state.store.read_and_refresh(&id).await?;
    Ok(Json(ApiResponse::ok(facility)))
}

/// Echo a feedback submission. Nothing is validated or stored.
pub async fn submit_feedback(body: Bytes) -> Json<ApiResponse<FeedbackReceipt>> {
    let receipt = FeedbackSubmission::from_body(&body).into_receipt();
    debug!(facility_id = ?receipt.facility_id, "feedback received");
    Json(ApiResponse::ok(receipt).with_message("Feedback submitted successfully"))
}

pub async fn get_analytics(State(state): State<AppState>) -> Json<ApiResponse<Analytics>> {
    Json(ApiResponse::ok(state.store.analytics(&state.facts).await))
}

/// Simulated image analysis. The request body is ignored; the response
/// arrives after the configured delay.
pub async fn analyze_image(State(state): State<AppState>) -> Json<ApiResponse<ImageAnalysis>> {
    tokio::time::sleep(state.analysis_delay).await;
    let analysis = ImageAnalysis::from_score(state.store.sample_cleanliness_score().await);
    debug!(
        score = analysis.cleanliness_score,
        needs_cleaning = analysis.needs_cleaning(),
        "image analysis simulated"
    );
    Json(ApiResponse::ok(analysis))
}
