//! HTTP surface over [`ComparisonService`].

use crate::core::compare::CountryGroups;
use crate::core::{ComparisonRequest, ComparisonResult, ComparisonService, NormalizedWealth, WealthError};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

const GENERIC_SERVER_ERROR: &str = "Unexpected server error";

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ComparisonService>,
}

#[derive(Debug, Serialize)]
struct SubmitResponse {
    status: &'static str,
    results: Vec<ComparisonResult>,
    breakdown: NormalizedWealth,
}

#[derive(Debug, Serialize)]
struct CountriesResponse {
    status: &'static str,
    countries: CountryGroups,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: &'static str,
    message: String,
}

/// Failure at the HTTP boundary. Client-class domain errors are echoed back,
/// everything else is logged and replaced with a generic message.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Domain(WealthError),
}

impl From<WealthError> for ApiError {
    fn from(err: WealthError) -> Self {
        ApiError::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Domain(err) if err.is_client_error() => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Domain(err) => {
                error!(error = %err, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_SERVER_ERROR.to_string(),
                )
            }
        };
        let body = Json(ErrorBody {
            status: "error",
            message,
        });
        (status, body).into_response()
    }
}

async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Json(request) = payload?;
    let outcome = state.service.compare(&request).await?;
    Ok(Json(SubmitResponse {
        status: "ok",
        results: outcome.results,
        breakdown: outcome.normalized,
    }))
}

async fn residence_countries(
    State(state): State<AppState>,
) -> Result<Json<CountriesResponse>, ApiError> {
    let countries = state.service.residence_countries().await?;
    Ok(Json(CountriesResponse {
        status: "ok",
        countries,
    }))
}

async fn target_countries(State(state): State<AppState>) -> Json<CountriesResponse> {
    Json(CountriesResponse {
        status: "ok",
        countries: state.service.target_countries(),
    })
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/submit", post(submit))
        .route("/api/countries/residence", get(residence_countries))
        .route("/api/countries/target", get(target_countries))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("wealthrank listening on http://{}", addr);
    tracing::info!("  POST /api/submit");
    tracing::info!("  GET  /api/countries/residence");
    tracing::info!("  GET  /api/countries/target");
    tracing::info!("  GET  /health");

    axum::serve(listener, app).await?;
    Ok(())
}
