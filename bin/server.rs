// Five-Grid Name Engine - Web Server
// JSON front end over the engine with Axum

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use wuge_name_engine::{init_logging, render_text, AppConfig, NameReading, NumerologyEngine, USAGE_HINT};

/// Shared application state
#[derive(Clone)]
struct AppState {
    engine: NumerologyEngine,
    reference_year: Option<i32>,
}

impl AppState {
    /// Pinned year from config, else this request's calendar year
    fn reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Evaluate request body
#[derive(Deserialize)]
struct EvaluateRequest {
    text: String,
}

/// Reading plus its plain-text rendering
#[derive(Serialize)]
struct EvaluateResponse {
    #[serde(flatten)]
    reading: NameReading,
    text: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// POST /api/evaluate - Compute a reading for free-form text
async fn evaluate(State(state): State<AppState>, Json(request): Json<EvaluateRequest>) -> impl IntoResponse {
    match state.engine.evaluate(&request.text, state.reference_year()) {
        Some(reading) => {
            let text = render_text(&reading);
            (StatusCode::OK, Json(ApiResponse::ok(EvaluateResponse { reading, text }))).into_response()
        }
        None => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::<EvaluateResponse>::fail(USAGE_HINT)),
        )
            .into_response(),
    }
}

fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/evaluate", post(evaluate))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    init_logging();

    let config = AppConfig::from_env();
    let engine = config.build_engine();

    let state = AppState {
        engine,
        reference_year: config.reference_year,
    };

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.bind_addr, "server running, POST /api/evaluate");

    if let Err(e) = axum::serve(listener, router(state)).await {
        error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
