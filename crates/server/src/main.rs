// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Form, Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State as AxumState},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use staycheck::ComplianceReport;
use staycheck_api::{
    ApiError, ApiResult, HealthResponse, calculate_from_json, calculate_from_query,
    encode_holidays_query,
};
use staycheck_domain::{CalculationConfig, DEFAULT_MAX_STAY, DEFAULT_WINDOW_SIZE, Interval};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::task::JoinError;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Largest request body accepted, in bytes.
const MAX_BODY_BYTES: usize = 128 * 1024;

/// Header telling htmx which URL to push into the browser history.
const HX_PUSH_URL: &str = "hx-push-url";

/// Staycheck Server - checks holidays against a rolling-window stay rule
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    address: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8000, value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Base URL prefixed to shareable links
    #[arg(short, long, default_value = "")]
    base_url: String,

    /// Length of the rolling window in days
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
    window_size: u32,

    /// Maximum days away allowed within any window
    #[arg(long, default_value_t = DEFAULT_MAX_STAY)]
    max_stay: u32,
}

/// Application state shared across handlers.
///
/// Captured once at startup and never mutated.
#[derive(Debug, Clone)]
struct AppState {
    /// The stay rule every request is checked against.
    config: CalculationConfig,
    /// Prefix for shareable links.
    base_url: Arc<str>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } | ApiError::DomainRuleViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Calculation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.message().to_string(),
        }
    }
}

/// Maps a calculation task that did not complete to an API error.
fn task_failure(err: &JoinError) -> ApiError {
    ApiError::Internal {
        message: format!("calculation task failed: {err}"),
    }
}

/// Runs a calculation on the blocking pool.
///
/// The scan covers every day between the earliest and latest holiday, so
/// its cost follows the submitted dates rather than the body size.
async fn run_calculation<T, F>(task: F) -> Result<T, HttpError>
where
    F: FnOnce() -> ApiResult<T> + Send + 'static,
    T: Send + 'static,
{
    let result: ApiResult<T> = tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| task_failure(&err))?;
    result.map_err(HttpError::from)
}

/// Handler for POST `/trips` endpoint.
///
/// Accepts a JSON array of `{start, end}` holidays.
async fn handle_calculate_json(
    AxumState(app_state): AxumState<AppState>,
    body: Bytes,
) -> Result<Json<ComplianceReport>, HttpError> {
    info!(bytes = body.len(), "Handling calculate request");

    let config: CalculationConfig = app_state.config;
    let report: ComplianceReport =
        run_calculation(move || calculate_from_json(&body, config)).await?;
    Ok(Json(report))
}

/// Handler for GET `/trips` endpoint.
///
/// Accepts repeated `Start`/`End` query parameters.
async fn handle_calculate_query(
    AxumState(app_state): AxumState<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ComplianceReport>, HttpError> {
    info!(params = pairs.len(), "Handling calculate query request");

    let config: CalculationConfig = app_state.config;
    let (_, report): (Vec<Interval>, ComplianceReport) =
        run_calculation(move || calculate_from_query(&pairs, config)).await?;
    Ok(Json(report))
}

/// Handler for POST `/trips/form` endpoint.
///
/// Accepts a urlencoded form and points the browser at a shareable URL
/// for the submitted holidays.
async fn handle_calculate_form(
    AxumState(app_state): AxumState<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, HttpError> {
    info!(params = pairs.len(), "Handling calculate form request");

    let config: CalculationConfig = app_state.config;
    let (holidays, report): (Vec<Interval>, ComplianceReport) =
        run_calculation(move || calculate_from_query(&pairs, config)).await?;

    let push_url: String = format!(
        "{}/?{}",
        app_state.base_url,
        encode_holidays_query(&holidays)
    );
    let mut response: Response = Json(report).into_response();
    match HeaderValue::from_str(&push_url) {
        Ok(value) => {
            response
                .headers_mut()
                .insert(HeaderName::from_static(HX_PUSH_URL), value);
        }
        Err(err) => warn!(error = %err, url = %push_url, "Skipping unrepresentable push URL"),
    }
    Ok(response)
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/trips", post(handle_calculate_json))
        .route("/trips", get(handle_calculate_query))
        .route("/trips/form", post(handle_calculate_form))
        .route("/health", get(handle_health))
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}

/// Resolves when the process is asked to stop.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Staycheck Server");

    // Reject a bad rule before binding
    let config: CalculationConfig = CalculationConfig::new(args.window_size, args.max_stay)?;
    info!(
        window_size = config.window_size,
        max_stay = config.max_stay,
        base_url = %args.base_url,
        "Using stay rule"
    );

    let app_state: AppState = AppState {
        config,
        base_url: Arc::from(args.base_url),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.address, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
