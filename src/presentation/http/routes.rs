// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::api_logs::{self, API_LOGS_PATH},
    middleware::bearer_auth::require_bearer_token,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub max_body_bytes: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

impl From<&AppConfig> for RouterOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            max_body_bytes: config.max_body_bytes(),
        }
    }
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, &RouterOptions::default())
}

pub fn build_router_with_options(state: HttpState, options: &RouterOptions) -> Router {
    let ingestion = Router::new()
        .route(API_LOGS_PATH, post(api_logs::create_api_logs))
        .route_layer(middleware::from_fn(require_bearer_token))
        .layer(DefaultBodyLimit::max(options.max_body_bytes));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(ingestion)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
