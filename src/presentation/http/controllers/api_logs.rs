// src/presentation/http/controllers/api_logs.rs
use crate::application::{commands::api_logs::IngestApiLogsCommand, dto::LogPayload};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use uuid::Uuid;

pub const API_LOGS_PATH: &str = "/api/api-logs";

/// Ingest one API call log or an array of them.
///
/// Responds with the generated ids in input order; a single object still
/// yields an array.
#[utoipa::path(
    post,
    path = "/api/api-logs",
    request_body = LogPayload,
    responses(
        (status = 201, description = "Logs stored; ids in input order.", body = [Uuid]),
        (status = 401, description = "Missing, malformed or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "ApiLogs"
)]
pub async fn create_api_logs(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LogPayload>,
) -> HttpResult<(StatusCode, Json<Vec<Uuid>>)> {
    let stored = state
        .services
        .api_log_commands
        .ingest(IngestApiLogsCommand::from(payload))
        .await
        .into_http()?;

    let ids = stored.into_iter().map(|log| log.id).collect();
    Ok((StatusCode::CREATED, Json(ids)))
}
