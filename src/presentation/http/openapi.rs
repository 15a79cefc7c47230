// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::api_logs::create_api_logs,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::LogPayload,
            crate::application::dto::ApiLogDto
        )
    ),
    tags(
        (name = "ApiLogs", description = "API call log ingestion"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "API Log Ingestion",
        description = "Write-only ingestion of API call logs",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut seen = HashSet::new();
        for url in public_api_urls() {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Servers advertised in the document, from `PUBLIC_API_URLS` (comma
/// separated) or `PUBLIC_API_URL`.
fn public_api_urls() -> Vec<String> {
    let urls: Vec<String> = env::var("PUBLIC_API_URLS")
        .ok()
        .map(|value| split_urls(&value))
        .unwrap_or_default();
    if !urls.is_empty() {
        return urls;
    }

    env::var("PUBLIC_API_URL")
        .ok()
        .map(|value| split_urls(&value))
        .unwrap_or_default()
}

fn split_urls(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.trim_end_matches('/').to_string())
        .collect()
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_ingestion_path() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/api/api-logs").expect("ingestion path");
        assert!(item.post.is_some());
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn document_declares_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearerAuth"));
        assert!(components.schemas.contains_key("LogPayload"));
    }

    #[test]
    fn urls_are_split_and_trimmed() {
        assert_eq!(
            split_urls(" https://a.example/ ,, https://b.example"),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }
}
