use crate::domain::api_log::{ApiLog, LogRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use utoipa::openapi::{
    RefOr,
    schema::{ArrayBuilder, ObjectBuilder, OneOfBuilder, Schema, Type},
};
use uuid::Uuid;

/// Body accepted by the ingestion endpoint: one record or a batch of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LogPayload {
    Batch(Vec<LogRecord>),
    Single(LogRecord),
}

impl LogPayload {
    /// Fan a single record out to a batch of one.
    pub fn into_records(self) -> Vec<LogRecord> {
        match self {
            Self::Batch(records) => records,
            Self::Single(record) => vec![record],
        }
    }
}

impl utoipa::PartialSchema for LogPayload {
    fn schema() -> RefOr<Schema> {
        let record = || {
            Schema::Object(
                ObjectBuilder::new()
                    .schema_type(Type::Object)
                    .description(Some(
                        "API call log. `client_ip`, `request.{uri,method,url,headers.host}` and \
                         `response.status` are extracted; every field is kept in `metadata`.",
                    ))
                    .build(),
            )
        };

        RefOr::T(Schema::OneOf(
            OneOfBuilder::new()
                .item(record())
                .item(Schema::Array(
                    ArrayBuilder::new().items(RefOr::T(record())).build(),
                ))
                .build(),
        ))
    }
}

impl ToSchema for LogPayload {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("LogPayload")
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiLogDto {
    pub id: Uuid,
    pub client_ip: Option<String>,
    pub uri: Option<String>,
    pub method: Option<String>,
    pub host: Option<String>,
    pub url: Option<String>,
    pub status: Option<i32>,
    #[schema(value_type = Object)]
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl From<ApiLog> for ApiLogDto {
    fn from(log: ApiLog) -> Self {
        Self {
            id: log.id.into(),
            client_ip: log.client_ip,
            uri: log.uri,
            method: log.method,
            host: log.host,
            url: log.url,
            status: log.status,
            metadata: log.metadata.into(),
            created_at: log.created_at,
        }
    }
}
