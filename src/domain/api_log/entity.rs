// src/domain/api_log/entity.rs
use crate::domain::api_log::{record::LogRecord, value_objects::ApiLogId};
use chrono::{DateTime, Utc};

/// A normalized log entry that has not been stored yet.
///
/// The flattened columns are derived from `metadata` in [`NewApiLog::from_record`]
/// and cannot be set independently, so they always agree with it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApiLog {
    client_ip: Option<String>,
    uri: Option<String>,
    method: Option<String>,
    host: Option<String>,
    url: Option<String>,
    status: Option<i32>,
    metadata: LogRecord,
}

impl NewApiLog {
    pub fn from_record(record: LogRecord) -> Self {
        Self {
            client_ip: record.client_ip().map(str::to_owned),
            uri: record.request_uri().map(str::to_owned),
            method: record.request_method().map(str::to_owned),
            host: record.request_host().map(str::to_owned),
            url: record.request_url().map(str::to_owned),
            status: record.response_status(),
            metadata: record,
        }
    }

    pub fn client_ip(&self) -> Option<&str> {
        self.client_ip.as_deref()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub const fn status(&self) -> Option<i32> {
        self.status
    }

    pub const fn metadata(&self) -> &LogRecord {
        &self.metadata
    }

    /// Attach the identity assigned by storage.
    pub fn into_persisted(self, id: ApiLogId, created_at: DateTime<Utc>) -> ApiLog {
        ApiLog {
            id,
            client_ip: self.client_ip,
            uri: self.uri,
            method: self.method,
            host: self.host,
            url: self.url,
            status: self.status,
            metadata: self.metadata,
            created_at,
        }
    }
}

impl From<LogRecord> for NewApiLog {
    fn from(record: LogRecord) -> Self {
        Self::from_record(record)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiLog {
    pub id: ApiLogId,
    pub client_ip: Option<String>,
    pub uri: Option<String>,
    pub method: Option<String>,
    pub host: Option<String>,
    pub url: Option<String>,
    pub status: Option<i32>,
    pub metadata: LogRecord,
    pub created_at: DateTime<Utc>,
}
