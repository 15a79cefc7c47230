// src/infrastructure/repositories/postgres_api_log.rs
use super::map_sqlx;
use crate::domain::api_log::{ApiLog, ApiLogId, ApiLogRepository, NewApiLog};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

// One statement for the whole batch: arrays are unnested server-side, so the
// batch size is not bounded by the bind-parameter limit. Metadata travels as
// serialized text and lands in a `json` column, which accepts `\u0000`.
const INSERT_API_LOGS: &str = "
    INSERT INTO api_logs (id, client_ip, uri, method, host, url, status, metadata)
    SELECT id, client_ip, uri, method, host, url, status, metadata::json
    FROM UNNEST(
        $1::uuid[], $2::varchar[], $3::varchar[], $4::varchar[],
        $5::varchar[], $6::text[], $7::int4[], $8::text[]
    ) AS batch(id, client_ip, uri, method, host, url, status, metadata)
    RETURNING id, created_at";

#[derive(Clone)]
pub struct PostgresApiLogRepository {
    pool: PgPool,
}

impl PostgresApiLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

struct Columns {
    ids: Vec<Uuid>,
    client_ips: Vec<Option<String>>,
    uris: Vec<Option<String>>,
    methods: Vec<Option<String>>,
    hosts: Vec<Option<String>>,
    urls: Vec<Option<String>>,
    statuses: Vec<Option<i32>>,
    metadata: Vec<String>,
}

impl Columns {
    fn with_capacity(len: usize) -> Self {
        Self {
            ids: Vec::with_capacity(len),
            client_ips: Vec::with_capacity(len),
            uris: Vec::with_capacity(len),
            methods: Vec::with_capacity(len),
            hosts: Vec::with_capacity(len),
            urls: Vec::with_capacity(len),
            statuses: Vec::with_capacity(len),
            metadata: Vec::with_capacity(len),
        }
    }

    fn push(&mut self, id: ApiLogId, entry: &NewApiLog) -> DomainResult<()> {
        self.ids.push(id.into());
        self.client_ips.push(entry.client_ip().map(str::to_owned));
        self.uris.push(entry.uri().map(str::to_owned));
        self.methods.push(entry.method().map(str::to_owned));
        self.hosts.push(entry.host().map(str::to_owned));
        self.urls.push(entry.url().map(str::to_owned));
        self.statuses.push(entry.status());
        let metadata = serde_json::to_string(entry.metadata())
            .map_err(|err| DomainError::Persistence(format!("unserializable metadata: {err}")))?;
        self.metadata.push(metadata);
        Ok(())
    }
}

#[async_trait]
impl ApiLogRepository for PostgresApiLogRepository {
    async fn insert_many(&self, entries: Vec<NewApiLog>) -> DomainResult<Vec<ApiLog>> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<ApiLogId> = entries.iter().map(|_| ApiLogId::generate()).collect();
        let mut columns = Columns::with_capacity(entries.len());
        for (id, entry) in ids.iter().zip(&entries) {
            columns.push(*id, entry)?;
        }

        let Columns {
            ids: id_column,
            client_ips,
            uris,
            methods,
            hosts,
            urls,
            statuses,
            metadata,
        } = columns;

        let rows = sqlx::query_as::<_, (Uuid, DateTime<Utc>)>(INSERT_API_LOGS)
            .bind(id_column)
            .bind(client_ips)
            .bind(uris)
            .bind(methods)
            .bind(hosts)
            .bind(urls)
            .bind(statuses)
            .bind(metadata)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut created: HashMap<Uuid, DateTime<Utc>> = rows.into_iter().collect();

        // RETURNING order is not guaranteed; reassemble in submission order.
        entries
            .into_iter()
            .zip(ids)
            .map(|(entry, id)| {
                created
                    .remove(id.as_uuid())
                    .map(|created_at| entry.into_persisted(id, created_at))
                    .ok_or_else(|| {
                        DomainError::Persistence(format!("insert did not return api log {id}"))
                    })
            })
            .collect()
    }
}
