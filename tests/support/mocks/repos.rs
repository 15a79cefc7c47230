// tests/support/mocks/repos.rs
use std::sync::Mutex;

use api_log_ingest::domain::api_log::{ApiLog, ApiLogId, ApiLogRepository, NewApiLog};
use api_log_ingest::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

use super::time::fixed_now;

/// In-memory stand-in for the log table.
///
/// Records every bulk call so tests can check how many writes happened and
/// what each one carried.
#[derive(Debug, Default)]
pub struct InMemoryApiLogRepo {
    stored: Mutex<Vec<ApiLog>>,
    calls: Mutex<Vec<Vec<NewApiLog>>>,
}

impl InMemoryApiLogRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self) -> Vec<ApiLog> {
        self.stored.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<Vec<NewApiLog>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ApiLogRepository for InMemoryApiLogRepo {
    async fn insert_many(&self, entries: Vec<NewApiLog>) -> DomainResult<Vec<ApiLog>> {
        self.calls.lock().unwrap().push(entries.clone());

        let persisted: Vec<ApiLog> = entries
            .into_iter()
            .map(|entry| entry.into_persisted(ApiLogId::generate(), fixed_now()))
            .collect();

        self.stored.lock().unwrap().extend(persisted.iter().cloned());
        Ok(persisted)
    }
}

/// Repository whose every write fails the way a dropped connection would.
#[derive(Debug, Default)]
pub struct FailingApiLogRepo {
    calls: Mutex<usize>,
}

impl FailingApiLogRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ApiLogRepository for FailingApiLogRepo {
    async fn insert_many(&self, _entries: Vec<NewApiLog>) -> DomainResult<Vec<ApiLog>> {
        *self.calls.lock().unwrap() += 1;
        Err(DomainError::Persistence("Database error".into()))
    }
}
