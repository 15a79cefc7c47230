use crate::domain::api_log::entity::{ApiLog, NewApiLog};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ApiLogRepository: Send + Sync {
    /// Persist every entry in a single all-or-nothing write.
    ///
    /// Implementations assign `id` and `created_at` and must return the stored
    /// entries in the same order as `entries`.
    async fn insert_many(&self, entries: Vec<NewApiLog>) -> DomainResult<Vec<ApiLog>>;
}
