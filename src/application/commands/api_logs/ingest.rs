use super::ApiLogCommandService;
use crate::{
    application::{dto::ApiLogDto, dto::LogPayload, error::ApplicationResult},
    domain::api_log::{LogRecord, NewApiLog},
};

pub struct IngestApiLogsCommand {
    pub records: Vec<LogRecord>,
}

impl From<LogPayload> for IngestApiLogsCommand {
    fn from(payload: LogPayload) -> Self {
        Self {
            records: payload.into_records(),
        }
    }
}

impl ApiLogCommandService {
    /// Normalize every record and store them with one bulk write.
    ///
    /// The result preserves input order. An empty batch still reaches the
    /// repository, with zero entries.
    pub async fn ingest(&self, command: IngestApiLogsCommand) -> ApplicationResult<Vec<ApiLogDto>> {
        let entries: Vec<NewApiLog> = command
            .records
            .into_iter()
            .map(NewApiLog::from_record)
            .collect();
        let submitted = entries.len();
        tracing::debug!(records = submitted, "normalized api logs");

        let stored = self.repo.insert_many(entries).await.map_err(|err| {
            tracing::error!(error = %err, records = submitted, "failed to persist api logs");
            err
        })?;

        tracing::info!(persisted = stored.len(), "api logs persisted");
        Ok(stored.into_iter().map(ApiLogDto::from).collect())
    }
}
