mod ingest;
mod service;

pub use ingest::IngestApiLogsCommand;
pub use service::ApiLogCommandService;
