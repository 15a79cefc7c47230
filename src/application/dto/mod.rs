pub mod api_logs;

pub use api_logs::{ApiLogDto, LogPayload};
