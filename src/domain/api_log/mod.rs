// src/domain/api_log/mod.rs
pub mod entity;
pub mod record;
pub mod repository;
pub mod value_objects;

pub use entity::{ApiLog, NewApiLog};
pub use record::LogRecord;
pub use repository::ApiLogRepository;
pub use value_objects::ApiLogId;
