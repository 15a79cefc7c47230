// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_api_log;

pub use error::map_sqlx;
pub use postgres_api_log::PostgresApiLogRepository;
