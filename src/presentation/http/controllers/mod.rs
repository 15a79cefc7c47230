// src/presentation/http/controllers/mod.rs
pub mod api_logs;
