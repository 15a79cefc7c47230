//! Bearer-guarded ingestion service for API call logs.
//!
//! `POST /api/api-logs` accepts one log record or an array of them, projects
//! the interesting request/response fields into columns, stores everything in
//! a single bulk insert and answers with the generated ids.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
