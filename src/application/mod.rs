pub mod auth;
pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationResult;
