// tests/support/mocks/mod.rs
pub mod repos;
pub mod secrets;
pub mod time;

pub use repos::{FailingApiLogRepo, InMemoryApiLogRepo};
pub use secrets::{StaticSecret, TEST_TOKEN, VALID_BEARER};
pub use time::fixed_now;
