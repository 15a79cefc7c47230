// src/application/commands/api_logs/service.rs
use std::sync::Arc;

use crate::domain::api_log::ApiLogRepository;

pub struct ApiLogCommandService {
    pub(super) repo: Arc<dyn ApiLogRepository>,
}

impl ApiLogCommandService {
    pub fn new(repo: Arc<dyn ApiLogRepository>) -> Self {
        Self { repo }
    }
}
