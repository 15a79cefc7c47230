// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        auth::BearerGuard,
        commands::api_logs::ApiLogCommandService,
        ports::security::SecretStore,
    },
    domain::api_log::ApiLogRepository,
};

pub struct ApplicationServices {
    pub api_log_commands: Arc<ApiLogCommandService>,
    bearer_guard: BearerGuard,
}

impl ApplicationServices {
    pub fn new(api_log_repo: Arc<dyn ApiLogRepository>, secrets: Arc<dyn SecretStore>) -> Self {
        Self {
            api_log_commands: Arc::new(ApiLogCommandService::new(api_log_repo)),
            bearer_guard: BearerGuard::new(secrets),
        }
    }

    /// Check a raw `Authorization` header value against the ingestion secret.
    pub fn authorize_ingestion(&self, authorization: Option<&str>) -> ApplicationResult<()> {
        self.bearer_guard.check(authorization)?;
        Ok(())
    }
}
