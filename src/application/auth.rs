// src/application/auth.rs
use crate::application::ports::security::SecretStore;
use std::sync::Arc;
use thiserror::Error;

pub const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("missing or malformed Authorization header")]
    MissingOrMalformedAuth,
    #[error("invalid bearer token")]
    InvalidToken,
}

impl AuthError {
    pub const fn kind(self) -> &'static str {
        match self {
            Self::MissingOrMalformedAuth => "MissingOrMalformedAuth",
            Self::InvalidToken => "InvalidToken",
        }
    }
}

/// Shared-secret check for `Authorization: Bearer <secret>`.
///
/// The header must match `"Bearer " + secret` exactly: the scheme is case
/// sensitive and nothing is trimmed. The secret is re-read from the store on
/// every check.
pub struct BearerGuard {
    secrets: Arc<dyn SecretStore>,
}

impl BearerGuard {
    pub fn new(secrets: Arc<dyn SecretStore>) -> Self {
        Self { secrets }
    }

    pub fn check(&self, header: Option<&str>) -> Result<(), AuthError> {
        let Some(presented) = header.filter(|value| value.starts_with(BEARER_PREFIX)) else {
            tracing::debug!(
                kind = AuthError::MissingOrMalformedAuth.kind(),
                "rejecting request"
            );
            return Err(AuthError::MissingOrMalformedAuth);
        };

        let Some(secret) = self.secrets.bearer_secret() else {
            tracing::warn!("no bearer secret configured; rejecting request");
            return Err(AuthError::InvalidToken);
        };

        let expected = format!("{BEARER_PREFIX}{secret}");
        if digest_eq(presented.as_bytes(), expected.as_bytes()) {
            Ok(())
        } else {
            tracing::debug!(kind = AuthError::InvalidToken.kind(), "rejecting request");
            Err(AuthError::InvalidToken)
        }
    }
}

// blake3::Hash equality runs in constant time.
fn digest_eq(left: &[u8], right: &[u8]) -> bool {
    blake3::hash(left) == blake3::hash(right)
}
