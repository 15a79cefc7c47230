use crate::application::ports::security::SecretStore;

/// Secret captured from configuration at startup.
#[derive(Clone, Default)]
pub struct ConfiguredSecretStore {
    secret: Option<String>,
}

impl ConfiguredSecretStore {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
        }
    }
}

impl SecretStore for ConfiguredSecretStore {
    fn bearer_secret(&self) -> Option<String> {
        self.secret.clone()
    }
}

impl std::fmt::Debug for ConfiguredSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguredSecretStore")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
