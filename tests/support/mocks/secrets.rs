use api_log_ingest::application::ports::security::SecretStore;

pub const TEST_TOKEN: &str = "valid-bearer-token-12345";
pub const VALID_BEARER: &str = "Bearer valid-bearer-token-12345";

#[derive(Clone, Debug)]
pub struct StaticSecret(pub Option<String>);

impl StaticSecret {
    pub fn test_token() -> Self {
        Self(Some(TEST_TOKEN.to_string()))
    }
}

impl SecretStore for StaticSecret {
    fn bearer_secret(&self) -> Option<String> {
        self.0.clone()
    }
}
