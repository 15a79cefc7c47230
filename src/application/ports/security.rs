/// Read access to the shared ingestion secret.
pub trait SecretStore: Send + Sync {
    /// The expected bearer secret, or `None` when nothing is configured.
    fn bearer_secret(&self) -> Option<String>;
}
