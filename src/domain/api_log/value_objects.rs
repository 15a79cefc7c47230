use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiLogId(Uuid);

impl ApiLogId {
    /// Fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ApiLogId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ApiLogId> for Uuid {
    fn from(value: ApiLogId) -> Self {
        value.0
    }
}

impl fmt::Display for ApiLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
