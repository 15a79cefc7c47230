// src/domain/api_log/record.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A raw API call log exactly as submitted by a caller.
///
/// Only a handful of nested fields are ever read out of it; everything else
/// rides along untouched into `metadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogRecord(Map<String, Value>);

impl LogRecord {
    pub fn client_ip(&self) -> Option<&str> {
        self.0.get("client_ip").and_then(Value::as_str)
    }

    pub fn request(&self) -> Option<&Map<String, Value>> {
        self.0.get("request").and_then(Value::as_object)
    }

    pub fn response(&self) -> Option<&Map<String, Value>> {
        self.0.get("response").and_then(Value::as_object)
    }

    pub fn request_uri(&self) -> Option<&str> {
        self.request_str("uri")
    }

    pub fn request_method(&self) -> Option<&str> {
        self.request_str("method")
    }

    pub fn request_url(&self) -> Option<&str> {
        self.request_str("url")
    }

    /// `request.headers.host`; each hop must be an object.
    pub fn request_host(&self) -> Option<&str> {
        let request = self.request()?;
        let headers = request.get("headers")?.as_object()?;
        headers.get("host")?.as_str()
    }

    /// `response.status`, provided it is a whole number that fits a 32-bit
    /// column. `200.0` counts as `200`.
    pub fn response_status(&self) -> Option<i32> {
        let response = self.response()?;
        let status = response.get("status")?;
        match status.as_i64() {
            Some(status) => i32::try_from(status).ok(),
            None => integral_i32(status.as_f64()?),
        }
    }

    fn request_str(&self, key: &str) -> Option<&str> {
        self.request()?.get(key)?.as_str()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn integral_i32(value: f64) -> Option<i32> {
    let in_range = (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&value);
    (in_range && value.fract() == 0.0).then(|| value as i32)
}

impl From<LogRecord> for Value {
    fn from(record: LogRecord) -> Self {
        Self::Object(record.0)
    }
}
