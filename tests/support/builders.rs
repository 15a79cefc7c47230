// tests/support/builders.rs
use api_log_ingest::domain::api_log::LogRecord;
use serde_json::{Value, json};

pub fn full_log() -> Value {
    json!({
        "client_ip": "192.168.1.1",
        "request": {
            "uri": "/api/test",
            "method": "GET",
            "headers": { "host": "example.com" },
            "url": "https://example.com/api/test"
        },
        "response": { "status": 200 }
    })
}

pub fn log_for(ip: &str, uri: &str, method: &str, status: i64) -> Value {
    json!({
        "client_ip": ip,
        "request": {
            "uri": uri,
            "method": method,
            "headers": { "host": "example.com" },
            "url": format!("https://example.com{uri}")
        },
        "response": { "status": status }
    })
}

pub fn nested_log() -> Value {
    json!({
        "client_ip": "192.168.1.1",
        "request": {
            "uri": "/api/complex",
            "method": "POST",
            "headers": {
                "host": "example.com",
                "user-agent": "Mozilla/5.0",
                "content-type": "application/json"
            },
            "body": { "data": { "nested": { "deep": { "value": "test" } } } }
        },
        "response": {
            "status": 200,
            "headers": { "content-type": "application/json" },
            "body": { "success": true }
        },
        "metadata": { "timestamp": "2024-01-01T00:00:00.000Z", "userId": "12345" }
    })
}

pub fn record(value: Value) -> LogRecord {
    serde_json::from_value(value).expect("log literal must be a json object")
}
