//! UptimeRobot `getMonitors` response schema

use serde::{Deserialize, Serialize};

/// Top-level body of a `getMonitors` response
#[derive(Debug, Clone, Deserialize)]
pub struct GetMonitorsResponse {
    pub stat: String,
    #[serde(default)]
    pub monitors: Vec<MonitorRecord>,
    /// Either an object with a `message` field or a bare string
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl GetMonitorsResponse {
    pub fn is_ok(&self) -> bool {
        self.stat == "ok"
    }

    /// Human-readable error reported by the provider
    pub fn error_message(&self) -> String {
        match &self.error {
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(serde_json::Value::Object(fields)) => match fields.get("message") {
                Some(serde_json::Value::String(message)) => message.clone(),
                _ => serde_json::Value::Object(fields.clone()).to_string(),
            },
            Some(serde_json::Value::Null) | None => "Unknown error".to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// One monitored endpoint as returned by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub friendly_name: String,
    #[serde(default)]
    pub url: String,
    pub status: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_uptime_ratio: Option<String>,
    /// `None` when the provider omitted the history or sent `null`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_times: Option<Vec<ResponseTime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<LogEntry>>,
    /// Provider fields this schema does not model (`type`, `interval`, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A single response-time sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTime {
    /// Epoch seconds
    #[serde(alias = "timestamp")]
    pub datetime: i64,
    /// Milliseconds
    pub value: u64,
}

/// A single entry of a monitor's event log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "type")]
    pub kind: i64,
    /// Epoch seconds
    pub datetime: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<LogReason>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogReason {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
