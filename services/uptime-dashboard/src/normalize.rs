//! Reshaping of raw monitor records into display-ready values
//!
//! Everything here is pure: no I/O, no clocks, no shared state.

use std::collections::BTreeMap;
use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Serialize;

use crate::model::{LogEntry, MonitorRecord, ResponseTime};
use crate::status::{translate_status, StatusContext};

const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DEFAULT_UPTIME_RATIO: &str = "0-0";
const MISSING: &str = "N/A";

/// Monitors of one fetch, keyed and sorted by friendly name
#[derive(Debug, Clone, Default)]
pub struct MonitorIndex {
    monitors: BTreeMap<String, MonitorRecord>,
}

impl MonitorIndex {
    pub fn get(&self, name: &str) -> Option<&MonitorRecord> {
        self.monitors.get(name)
    }

    /// Names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.monitors.keys().cloned().collect()
    }

    pub fn first(&self) -> Option<&MonitorRecord> {
        self.monitors.values().next()
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

/// Build the name lookup. A later record with a repeated name replaces the earlier one.
pub fn index(records: &[MonitorRecord]) -> MonitorIndex {
    let mut monitors = BTreeMap::new();
    for record in records {
        if let Some(previous) = monitors.insert(record.friendly_name.clone(), record.clone()) {
            tracing::warn!(
                "Duplicate monitor name '{}' (ids {:?} and {:?}); keeping the later one",
                record.friendly_name,
                previous.id,
                record.id
            );
        }
    }
    MonitorIndex { monitors }
}

/// 7-day and 30-day uptime percentages; `None` when the provider omitted a segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UptimeRatios {
    pub day7: Option<String>,
    pub day30: Option<String>,
}

impl UptimeRatios {
    pub fn display_day7(&self) -> String {
        display_percentage(self.day7.as_deref())
    }

    pub fn display_day30(&self) -> String {
        display_percentage(self.day30.as_deref())
    }

    pub fn day7_f64(&self) -> Option<f64> {
        self.day7.as_deref().and_then(|v| v.trim().parse().ok())
    }

    pub fn day30_f64(&self) -> Option<f64> {
        self.day30.as_deref().and_then(|v| v.trim().parse().ok())
    }
}

fn display_percentage(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("{}%", v),
        None => MISSING.to_string(),
    }
}

/// Split a `"<7day>-<30day>"` ratio string. Absent or empty input reads as `"0-0"`.
pub fn parse_uptime(ratio: Option<&str>) -> UptimeRatios {
    let ratio = match ratio {
        Some(r) if !r.is_empty() => r,
        _ => DEFAULT_UPTIME_RATIO,
    };
    let mut segments = ratio.split('-').map(str::to_string);
    UptimeRatios {
        day7: segments.next(),
        day30: segments.next(),
    }
}

/// One point of the response-time chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value_ms: u64,
}

/// Response times as a time-indexed series, in input order
pub fn to_series(response_times: Option<&[ResponseTime]>) -> Vec<SeriesPoint> {
    response_times
        .unwrap_or_default()
        .iter()
        .filter_map(|sample| match DateTime::from_timestamp(sample.datetime, 0) {
            Some(timestamp) => Some(SeriesPoint {
                timestamp,
                value_ms: sample.value,
            }),
            None => {
                tracing::debug!(
                    "Skipping response time with invalid timestamp {}",
                    sample.datetime
                );
                None
            }
        })
        .collect()
}

/// One row of the event log table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRow {
    pub event: String,
    pub timestamp: String,
    pub details: String,
}

/// Event log rows with timestamps in local time, in input order
pub fn to_log_table(logs: Option<&[LogEntry]>) -> Vec<LogRow> {
    to_log_table_in(logs, &Local)
}

/// [`to_log_table`] with timestamps rendered in `tz`
pub fn to_log_table_in<Tz>(logs: Option<&[LogEntry]>, tz: &Tz) -> Vec<LogRow>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    logs.unwrap_or_default()
        .iter()
        .map(|entry| LogRow {
            event: translate_status(entry.kind, StatusContext::Log).to_string(),
            timestamp: format_timestamp(entry.datetime, tz),
            details: entry
                .reason
                .as_ref()
                .and_then(|reason| reason.detail.clone())
                .unwrap_or_else(|| MISSING.to_string()),
        })
        .collect()
}

fn format_timestamp<Tz>(epoch_seconds: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_opt(epoch_seconds, 0).earliest() {
        Some(datetime) => datetime.format(LOG_TIMESTAMP_FORMAT).to_string(),
        None => MISSING.to_string(),
    }
}
