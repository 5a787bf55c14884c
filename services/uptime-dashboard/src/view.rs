//! Render snapshots: the data handed to the presentation layer

use serde::Serialize;

use crate::error::FetchError;
use crate::fetcher::FetchResult;
use crate::model::MonitorRecord;
use crate::normalize::{self, LogRow, SeriesPoint, UptimeRatios};
use crate::status::{translate_status, StatusContext, StatusLabel};

pub const NO_DATA_MESSAGE: &str = "No monitor data found or an error occurred.";
pub const NO_RESPONSE_TIMES_MESSAGE: &str = "No response time data available for this monitor.";
pub const NO_LOGS_MESSAGE: &str = "No logs available for this monitor.";

/// Everything shown for one selected monitor
#[derive(Debug, Clone, Serialize)]
pub struct MonitorView {
    pub id: Option<u64>,
    pub name: String,
    pub url: String,
    pub status: StatusLabel,
    pub uptime: UptimeRatios,
    pub response_times: Vec<SeriesPoint>,
    pub logs: Vec<LogRow>,
    /// Informational notes for sections without data
    pub notices: Vec<String>,
    /// The record as received, including fields without a typed counterpart
    pub raw: serde_json::Value,
}

impl MonitorView {
    pub fn from_record(record: &MonitorRecord) -> Self {
        let response_times = normalize::to_series(record.response_times.as_deref());
        let logs = normalize::to_log_table(record.logs.as_deref());

        let mut notices = Vec::new();
        if response_times.is_empty() {
            notices.push(NO_RESPONSE_TIMES_MESSAGE.to_string());
        }
        if logs.is_empty() {
            notices.push(NO_LOGS_MESSAGE.to_string());
        }

        Self {
            id: record.id,
            name: record.friendly_name.clone(),
            url: record.url.clone(),
            status: translate_status(record.status, StatusContext::Monitor),
            uptime: normalize::parse_uptime(record.custom_uptime_ratio.as_deref()),
            response_times,
            logs,
            notices,
            raw: serde_json::to_value(record).unwrap_or(serde_json::Value::Null),
        }
    }
}

/// Result of one render cycle
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardView {
    /// Monitors are available; `selected` is the one being shown
    Ready {
        names: Vec<String>,
        selected: MonitorView,
    },
    /// Nothing to show: the fetch failed or returned no monitors
    Unavailable {
        error: Option<String>,
        message: String,
    },
}

impl DashboardView {
    fn unavailable(error: Option<&FetchError>) -> Self {
        DashboardView::Unavailable {
            error: error.map(|e| e.to_string()),
            message: NO_DATA_MESSAGE.to_string(),
        }
    }
}

/// Index the fetched monitors and reshape the selected one.
///
/// An unknown or absent selection falls back to the first monitor by name.
pub fn render_cycle(fetched: &FetchResult, selection: Option<&str>) -> DashboardView {
    let monitors = match fetched {
        Ok(monitors) => monitors,
        Err(e) => return DashboardView::unavailable(Some(e)),
    };

    let index = normalize::index(monitors);
    let selected = selection
        .and_then(|name| index.get(name))
        .or_else(|| index.first());

    match selected {
        Some(record) => DashboardView::Ready {
            names: index.names(),
            selected: MonitorView::from_record(record),
        },
        None => {
            tracing::warn!("{}", NO_DATA_MESSAGE);
            DashboardView::unavailable(None)
        }
    }
}
