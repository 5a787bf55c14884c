//! Web dashboard: HTML page and JSON API, one render cycle per request

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::fetcher::Fetcher;
use crate::normalize::SeriesPoint;
use crate::view::{self, DashboardView, MonitorView};

const CHART_WIDTH: f64 = 900.0;
const CHART_HEIGHT: f64 = 240.0;

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub fetcher: Arc<Fetcher>,
    pub api_key: Arc<str>,
}

impl DashboardState {
    async fn render(&self, selection: Option<&str>) -> DashboardView {
        let fetched = self.fetcher.fetch(&self.api_key).await;
        view::render_cycle(&fetched, selection)
    }
}

#[derive(Debug, Deserialize)]
struct SelectQuery {
    monitor: Option<String>,
}

/// Build the dashboard axum router
pub fn build_router(fetcher: Arc<Fetcher>, api_key: &str) -> Router {
    let dashboard_state = DashboardState {
        fetcher,
        api_key: Arc::from(api_key),
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/monitors", get(monitors_handler))
        .route("/api/monitors/{name}", get(monitor_handler))
        .route("/health", get(health_handler))
        .with_state(dashboard_state)
}

async fn index_handler(
    State(dashboard): State<DashboardState>,
    Query(query): Query<SelectQuery>,
) -> impl IntoResponse {
    let view = dashboard.render(query.monitor.as_deref()).await;
    Html(render_page(&view))
}

async fn monitors_handler(State(dashboard): State<DashboardState>) -> Response {
    match dashboard.render(None).await {
        DashboardView::Ready { names, .. } => axum::Json(names).into_response(),
        unavailable => (StatusCode::BAD_GATEWAY, axum::Json(unavailable)).into_response(),
    }
}

async fn monitor_handler(
    State(dashboard): State<DashboardState>,
    Path(name): Path<String>,
) -> Response {
    match dashboard.render(Some(&name)).await {
        DashboardView::Ready { selected, .. } if selected.name == name => {
            axum::Json(selected).into_response()
        }
        DashboardView::Ready { .. } => (
            StatusCode::NOT_FOUND,
            format!("No monitor named '{}'", name),
        )
            .into_response(),
        unavailable => (StatusCode::BAD_GATEWAY, axum::Json(unavailable)).into_response(),
    }
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

fn render_page(view: &DashboardView) -> String {
    let content = match view {
        DashboardView::Ready { names, selected } => render_monitor(names, selected),
        DashboardView::Unavailable { error, message } => {
            let error_block = error
                .as_deref()
                .map(|e| format!(r#"<div class="error">{}</div>"#, escape_html(e)))
                .unwrap_or_default();
            format!(
                r#"{}<div class="warning">{}</div>"#,
                error_block,
                escape_html(message)
            )
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>UptimeRobot Dashboard</title>
    <style>
        body {{ font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem; }}
        table {{ width: 100%; border-collapse: collapse; }}
        th, td {{ padding: 0.5rem; text-align: left; border-bottom: 1px solid #dee2e6; }}
        .kpis {{ display: flex; gap: 2rem; }}
        .kpi {{ flex: 1; }}
        .kpi .value {{ font-size: 1.8em; }}
        .error {{ color: #721c24; background-color: #f8d7da; padding: 0.75rem; border-radius: 0.25rem; }}
        .warning {{ color: #856404; background-color: #fff3cd; padding: 0.75rem; border-radius: 0.25rem; margin-top: 0.5rem; }}
        .info {{ color: #0c5460; background-color: #d1ecf1; padding: 0.75rem; border-radius: 0.25rem; }}
    </style>
</head>
<body>
    <h1>🤖 UptimeRobot Monitor Dashboard</h1>
    {content}
</body>
</html>"#,
        content = content,
    )
}

fn render_monitor(names: &[String], monitor: &MonitorView) -> String {
    let options: String = names
        .iter()
        .map(|name| {
            let selected = if *name == monitor.name { " selected" } else { "" };
            format!(
                r#"<option value="{0}"{1}>{0}</option>"#,
                escape_html(name),
                selected
            )
        })
        .collect();

    let response_section = if monitor.response_times.is_empty() {
        format!(
            r#"<div class="info">{}</div>"#,
            view::NO_RESPONSE_TIMES_MESSAGE
        )
    } else {
        render_chart(&monitor.response_times)
    };

    let log_section = if monitor.logs.is_empty() {
        format!(r#"<div class="info">{}</div>"#, view::NO_LOGS_MESSAGE)
    } else {
        let rows: String = monitor
            .logs
            .iter()
            .map(|row| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape_html(&row.event),
                    escape_html(&row.timestamp),
                    escape_html(&row.details)
                )
            })
            .collect();
        format!(
            "<table><thead><tr><th>Event</th><th>Timestamp</th><th>Details</th></tr></thead><tbody>{}</tbody></table>",
            rows
        )
    };

    let raw = serde_json::to_string_pretty(&monitor.raw).unwrap_or_default();

    format!(
        r#"<form method="get" action="/">
        <label for="monitor">Select a Monitor</label>
        <select id="monitor" name="monitor" onchange="this.form.submit()">{options}</select>
        <noscript><button type="submit">Show</button></noscript>
    </form>
    <h2>Monitor: {name}</h2>
    <p><strong>URL:</strong> <code>{url}</code></p>
    <section class="kpis">
        <div class="kpi"><div>Current Status</div><div class="value">{status}</div></div>
        <div class="kpi"><div>7-Day Uptime</div><div class="value">{day7}</div></div>
        <div class="kpi"><div>30-Day Uptime</div><div class="value">{day30}</div></div>
    </section>
    <hr>
    <section>
        <h3>Recent Response Times (ms)</h3>
        {response_section}
    </section>
    <section>
        <h3>Recent Events</h3>
        {log_section}
    </section>
    <details>
        <summary>Show Raw API Data for this Monitor</summary>
        <pre>{raw}</pre>
    </details>"#,
        options = options,
        name = escape_html(&monitor.name),
        url = escape_html(&monitor.url),
        status = monitor.status,
        day7 = escape_html(&monitor.uptime.display_day7()),
        day30 = escape_html(&monitor.uptime.display_day30()),
        response_section = response_section,
        log_section = log_section,
        raw = escape_html(&raw),
    )
}

/// Inline SVG line chart, points placed in series order
fn render_chart(series: &[SeriesPoint]) -> String {
    let max = series.iter().map(|p| p.value_ms).max().unwrap_or(0).max(1) as f64;
    let step = if series.len() > 1 {
        CHART_WIDTH / (series.len() - 1) as f64
    } else {
        0.0
    };

    let points: Vec<String> = series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = i as f64 * step;
            let y = CHART_HEIGHT - (p.value_ms as f64 / max) * CHART_HEIGHT;
            format!("{:.1},{:.1}", x, y)
        })
        .collect();

    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return String::new(),
    };

    format!(
        r##"<svg viewBox="0 0 {w} {h}" width="100%" height="{h}" role="img" aria-label="Response time chart">
            <polyline fill="none" stroke="#0d6efd" stroke-width="2" points="{points}"/>
        </svg>
        <p>{count} samples from {from} to {to} UTC, peak {max} ms</p>"##,
        w = CHART_WIDTH,
        h = CHART_HEIGHT,
        points = points.join(" "),
        count = series.len(),
        from = first.timestamp.format("%Y-%m-%d %H:%M:%S"),
        to = last.timestamp.format("%Y-%m-%d %H:%M:%S"),
        max = max,
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
