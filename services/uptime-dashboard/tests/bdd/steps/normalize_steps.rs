//! BDD step definitions for the normalizing feature

use chrono::Utc;
use cucumber::{given, then, when};
use uptime_dashboard::model::{LogEntry, LogReason, MonitorRecord};
use uptime_dashboard::normalize::{index, parse_uptime, to_log_table_in};
use uptime_dashboard::status::{translate_status, StatusContext};

use crate::world::DashboardWorld;

#[when(expr = "monitor status code {int} is translated")]
fn translate_monitor_status(world: &mut DashboardWorld, code: i64) {
    world.status = Some(translate_status(code, StatusContext::Monitor));
}

#[when(expr = "log status code {int} is translated")]
fn translate_log_status(world: &mut DashboardWorld, code: i64) {
    world.status = Some(translate_status(code, StatusContext::Log));
}

#[then(expr = "the status reads {string}")]
fn status_reads(world: &mut DashboardWorld, text: String) {
    let status = world.status.expect("nothing translated");
    assert_eq!(status.to_string(), text);
}

#[when(expr = "the uptime ratio {string} is parsed")]
fn parse_ratio(world: &mut DashboardWorld, ratio: String) {
    world.uptime = Some(parse_uptime(Some(&ratio)));
}

#[when("an absent uptime ratio is parsed")]
fn parse_absent_ratio(world: &mut DashboardWorld) {
    world.uptime = Some(parse_uptime(None));
}

#[then(expr = "the 7-day uptime is {string}")]
fn uptime_7_day(world: &mut DashboardWorld, expected: String) {
    let uptime = world.uptime.as_ref().expect("nothing parsed");
    assert_eq!(uptime.display_day7(), expected);
}

#[then(expr = "the 30-day uptime is {string}")]
fn uptime_30_day(world: &mut DashboardWorld, expected: String) {
    let uptime = world.uptime.as_ref().expect("nothing parsed");
    assert_eq!(uptime.display_day30(), expected);
}

#[given(expr = "a log entry of type {int} at {int} with detail {string}")]
fn log_entry_with_detail(world: &mut DashboardWorld, kind: i64, datetime: i64, detail: String) {
    world.records.push(record_with_log(LogEntry {
        kind,
        datetime,
        reason: Some(LogReason {
            code: None,
            detail: Some(detail),
        }),
        extra: Default::default(),
    }));
}

#[given(expr = "a log entry of type {int} at {int} without a reason")]
fn log_entry_without_reason(world: &mut DashboardWorld, kind: i64, datetime: i64) {
    world.records.push(record_with_log(LogEntry {
        kind,
        datetime,
        reason: None,
        extra: Default::default(),
    }));
}

fn record_with_log(entry: LogEntry) -> MonitorRecord {
    MonitorRecord {
        id: None,
        friendly_name: "logged".to_string(),
        url: String::new(),
        status: 2,
        custom_uptime_ratio: None,
        response_times: None,
        logs: Some(vec![entry]),
        extra: Default::default(),
    }
}

#[when("the log table is built in UTC")]
fn build_log_table(world: &mut DashboardWorld) {
    let logs: Vec<LogEntry> = world
        .records
        .iter()
        .flat_map(|r| r.logs.iter().flatten().cloned())
        .collect();
    world.log_rows = to_log_table_in(Some(logs.as_slice()), &Utc);
}

#[then(expr = "the log row reads {string} at {string} with details {string}")]
fn log_row_reads(world: &mut DashboardWorld, event: String, timestamp: String, details: String) {
    let row = world.log_rows.first().expect("no log rows");
    assert_eq!(row.event, event);
    assert_eq!(row.timestamp, timestamp);
    assert_eq!(row.details, details);
}

#[given(expr = "a monitor {string} with id {int}")]
fn monitor_with_id(world: &mut DashboardWorld, name: String, id: u64) {
    world.records.push(MonitorRecord {
        id: Some(id),
        friendly_name: name,
        url: String::new(),
        status: 2,
        custom_uptime_ratio: None,
        response_times: None,
        logs: None,
        extra: Default::default(),
    });
}

#[when("the monitors are indexed")]
fn monitors_indexed(world: &mut DashboardWorld) {
    world.index = Some(index(&world.records));
}

#[then(regex = r"^the index holds (\d+) monitors?$")]
fn index_holds(world: &mut DashboardWorld, count: usize) {
    let index = world.index.as_ref().expect("nothing indexed");
    assert_eq!(index.len(), count);
}

#[then(expr = "monitor {string} has id {int}")]
fn monitor_has_id(world: &mut DashboardWorld, name: String, id: u64) {
    let index = world.index.as_ref().expect("nothing indexed");
    assert_eq!(index.get(&name).and_then(|m| m.id), Some(id));
}
