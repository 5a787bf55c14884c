//! UptimeRobot status codes and their display labels

use serde::Serialize;
use std::fmt;

/// Status codes reported by the provider for monitors and log entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Paused,
    NotCheckedYet,
    Up,
    SeemsDown,
    Down,
}

impl StatusCode {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(StatusCode::Paused),
            1 => Some(StatusCode::NotCheckedYet),
            2 => Some(StatusCode::Up),
            8 => Some(StatusCode::SeemsDown),
            9 => Some(StatusCode::Down),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusCode::Paused => "Paused",
            StatusCode::NotCheckedYet => "Not Checked Yet",
            StatusCode::Up => "Up",
            StatusCode::SeemsDown => "Seems Down",
            StatusCode::Down => "Down",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            StatusCode::Paused => "⏸️",
            StatusCode::NotCheckedYet => "❔",
            StatusCode::Up => "✅",
            StatusCode::SeemsDown => "⚠️",
            StatusCode::Down => "🔥",
        }
    }
}

/// Where a status code is being shown; picks the fallback for unknown codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusContext {
    Monitor,
    Log,
}

impl StatusContext {
    fn fallback(self) -> StatusLabel {
        match self {
            StatusContext::Monitor => StatusLabel {
                label: "Unknown",
                icon: "❓",
            },
            StatusContext::Log => StatusLabel {
                label: "Event",
                icon: "ℹ️",
            },
        }
    }
}

/// Display label and icon for a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusLabel {
    pub label: &'static str,
    pub icon: &'static str,
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.label)
    }
}

/// Translate a raw provider code, never failing on unknown values
pub fn translate_status(code: i64, context: StatusContext) -> StatusLabel {
    match StatusCode::from_code(code) {
        Some(status) => StatusLabel {
            label: status.label(),
            icon: status.icon(),
        },
        None => context.fallback(),
    }
}
