//! BDD step definitions for the uptime dashboard

pub mod dashboard_steps;
pub mod normalize_steps;
