//! BDD step definitions for the dashboard feature

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use cucumber::{then, when};
use tower::ServiceExt;
use uptime_dashboard::dashboard::build_router;

use crate::world::DashboardWorld;

#[when(expr = "the dashboard path {string} is requested")]
async fn request_path(world: &mut DashboardWorld, path: String) {
    let fetcher = Arc::clone(world.fetcher.as_ref().expect("provider not set"));
    let app = build_router(fetcher, "u123");
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    world.response_status = Some(response.status().as_u16());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.response_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

#[then(expr = "the response status is {int}")]
fn response_status(world: &mut DashboardWorld, status: u16) {
    assert_eq!(world.response_status, Some(status));
}

#[then(expr = "the response contains {string}")]
fn response_contains(world: &mut DashboardWorld, text: String) {
    let body = world.response_body.as_deref().expect("no response");
    assert!(body.contains(&text), "{body}");
}
