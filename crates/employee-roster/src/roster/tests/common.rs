use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use serde_json::Value;

use crate::roster::domain::{Employee, Position, PositionId};
use crate::roster::{roster_router, Roster, SharedRoster};

pub(super) fn junior_developer() -> Position {
    Position::new("1", "Junior Developer", 30000.0, 50000.0)
}

pub(super) fn senior_developer() -> Position {
    Position::new("2", "Senior Developer", 60000.0, 90000.0)
}

pub(super) fn junior_id() -> PositionId {
    junior_developer().id
}

pub(super) fn senior_id() -> PositionId {
    senior_developer().id
}

pub(super) fn john() -> Employee {
    Employee::new("1", "John Doe", &junior_id(), 40000.0)
}

pub(super) fn jane() -> Employee {
    Employee::new("2", "Jane Smith", &senior_id(), 70000.0)
}

/// Roster with both developer positions defined and no employees.
pub(super) fn staffed_positions() -> Roster {
    let mut roster = Roster::new();
    roster
        .define_position(junior_developer())
        .expect("junior band is valid");
    roster
        .define_position(senior_developer())
        .expect("senior band is valid");
    roster
}

/// Roster with both positions defined and John Doe already on it.
pub(super) fn roster_with_john() -> Roster {
    let mut roster = staffed_positions();
    roster.add_employee(john()).expect("john is valid");
    roster
}

pub(super) fn shared_with_john() -> SharedRoster {
    SharedRoster::new(roster_with_john())
}

pub(super) fn router_with_john() -> (axum::Router, SharedRoster) {
    let shared = shared_with_john();
    (roster_router(shared.clone()), shared)
}

pub(super) fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .expect("valid request")
}

pub(super) fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
