use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::aggregate::{InvalidArgument, RosterError};
use super::domain::{Employee, EmployeeId, Position, PositionId};
use super::shared::SharedRoster;

/// Router builder exposing the roster operations over HTTP.
pub fn roster_router(roster: SharedRoster) -> Router {
    Router::new()
        .route(
            "/api/v1/employees",
            get(list_employees_handler).post(add_employee_handler),
        )
        .route(
            "/api/v1/employees/:employee_id",
            get(get_employee_handler).delete(remove_employee_handler),
        )
        .route(
            "/api/v1/employees/:employee_id/salary",
            put(update_salary_handler),
        )
        .route(
            "/api/v1/employees/:employee_id/position",
            put(update_position_handler),
        )
        .route("/api/v1/payroll/total", get(payroll_total_handler))
        .route("/api/v1/positions", get(list_positions_handler))
        .route("/api/v1/positions/:position_id", put(define_position_handler))
        .route(
            "/api/v1/positions/:position_id/salary-check",
            post(salary_check_handler),
        )
        .with_state(roster)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryUpdateRequest {
    pub salary: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionUpdateRequest {
    pub position_id: PositionId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionDefinitionRequest {
    pub name: String,
    pub min_salary: f64,
    pub max_salary: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryCheckRequest {
    pub salary: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalaryCheckResponse {
    pub valid: bool,
    pub position: Position,
}

pub(crate) fn status_for(error: &RosterError) -> StatusCode {
    match error {
        RosterError::DuplicateEmployee { .. } => StatusCode::CONFLICT,
        RosterError::EmployeeNotFound { .. } => StatusCode::NOT_FOUND,
        RosterError::InvalidArgument(_) | RosterError::InvalidSalary { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        RosterError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub(crate) fn error_response(error: RosterError) -> Response {
    let payload = json!({
        "error": error.to_string(),
        "kind": error.kind(),
    });
    (status_for(&error), Json(payload)).into_response()
}

fn respond<T: Serialize>(status: StatusCode, result: Result<T, RosterError>) -> Response {
    match result {
        Ok(body) => (status, Json(body)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_employees_handler(State(roster): State<SharedRoster>) -> Response {
    respond(StatusCode::OK, roster.employees())
}

pub(crate) async fn add_employee_handler(
    State(roster): State<SharedRoster>,
    Json(employee): Json<Employee>,
) -> Response {
    respond(StatusCode::CREATED, roster.add_employee(employee))
}

pub(crate) async fn get_employee_handler(
    State(roster): State<SharedRoster>,
    Path(employee_id): Path<String>,
) -> Response {
    respond(StatusCode::OK, roster.employee(&EmployeeId(employee_id)))
}

pub(crate) async fn remove_employee_handler(
    State(roster): State<SharedRoster>,
    Path(employee_id): Path<String>,
) -> Response {
    respond(StatusCode::OK, roster.remove_employee(&EmployeeId(employee_id)))
}

pub(crate) async fn update_salary_handler(
    State(roster): State<SharedRoster>,
    Path(employee_id): Path<String>,
    Json(request): Json<SalaryUpdateRequest>,
) -> Response {
    let id = EmployeeId(employee_id);
    respond(
        StatusCode::OK,
        roster.update_employee_salary(&id, request.salary),
    )
}

pub(crate) async fn update_position_handler(
    State(roster): State<SharedRoster>,
    Path(employee_id): Path<String>,
    Json(request): Json<PositionUpdateRequest>,
) -> Response {
    let id = EmployeeId(employee_id);
    respond(
        StatusCode::OK,
        roster.update_employee_position(&id, &request.position_id),
    )
}

pub(crate) async fn payroll_total_handler(State(roster): State<SharedRoster>) -> Response {
    respond(StatusCode::OK, roster.payroll_total())
}

pub(crate) async fn list_positions_handler(State(roster): State<SharedRoster>) -> Response {
    respond(StatusCode::OK, roster.positions())
}

pub(crate) async fn define_position_handler(
    State(roster): State<SharedRoster>,
    Path(position_id): Path<String>,
    Json(request): Json<PositionDefinitionRequest>,
) -> Response {
    let position = Position::new(
        position_id,
        request.name,
        request.min_salary,
        request.max_salary,
    );
    let stored = position.clone();
    respond(
        StatusCode::OK,
        roster.define_position(position).map(|_| stored),
    )
}

pub(crate) async fn salary_check_handler(
    State(roster): State<SharedRoster>,
    Path(position_id): Path<String>,
    Json(request): Json<SalaryCheckRequest>,
) -> Response {
    let id = PositionId(position_id);
    match roster.check_salary(&id, request.salary) {
        Ok((valid, position)) => {
            (StatusCode::OK, Json(SalaryCheckResponse { valid, position })).into_response()
        }
        Err(RosterError::InvalidArgument(InvalidArgument::UnknownPosition(id))) => {
            let payload = json!({
                "error": format!("position {id} is not defined"),
                "kind": "position_not_found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}
