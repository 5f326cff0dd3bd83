use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use roster_core::{Employee, NewEmployee};
use roster_core::controller::Controller;
use roster_core::response::CoreResponse;

use crate::app::response::{EmployeeListResponse, EmployeeResponse, ErrorBody};
use crate::app::state::AppState;

pub struct EmployeeController;

impl Controller<AppState> for EmployeeController {
    fn router() -> Router<AppState> {
        Router::new().route("/employees", get(index).post(store))
    }
}

/// List every employee
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee]),
        (status = 500, description = "Database error", body = ErrorBody),
    )
)]
pub async fn index(State(state): State<AppState>) -> EmployeeListResponse {
    match state.employees.list_all().await {
        Ok(employees) => CoreResponse::Ok(employees),
        Err(err) => err.into(),
    }
}

/// Create an employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Created employee", body = Employee),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 500, description = "Database error", body = ErrorBody),
    )
)]
pub async fn store(
    State(state): State<AppState>,
    Json(input): Json<NewEmployee>,
) -> EmployeeResponse {
    if let Err(err) = input.validate() {
        return err.into();
    }

    match state
        .employees
        .insert_one(&input.name, &input.phone, input.is_admin())
        .await
    {
        Ok(employee) => CoreResponse::Created(employee),
        Err(err) => err.into(),
    }
}
