use axum::Json;
use utoipa::OpenApi;

use roster_core::{Employee, NewEmployee};

use crate::app::controller;
use crate::app::response::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(controller::index, controller::store),
    components(schemas(Employee, NewEmployee, ErrorBody)),
    info(description = "Employee directory API")
)]
pub struct MainApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(MainApiDoc::openapi())
}
