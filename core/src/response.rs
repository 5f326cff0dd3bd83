use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::error::{AccessError, ValidationError};

/// Error payload returned by every failing endpoint.
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl ToString) -> Self {
        ErrorBody { error: error.to_string() }
    }
}

pub enum CoreResponse<T>
where
    T: serde::Serialize,
{
    Ok(T),

    Created(T),

    BadRequest(ErrorBody),

    InternalServerError(ErrorBody),
}

impl<T> IntoResponse for CoreResponse<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Ok(data) => (StatusCode::OK, Json(data)).into_response(),
            Self::Created(data) => (StatusCode::CREATED, Json(data)).into_response(),
            Self::BadRequest(error) => (StatusCode::BAD_REQUEST, Json(error)).into_response(),
            Self::InternalServerError(error) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            }
        }
    }
}

impl<T> From<AccessError> for CoreResponse<T>
where
    T: serde::Serialize,
{
    fn from(err: AccessError) -> Self {
        tracing::error!(error = %err, "employee request failed");
        Self::InternalServerError(ErrorBody::new(err))
    }
}

impl<T> From<ValidationError> for CoreResponse<T>
where
    T: serde::Serialize,
{
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(ErrorBody::new(err))
    }
}
