use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::nearby::NearbyError;

pub const INVALID_LOCATION: &str = "Invalid longitude, latitude, or altitude values";

pub enum ApiError {
    Validation(&'static str),
    Upstream(NearbyError),
}

impl From<NearbyError> for ApiError {
    fn from(e: NearbyError) -> Self {
        ApiError::Upstream(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            ApiError::Upstream(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };
        plain_text(status, format!("Error: {}", message))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

pub fn plain_text(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}
