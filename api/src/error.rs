use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use validator::ValidationErrors;

use app::error::{OtpError, ProductStoreError};

use crate::models::response::ApiErrorResponse;

/// Catch-all request error. Anything that can become `anyhow::Error`
/// converts into this, and `into_response` maps the well-known failures
/// back to their proper status codes.
pub struct ApiError(pub anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = if let Some(errors) = self.0.downcast_ref::<ValidationErrors>() {
            (StatusCode::BAD_REQUEST, validation_message(errors))
        } else if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            (StatusCode::BAD_REQUEST, rejection.body_text())
        } else if let Some(err) = self.0.downcast_ref::<OtpError>() {
            match err {
                OtpError::InvalidOrExpired => (StatusCode::BAD_REQUEST, err.to_string()),
                OtpError::Dispatch(_) | OtpError::PasswordUpdate(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
                }
            }
        } else if let Some(err) = self.0.downcast_ref::<ProductStoreError>() {
            match err {
                ProductStoreError::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()),
            }
        } else {
            (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self.0);
        }

        (status, axum::Json(ApiErrorResponse::new(message))).into_response()
    }
}

/// The params carry one shared message per endpoint, so the first message
/// found is the collapsed client-visible one.
fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_values()
        .flatten()
        .find_map(|error| error.message.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| "Validation error".to_string())
}
