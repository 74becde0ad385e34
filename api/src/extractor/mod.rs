use axum::{
    extract::{FromRequest, Json as AxumJson, Request},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::error::ApiError;

/// JSON extractor whose rejection flows through [`ApiError`], so malformed
/// bodies produce the same error envelope as everything else.
#[derive(FromRequest)]
#[from_request(via(AxumJson), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T> IntoResponse for Json<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

impl<T: Validate> Validate for Json<T> {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        self.0.validate()
    }
}

/// Runs `validate()` on the extracted value, rejecting the request before
/// the handler body runs.
pub struct Valid<T>(pub T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: FromRequest<S, Rejection = ApiError> + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let inner = T::from_request(req, state).await?;
        inner.validate()?;
        Ok(Self(inner))
    }
}
