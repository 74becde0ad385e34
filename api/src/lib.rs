mod error;
mod extractor;
mod init;
mod openapi;

pub mod models;
pub mod routers;

pub use init::{setup_config, setup_router, setup_state};
use serde::Serialize;
use utoipa::ToSchema;

/// A generic envelope for API responses.
///
/// Successful responses carry `success: true`, a human-readable message and
/// an optional payload. Failures are produced by the error type instead and
/// carry an `error` field in place of `message` and `data`.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse<T: Serialize> {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful API response.
    ///
    /// # Arguments
    ///
    /// * `message` - A descriptive success message.
    /// * `data` - Optional data payload associated with the success.
    pub fn success(message: &str, data: Option<T>) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}
