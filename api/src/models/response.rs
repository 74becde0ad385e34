use serde::Serialize;

/// Body shape for every failed request, mirroring the success envelope with
/// an `error` string in place of `message` and `data`.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ApiErrorResponse {
    pub fn new(error: String) -> Self {
        Self {
            success: false,
            error,
        }
    }
}
