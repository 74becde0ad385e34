use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
pub struct SendOtpParams {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email required"))]
    pub email: String,
}

/// Both fields share one message so a missing email and a missing code
/// read the same to the client.
#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpParams {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and OTP are required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and OTP are required"))]
    pub otp: String,
    pub new_password: Option<String>,
}
