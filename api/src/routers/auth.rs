use axum::{Router, extract::State, response::IntoResponse, routing::post};

use app::core::{issue_otp, verify_otp};
use app::state::AppState;
use models::params::otp::{SendOtpParams, VerifyOtpParams};

use crate::ApiResponse;
use crate::error::ApiError;
use crate::extractor::{Json, Valid};

/// Issues a fresh passcode for the address and emails it. The code itself
/// never appears in the response body.
#[utoipa::path(
    post,
    path = "/api/send-otp",
    request_body = SendOtpParams,
    responses(
        (status = 200, description = "OTP issued and dispatched", body = ApiResponse<String>),
        (status = 400, description = "Missing email"),
        (status = 500, description = "Mail dispatch failed"),
    ),
    tag = "auth",
)]
#[axum::debug_handler]
pub async fn send_otp_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<SendOtpParams>>,
) -> Result<impl IntoResponse, ApiError> {
    issue_otp(&state.otp, state.mailer.as_ref(), &params.email).await?;

    Ok(Json(ApiResponse::success(
        "OTP sent successfully",
        None::<String>,
    )))
}

/// Verifies a submitted code, consuming it on success. An optional new
/// password is forwarded to the account collaborator.
#[utoipa::path(
    post,
    path = "/api/verify-otp",
    request_body = VerifyOtpParams,
    responses(
        (status = 200, description = "OTP verified and consumed", body = ApiResponse<String>),
        (status = 400, description = "Missing fields or invalid/expired code"),
    ),
    tag = "auth",
)]
#[axum::debug_handler]
pub async fn verify_otp_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<VerifyOtpParams>>,
) -> Result<impl IntoResponse, ApiError> {
    verify_otp(
        &state.otp,
        state.passwords.as_ref(),
        &params.email,
        &params.otp,
        params.new_password.as_deref(),
    )
    .await?;

    Ok(Json(ApiResponse::success(
        "OTP verified successfully",
        None::<String>,
    )))
}

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/send-otp", post(send_otp_post))
        .route("/verify-otp", post(verify_otp_post))
}
