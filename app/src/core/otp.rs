use chrono::{TimeDelta, Utc};
use rand::Rng;

use models::domains::otp::OtpRecord;

use crate::cache::OtpStore;
use crate::error::OtpError;
use crate::persistence::accounts::PasswordStore;
use crate::utils::email::Mailer;

/// How long an issued code stays valid.
pub const OTP_TTL_MINUTES: i64 = 10;

/// Six digits, never starting with zero.
pub fn generate_code() -> String {
    rand::rng().random_range(100_000..=999_999).to_string()
}

/// Issues a fresh code for `email`, overwriting any earlier record, and
/// dispatches it through the mailer.
///
/// The record is written before dispatch and is not rolled back when
/// dispatch fails; the next issuance overwrites it anyway. The code itself
/// travels only through the mail channel.
pub async fn issue_otp(store: &OtpStore, mailer: &dyn Mailer, email: &str) -> Result<(), OtpError> {
    let code = generate_code();
    let expires_at = Utc::now() + TimeDelta::minutes(OTP_TTL_MINUTES);
    store.put(email, OtpRecord::new(code.clone(), expires_at));

    if let Err(e) = mailer.send_otp_email(email, &code).await {
        tracing::error!("Error sending OTP: {}", e);
        return Err(OtpError::Dispatch(e));
    }
    Ok(())
}

/// Consumes the record for `email` when `code` matches and has not expired,
/// then forwards the optional new password to the account collaborator.
///
/// Consumption happens first, so the code stays single-use even when the
/// password application fails afterwards.
pub async fn verify_otp(
    store: &OtpStore,
    passwords: &dyn PasswordStore,
    email: &str,
    code: &str,
    new_password: Option<&str>,
) -> Result<(), OtpError> {
    if !store.consume_valid(email, code, Utc::now()) {
        return Err(OtpError::InvalidOrExpired);
    }

    if let Some(password) = new_password {
        passwords
            .apply_new_password(email, password)
            .await
            .map_err(OtpError::PasswordUpdate)?;
    }
    Ok(())
}
