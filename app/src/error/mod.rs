use crate::utils::email::MailerError;

#[derive(Debug, thiserror::Error)]
pub enum OtpError {
    /// Absent record, wrong code and expired code all collapse into this
    /// one client-visible failure.
    #[error("Invalid or expired OTP")]
    InvalidOrExpired,
    #[error("Failed to send email")]
    Dispatch(#[source] MailerError),
    #[error("Failed to apply new password")]
    PasswordUpdate(#[source] anyhow::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ProductStoreError {
    #[error("Product not found")]
    NotFound,
    #[error("Error writing products: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error encoding products: {0}")]
    Encode(#[from] serde_json::Error),
}
