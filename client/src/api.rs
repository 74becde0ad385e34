use async_trait::async_trait;

use crate::error::Result;

/// The two reset endpoints, abstracted so the flow can run against a
/// scripted double in tests.
#[async_trait]
pub trait ResetApi {
    /// Requests a code for `email`. Resolves to the server's confirmation
    /// message.
    async fn send_otp(&self, email: &str) -> Result<String>;

    /// Submits `otp` for `email`, optionally carrying the replacement
    /// password along.
    async fn verify_otp(
        &self,
        email: &str,
        otp: &str,
        new_password: Option<&str>,
    ) -> Result<String>;
}
