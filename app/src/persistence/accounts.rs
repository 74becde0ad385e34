use async_trait::async_trait;

/// Durable account storage for applying a reset password.
///
/// The back office does not own a user database, so the verify flow only
/// forwards the new password here. Integrators wire in their own
/// implementation; the default accepts and drops it.
#[async_trait]
pub trait PasswordStore: Send + Sync {
    async fn apply_new_password(&self, email: &str, new_password: &str) -> anyhow::Result<()>;
}

#[derive(Clone, Default)]
pub struct NullPasswordStore;

#[async_trait]
impl PasswordStore for NullPasswordStore {
    async fn apply_new_password(&self, email: &str, _new_password: &str) -> anyhow::Result<()> {
        tracing::debug!("No account store configured; dropping new password for {}", email);
        Ok(())
    }
}
