use std::sync::Arc;

use crate::cache::OtpStore;
use crate::persistence::accounts::PasswordStore;
use crate::persistence::products::ProductStore;
use crate::utils::email::Mailer;

#[derive(Clone)]
pub struct AppState {
    pub products: ProductStore,
    pub otp: OtpStore,
    pub mailer: Arc<dyn Mailer>,
    pub passwords: Arc<dyn PasswordStore>,
}
