use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use app::cache::OtpStore;
use app::config::{Config, ConfigInner};
use app::persistence::accounts::{NullPasswordStore, PasswordStore};
use app::persistence::products::ProductStore;
use app::state::AppState;
use app::utils::email::{Mailer, MailerError};
use async_trait::async_trait;
use lettre::{AsyncSmtpTransport, Tokio1Executor};

/// Captures outgoing OTP emails instead of talking to an SMTP relay.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<(String, String)>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent send fail until called again with `false`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Every `(recipient, code)` pair captured so far, oldest first.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// The code from the most recent capture, if any.
    pub fn last_code(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_otp_email(&self, to: &str, code: &str) -> Result<(), MailerError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(MailerError("Connection refused".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), code.to_string()));
        Ok(())
    }
}

/// Captures `(email, new_password)` pairs handed over after verification.
#[derive(Clone, Default)]
pub struct RecordingPasswordStore {
    applied: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingPasswordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Vec<(String, String)> {
        self.applied.lock().unwrap().clone()
    }
}

#[async_trait]
impl PasswordStore for RecordingPasswordStore {
    async fn apply_new_password(&self, email: &str, new_password: &str) -> anyhow::Result<()> {
        self.applied
            .lock()
            .unwrap()
            .push((email.to_string(), new_password.to_string()));
        Ok(())
    }
}

/// A products file path that no other test run will collide with.
pub fn temp_products_file() -> String {
    std::env::temp_dir()
        .join(format!("vitrine-products-{}.json", uuid::Uuid::new_v4()))
        .to_string_lossy()
        .into_owned()
}

pub fn test_config() -> Config {
    Config::new(ConfigInner {
        host: "127.0.0.1".to_string(),
        port: 0,
        allowed_origin: "http://localhost:3000".to_string(),
        products_file: temp_products_file(),
        emailer: "noreply@vitrine.test".to_string(),
        transponder: AsyncSmtpTransport::<Tokio1Executor>::relay("localhost")
            .expect("Failed to create SMTP transport")
            .build(),
    })
}

pub struct TestApp {
    pub config: Config,
    pub state: AppState,
    pub mailer: RecordingMailer,
}

/// Builds an [`AppState`] backed by a freshly seeded products file and a
/// [`RecordingMailer`] in place of the SMTP transport.
pub async fn setup_test_app() -> TestApp {
    let config = test_config();
    let mailer = RecordingMailer::new();

    let products = ProductStore::new(config.products_file.clone());
    products
        .seed_if_missing()
        .await
        .expect("Failed to initialize products data file");

    let state = AppState {
        products,
        otp: OtpStore::new(),
        mailer: Arc::new(mailer.clone()),
        passwords: Arc::new(NullPasswordStore),
    };

    TestApp {
        config,
        state,
        mailer,
    }
}
