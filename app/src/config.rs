use lettre::{AsyncSmtpTransport, Tokio1Executor, transport::smtp::authentication::Credentials};
use std::{ops::Deref, sync::Arc};

pub struct ConfigInner {
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
    pub products_file: String,
    pub emailer: String,
    pub transponder: AsyncSmtpTransport<Tokio1Executor>,
}

#[derive(Clone)]
pub struct Config(Arc<ConfigInner>);

impl Config {
    pub fn new(inner: ConfigInner) -> Config {
        Self(Arc::new(inner))
    }

    pub fn from_env() -> Config {
        let v = ConfigInner {
            host: std::env::var("HOST").expect("HOST is not set in .env file"),
            port: std::env::var("PORT")
                .expect("PORT is not set in .env file")
                .parse()
                .expect("PORT is not a number"),
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .expect("ALLOWED_ORIGIN is not set in .env file"),
            products_file: std::env::var("PRODUCTS_FILE")
                .unwrap_or_else(|_| "products.json".to_string()),
            emailer: std::env::var("EMAILER").expect("EMAILER is not set in .env file"),
            transponder: AsyncSmtpTransport::<Tokio1Executor>::relay(
                &std::env::var("SMTP_HOST").expect("SMTP_HOST is not set in .env file"),
            )
            .expect("Failed to create SMTP transport")
            .port(
                std::env::var("SMTP_PORT")
                    .expect("SMTP_PORT is not set in .env file")
                    .parse()
                    .expect("SMTP_PORT is not a number"),
            )
            .credentials(Credentials::new(
                std::env::var("SMTP_USER").expect("SMTP_USER is not set in .env file"),
                std::env::var("SMTP_PASS").expect("SMTP_PASS is not set in .env file"),
            ))
            .build(),
        };

        Self::new(v)
    }

    pub fn get_server_url(&self) -> String {
        format!("{}:{}", self.0.host, self.0.port)
    }
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
