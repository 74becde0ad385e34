use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use app::cache::OtpStore;
use app::config::Config;
use app::persistence::accounts::NullPasswordStore;
use app::persistence::products::ProductStore;
use app::state::AppState;
use app::utils::email::SmtpMailer;

use crate::routers::create_router;

pub fn setup_router(config: Config, state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::OPTIONS,
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(
            config
                .allowed_origin
                .parse::<HeaderValue>()
                .expect("Failed to parse allowed origin"),
        )
        .allow_credentials(true);

    create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub fn setup_config() -> Config {
    dotenvy::dotenv().ok();
    Config::from_env()
}

/// Builds the shared state against the configured products file, seeding
/// the sample catalog when the file does not exist yet.
pub async fn setup_state(config: &Config) -> AppState {
    let products = ProductStore::new(config.products_file.clone());
    products
        .seed_if_missing()
        .await
        .expect("Failed to initialize products data file");

    AppState {
        products,
        otp: OtpStore::new(),
        mailer: Arc::new(SmtpMailer::new(config.clone())),
        passwords: Arc::new(NullPasswordStore),
    }
}
