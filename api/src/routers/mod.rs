use auth::create_auth_router;
use axum::{Router, routing::get};

pub mod auth;
pub mod products;
pub mod root;

use app::state::AppState;
use products::create_products_router;
use root::create_root_router;

use crate::openapi::openapi_json;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(create_root_router())
        .nest("/api", create_auth_router())
        .nest("/api/products", create_products_router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
}
