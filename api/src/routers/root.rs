use axum::{Router, routing::get};

use app::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = String)),
    tag = "root",
)]
pub async fn root_get() -> &'static str {
    "Vitrine API is running"
}

pub fn create_root_router() -> Router<AppState> {
    Router::new().route("/", get(root_get))
}
