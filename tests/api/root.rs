use axum::Router;
use axum::http::{Method, StatusCode};

use crate::support::{request, text_body};

pub(super) async fn test_root(app: Router) {
    let response = request(app, Method::GET, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text_body(response).await, "Vitrine API is running");
}
