use api::setup_router;
use axum::Router;
use utils::testing::{TestApp, setup_test_app};

mod root;

use auth::*;
use openapi::*;
use products::*;
use root::*;

async fn setup_app() -> (Router, TestApp) {
    let ctx = setup_test_app().await;
    let app = setup_router(ctx.config.clone(), ctx.state.clone());
    (app, ctx)
}

#[tokio::test]
async fn root_main() {
    let (app, _ctx) = setup_app().await;
    test_root(app).await;
}

#[tokio::test]
async fn openapi_main() {
    let (app, _ctx) = setup_app().await;
    test_openapi(app).await;
}

#[tokio::test]
async fn send_otp_main() {
    let (app, ctx) = setup_app().await;
    test_send_otp(app.clone(), &ctx).await;
    test_send_otp_missing_email(app.clone(), &ctx).await;
    test_send_otp_empty_email(app, &ctx).await;
}

#[tokio::test]
async fn send_otp_failure_main() {
    let (app, ctx) = setup_app().await;
    test_send_otp_dispatch_failure(app, &ctx).await;
}

#[tokio::test]
async fn verify_otp_main() {
    let (app, ctx) = setup_app().await;
    test_verify_otp_flow(app.clone(), &ctx).await;
    test_verify_otp_wrong_code(app.clone(), &ctx).await;
    test_verify_otp_missing_fields(app.clone(), &ctx).await;
    test_verify_otp_expired_code(app.clone(), &ctx).await;
    test_reissue_invalidates_previous_code(app.clone(), &ctx).await;
    test_verify_otp_with_new_password(app, &ctx).await;
}

#[tokio::test]
async fn products_main() {
    let (app, _ctx) = setup_app().await;
    test_list_products(app.clone()).await;
    test_get_product(app.clone()).await;
    test_get_product_not_found(app).await;
}

#[tokio::test]
async fn products_create_main() {
    let (app, _ctx) = setup_app().await;
    test_create_product(app.clone()).await;
    test_create_product_rejects_blank_fields(app.clone()).await;
    test_create_product_rejects_absent_fields(app.clone()).await;
    test_create_product_accepts_zero_stock(app).await;
}

#[tokio::test]
async fn products_update_main() {
    let (app, _ctx) = setup_app().await;
    test_update_product(app.clone()).await;
    test_update_product_not_found(app.clone()).await;
    test_update_clears_image_on_null(app).await;
}

#[tokio::test]
async fn products_delete_main() {
    let (app, _ctx) = setup_app().await;
    test_delete_product(app.clone()).await;
    test_delete_product_not_found(app).await;
}
