use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vitrine API",
        version = "0.1.0",
        description = "Rust backend API for an e-commerce back-office dashboard",
        license(name = "MIT"),
    ),
    paths(
        crate::routers::root::root_get,
        crate::routers::auth::send_otp_post,
        crate::routers::auth::verify_otp_post,
        crate::routers::products::products_get,
        crate::routers::products::products_id_get,
        crate::routers::products::products_post,
        crate::routers::products::products_id_put,
        crate::routers::products::products_id_delete,
    ),
    components(
        schemas(
            crate::ApiResponse<String>,
            crate::ApiResponse<models::schemas::product::ProductSchema>,
            crate::ApiResponse<Vec<models::schemas::product::ProductSchema>>,
            models::schemas::product::ProductSchema,
            models::params::otp::SendOtpParams,
            models::params::otp::VerifyOtpParams,
            models::params::product::CreateProductParams,
            models::params::product::UpdateProductParams,
        )
    ),
    tags(
        (name = "root", description = "Liveness endpoints"),
        (name = "auth", description = "Password reset endpoints"),
        (name = "products", description = "Product catalog endpoints"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
