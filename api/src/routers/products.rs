use anyhow::Context;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use app::error::ProductStoreError;
use app::state::AppState;
use models::params::product::{CreateProductParams, UpdateProductParams};
use models::schemas::product::ProductSchema;

use crate::ApiResponse;
use crate::error::ApiError;
use crate::extractor::{Json, Valid};

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Full catalog", body = ApiResponse<Vec<ProductSchema>>),
    ),
    tag = "products",
)]
pub async fn products_get(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let products: Vec<ProductSchema> = state
        .products
        .list()
        .await
        .into_iter()
        .map(ProductSchema::from)
        .collect();

    Ok(Json(ApiResponse::success(
        "Products retrieved successfully",
        Some(products),
    )))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Single product", body = ApiResponse<ProductSchema>),
        (status = 404, description = "Unknown product id"),
    ),
    tag = "products",
)]
pub async fn products_id_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .products
        .get(id)
        .await
        .ok_or(ProductStoreError::NotFound)?;

    Ok(Json(ApiResponse::success(
        "Product retrieved successfully",
        Some(ProductSchema::from(product)),
    )))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductParams,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductSchema>),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Data file could not be written"),
    ),
    tag = "products",
)]
pub async fn products_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<CreateProductParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .products
        .create(params)
        .await
        .context("Error creating product")?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Product created successfully",
            Some(ProductSchema::from(product)),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductParams,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductSchema>),
        (status = 404, description = "Unknown product id"),
        (status = 500, description = "Data file could not be written"),
    ),
    tag = "products",
)]
pub async fn products_id_put(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Valid(Json(params)): Valid<Json<UpdateProductParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .products
        .update(id, params)
        .await
        .context("Error updating product")?;

    Ok(Json(ApiResponse::success(
        "Product updated successfully",
        Some(ProductSchema::from(product)),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product removed", body = ApiResponse<ProductSchema>),
        (status = 404, description = "Unknown product id"),
        (status = 500, description = "Data file could not be written"),
    ),
    tag = "products",
)]
pub async fn products_id_delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .products
        .delete(id)
        .await
        .context("Error deleting product")?;

    Ok(Json(ApiResponse::success(
        "Product deleted successfully",
        Some(ProductSchema::from(product)),
    )))
}

pub fn create_products_router() -> Router<AppState> {
    Router::new()
        .route("/", get(products_get).post(products_post))
        .route(
            "/{id}",
            get(products_id_get)
                .put(products_id_put)
                .delete(products_id_delete),
        )
}
