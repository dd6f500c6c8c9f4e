use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use parcelhub_core::resources::{NewProduct, Product};

use super::{body::parse_json, AppError};
use crate::{
    models::{ListQuery, ProductsResponse},
    state::AppState,
};

/// List one page of products (GET /api/products).
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ProductsResponse>, AppError> {
    let page = state
        .products
        .list(query.exclusive_start_key.as_deref())
        .await?;

    tracing::debug!(count = page.len(), has_more = page.has_more(), "Listed products");

    Ok(Json(page.into()))
}

/// Create a new product (POST /api/products).
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let draft: NewProduct = parse_json(&body)?;
    let product = state.products.create(draft).await?;

    tracing::info!(product_id = %product.product_id, product_type = %product.product_type, "Created new product");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a single product by ID (GET /api/products/{product_id}).
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = state.products.get(&product_id).await?;
    Ok(Json(product))
}
