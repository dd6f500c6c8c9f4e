use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use parcelhub_core::resources::{NewOrder, Order};

use super::{body::parse_json, AppError};
use crate::{
    models::{ListQuery, OrdersResponse},
    state::AppState,
};

/// List one page of orders (GET /api/orders).
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<OrdersResponse>, AppError> {
    let page = state
        .orders
        .list(query.exclusive_start_key.as_deref())
        .await?;

    tracing::debug!(count = page.len(), has_more = page.has_more(), "Listed orders");

    Ok(Json(page.into()))
}

/// Create a new order (POST /api/orders).
pub async fn create_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let draft: NewOrder = parse_json(&body)?;
    let order = state.orders.create(draft).await?;

    tracing::info!(order_id = %order.order_id, customer_id = %order.customer_id, "Created new order");

    Ok((StatusCode::CREATED, Json(order)))
}

/// Get a single order by ID (GET /api/orders/{order_id}).
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, AppError> {
    let order = state.orders.get(&order_id).await?;
    Ok(Json(order))
}
