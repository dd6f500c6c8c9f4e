use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        orders::{create_order, get_order, list_orders},
        products::{create_product, get_product, list_products},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{product_id}", get(get_product))
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{order_id}", get(get_order))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::{num::NonZeroU32, sync::Arc};

    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use parcelhub_core::storage::InMemoryTableClient;
    use tower::ServiceExt;

    use crate::config::Config;

    fn test_app(page_size: u32) -> Router {
        let config = Config {
            page_size: NonZeroU32::new(page_size).unwrap(),
            ..Config::default()
        };
        let client = Arc::new(InMemoryTableClient::with_tables([
            (config.products_table.clone(), "productId"),
            (config.orders_table.clone(), "orderId"),
        ]));
        create_app(AppState::from_client(client, &config))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let response = test_app(10).oneshot(get("/livez")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_products_empty() {
        let response = test_app(10).oneshot(get("/api/products")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({ "total": 0, "products": [] })
        );
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let app = test_app(10);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/products",
                r#"{"productType":"box","deliveryDate":"2020-10-08"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let product = json_body(response).await;
        assert_eq!(product["productType"], "box");
        assert_eq!(product["deliveryDate"], "2020-10-08");

        let product_id = product["productId"].as_str().unwrap();
        assert!(!product_id.is_empty());

        let response = app
            .oneshot(get(&format!("/api/products/{product_id}")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, product);
    }

    #[tokio::test]
    async fn test_create_product_without_type() {
        let response = test_app(10)
            .oneshot(post_json("/api/products", r#"{"deliveryDate":"2020-10-08"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({
                "message": "Require productType to create a new product",
                "statusCode": 400
            })
        );
    }

    #[tokio::test]
    async fn test_create_product_invalid_json() {
        let response = test_app(10)
            .oneshot(post_json("/api/products", "{productType"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON in body: "));
        assert_eq!(body["statusCode"], 400);
    }

    #[tokio::test]
    async fn test_create_product_empty_body() {
        let response = test_app(10)
            .oneshot(post_json("/api/products", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["message"], "Body was null");
    }

    #[tokio::test]
    async fn test_get_nonexistent_product() {
        let response = test_app(10)
            .oneshot(get("/api/products/00000000-0000-0000-0000-000000000000"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({
                "message": "product 00000000-0000-0000-0000-000000000000 does not exist",
                "statusCode": 404
            })
        );
    }

    #[tokio::test]
    async fn test_list_products_pages() {
        let app = test_app(2);
        for product_type in ["box", "envelope", "pallet"] {
            let body = format!(r#"{{"productType":"{product_type}","deliveryDate":"2020-10-08"}}"#);
            let response = app
                .clone()
                .oneshot(post_json("/api/products", &body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app.clone().oneshot(get("/api/products")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let first = json_body(response).await;
        assert_eq!(first["total"], 2);
        let cursor = first["lastEvaluatedKey"].as_str().unwrap().to_string();
        assert_eq!(first["products"][1]["productId"], cursor.as_str());

        let response = app
            .oneshot(get(&format!("/api/products?exclusive_start_key={cursor}")))
            .await
            .unwrap();
        let second = json_body(response).await;
        assert_eq!(second["total"], 1);
        assert!(second.get("lastEvaluatedKey").is_none());
        assert_ne!(second["products"][0]["productId"], first["products"][0]["productId"]);
        assert_ne!(second["products"][0]["productId"], first["products"][1]["productId"]);
    }

    #[tokio::test]
    async fn test_create_and_list_orders() {
        let app = test_app(10);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/orders",
                r#"{"customerId":"customer-7","preTaxAmount":12.5,"postTaxAmount":15.13}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let order = json_body(response).await;
        assert_eq!(order["preTaxAmount"], 12.5);
        assert_eq!(order["postTaxAmount"], 15.13);

        let order_id = order["orderId"].as_str().unwrap();
        let response = app
            .clone()
            .oneshot(get(&format!("/api/orders/{order_id}")))
            .await
            .unwrap();
        assert_eq!(json_body(response).await, order);

        let response = app.oneshot(get("/api/orders")).await.unwrap();
        let list = json_body(response).await;
        assert_eq!(list["total"], 1);
        assert_eq!(list["orders"][0], order);
    }

    #[tokio::test]
    async fn test_create_order_missing_amount() {
        let response = test_app(10)
            .oneshot(post_json(
                "/api/orders",
                r#"{"customerId":"customer-7","preTaxAmount":12.5}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["message"],
            "Require postTaxAmount to create a new order"
        );
    }

    #[tokio::test]
    async fn test_missing_table_is_internal_error() {
        let config = Config::default();
        let app = create_app(AppState::from_client(
            Arc::new(InMemoryTableClient::new()),
            &config,
        ));

        let response = app.oneshot(get("/api/orders")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await["message"],
            "Table orders_table does not exist"
        );
    }
}
