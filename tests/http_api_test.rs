use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use fa2ms::catalog::{
    AsphaltMethod, MemStorage, MethodId, NewAsphaltMethod, NewUser, Storage, User,
};
use fa2ms::server::router;
use fa2ms::{Fa2msError, Result};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn seeded_app() -> Router {
    router(Arc::new(MemStorage::new()))
}

/// Storage whose every read fails
struct UnavailableStorage;

impl Storage for UnavailableStorage {
    fn get_user(&self, _id: u32) -> Result<Option<User>> {
        Err(Fa2msError::Storage("backend offline".to_string()))
    }

    fn get_user_by_username(&self, _username: &str) -> Result<Option<User>> {
        Err(Fa2msError::Storage("backend offline".to_string()))
    }

    fn create_user(&mut self, _user: NewUser) -> Result<User> {
        Err(Fa2msError::Storage("backend offline".to_string()))
    }

    fn get_all_methods(&self) -> Result<Vec<AsphaltMethod>> {
        Err(Fa2msError::Storage("backend offline".to_string()))
    }

    fn get_method_by_id(&self, _id: MethodId) -> Result<Option<AsphaltMethod>> {
        Err(Fa2msError::Storage("backend offline".to_string()))
    }

    fn create_method(&mut self, _method: NewAsphaltMethod) -> Result<AsphaltMethod> {
        Err(Fa2msError::Storage("backend offline".to_string()))
    }
}

#[tokio::test]
async fn test_list_returns_catalog_in_id_order() {
    let (status, body) = get(seeded_app(), "/api/asphalt-methods").await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 42);
    for (position, record) in records.iter().enumerate() {
        assert_eq!(record["id"], position as u64 + 1);
    }
    assert_eq!(records[0]["method"], "TFOT");
    assert_eq!(records[0]["materialType"], "Binder");
}

#[tokio::test]
async fn test_get_by_id() {
    let (status, body) = get(seeded_app(), "/api/asphalt-methods/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["method"], "TFOT");
    assert_eq!(body.as_object().unwrap().len(), 12);
}

#[tokio::test]
async fn test_leading_digits_are_used_as_id() {
    let (status, body) = get(seeded_app(), "/api/asphalt-methods/2abc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let (status, body) = get(seeded_app(), "/api/asphalt-methods/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"message": "Invalid method ID"}));
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    for uri in [
        "/api/asphalt-methods/9999",
        "/api/asphalt-methods/0",
        "/api/asphalt-methods/43",
        "/api/asphalt-methods/-1",
    ] {
        let (status, body) = get(seeded_app(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri {}", uri);
        assert_eq!(body, serde_json::json!({"message": "Method not found"}));
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, body) = get(seeded_app(), "/api/other").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({"message": "Not found"}));
}

#[tokio::test]
async fn test_storage_failures_map_to_server_errors() {
    let app = router(Arc::new(UnavailableStorage));

    let (status, body) = get(app.clone(), "/api/asphalt-methods").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        serde_json::json!({"message": "Failed to fetch asphalt methods"})
    );

    let (status, body) = get(app, "/api/asphalt-methods/1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        serde_json::json!({"message": "Failed to fetch asphalt method"})
    );
}

#[tokio::test]
async fn test_invalid_id_checked_before_storage() {
    let app = router(Arc::new(UnavailableStorage));
    let (status, body) = get(app, "/api/asphalt-methods/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid method ID");
}

#[tokio::test]
async fn test_undecodable_id_is_bad_request_json() {
    let (status, body) = get(seeded_app(), "/api/asphalt-methods/%FF").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"message": "Invalid method ID"}));
}

#[tokio::test]
async fn test_hex_ids_follow_leading_integer_rules() {
    let (status, body) = get(seeded_app(), "/api/asphalt-methods/0x10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 16);
    assert_eq!(body["method"], "Bespoke Aging");

    for uri in ["/api/asphalt-methods/0x", "/api/asphalt-methods/0xZ"] {
        let (status, body) = get(seeded_app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {}", uri);
        assert_eq!(body, serde_json::json!({"message": "Invalid method ID"}));
    }
}

#[tokio::test]
async fn test_trailing_slash_is_accepted() {
    let (status, body) = get(seeded_app(), "/api/asphalt-methods/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 42);

    let (status, body) = get(seeded_app(), "/api/asphalt-methods/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_serve_reports_bind_failure() {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = taken.local_addr().unwrap();

    let err = fa2ms::server::serve(Arc::new(MemStorage::new()), addr)
        .await
        .unwrap_err();

    assert!(matches!(err, Fa2msError::Generic(_)));
    assert!(err.to_string().contains("Failed to bind"));
}
