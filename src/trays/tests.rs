use crate::config::test_helpers::{get_json, post_json, purchase_tray, setup_test_app};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_tray() {
    let (app, dir) = setup_test_app();

    let (status, body) = post_json(
        &app,
        "/api/trays",
        &json!({
            "code": "123456",
            "variety_name": "Tomato",
            "quantity": 10
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "Failed to create tray: {body:?}");
    assert_eq!(body["tray"]["code"], "123456");
    assert_eq!(body["tray"]["variety_name"], "Tomato");
    assert_eq!(body["tray"]["quantity"], 10);
    assert!(body["message"].as_str().unwrap().contains("123456"));

    let stock = std::fs::read_to_string(dir.path().join("bandejas_compradas.csv")).unwrap();
    assert_eq!(stock, "Código,Nome Variedade,Quantidade\n123456,Tomato,10\n");
}

#[tokio::test]
async fn test_repeated_code_appends_new_row() {
    let (app, _dir) = setup_test_app();
    purchase_tray(&app, "123456", "Tomate", 10).await;
    purchase_tray(&app, "123456", "Tomate", 3).await;

    let (status, body) = get_json(&app, "/api/trays").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"code": "123456", "variety_name": "Tomate", "quantity": 10},
            {"code": "123456", "variety_name": "Tomate", "quantity": 3}
        ])
    );
}

#[tokio::test]
async fn test_create_tray_missing_fields() {
    let (app, dir) = setup_test_app();

    for payload in [
        json!({"variety_name": "Tomate", "quantity": 1}),
        json!({"code": "123456", "variety_name": "", "quantity": 1}),
        json!({"code": "123456", "variety_name": "Tomate", "quantity": 0}),
    ] {
        let (status, body) = post_json(&app, "/api/trays", &payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "Accepted {payload}");
        assert_eq!(body["error"]["code"], "MISSING_FIELD");
    }

    let (_, body) = get_json(&app, "/api/trays").await;
    assert!(body.as_array().unwrap().is_empty());
    assert!(!dir.path().join("bandejas_compradas.csv").exists());
}

#[tokio::test]
async fn test_create_tray_negative_quantity() {
    let (app, _dir) = setup_test_app();

    let (status, body) = post_json(
        &app,
        "/api/trays",
        &json!({"code": "123456", "variety_name": "Tomate", "quantity": -2}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_tray_rejects_malformed_json() {
    let (app, _dir) = setup_test_app();

    let (status, _) = post_json(&app, "/api/trays", &json!({"quantity": "ten"})).await;
    assert!(status.is_client_error());
}
