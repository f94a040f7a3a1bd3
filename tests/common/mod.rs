#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use fitcooker_backend::{build_router, db, AppState, Config};

pub fn test_config() -> Config {
    Config::from_lookup(|key: &str| match key {
        "DATABASE_URL" => Some(":memory:".to_string()),
        "JWT_SECRET_KEY" => Some("test-secret".to_string()),
        "BCRYPT_COST" => Some("4".to_string()),
        _ => None,
    })
    .expect("test config")
}

/// Fresh app over its own in-memory database.
pub fn test_app() -> Router {
    let config = test_config();
    let pool = db::create_pool(&config.database_url, config.db_pool_size).expect("in-memory pool");
    build_router(AppState::new(pool, &config).expect("app state"))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_request(app, method, uri, body, None).await
}

pub async fn send_with_token(app: &Router, method: &str, uri: &str, token: &str) -> (StatusCode, Value) {
    send_request(app, method, uri, None, Some(token)).await
}

/// Sends `body` verbatim, for payloads that are not valid JSON.
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: &str,
    body: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    read_response(app, request).await
}

async fn send_request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    read_response(app, request).await
}

async fn read_response(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

pub async fn create_user(app: &Router, id: &str, email: &str) {
    let (status, body) = send(
        app,
        "POST",
        "/usuario/",
        Some(json!({
            "id_usuario": id,
            "email_usuario": email,
            "senha": "password123",
            "nome_usuario": format!("Cook {id}"),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
}

pub async fn create_site(app: &Router, user_id: &str, url: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/site/",
        Some(json!({
            "nome_site": "Fit Kitchen",
            "url": url,
            "descricao_site": "Healthy recipes",
            "data_site": "2024-03-01",
            "id_usuario": user_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

pub async fn create_recipe(app: &Router, site_id: i64, user_id: &str, category: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/receitas/",
        Some(json!({
            "categoria": category,
            "ingredientes": "oats, milk, banana",
            "nome_receita": "Overnight oats",
            "descricao_receita": "Mix and rest overnight",
            "armazenamento_ftvd": "Fridge, up to 3 days",
            "data_receita": "2024-03-02",
            "id_site": site_id,
            "id_usuario": user_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}
