mod common;

use axum::http::StatusCode;
use serde_json::json;

use fitcooker_backend::{db, features::auth::verify_password, AppState};

use common::{create_user, send, send_with_token, test_app, test_config};

#[tokio::test]
async fn register_then_login_issues_a_usable_token() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/register",
        Some(json!({ "nome": "Lia", "email": "lia@example.com", "senha": "s3cretpass" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["msg"], "Usuário registrado com sucesso!");

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "email": "lia@example.com", "senha": "s3cretpass" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());

    let (status, me) = send_with_token(&app, "GET", "/me", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email_usuario"], "lia@example.com");
    assert_eq!(me["nome_usuario"], "Lia");
}

#[tokio::test]
async fn wrong_password_and_unknown_email_look_identical() {
    let app = test_app();
    send(
        &app,
        "POST",
        "/register",
        Some(json!({ "nome": "Max", "email": "max@example.com", "senha": "rightpass1" })),
    )
    .await;

    let (wrong_status, wrong_body) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "email": "max@example.com", "senha": "wrongpass1" })),
    )
    .await;
    let (unknown_status, unknown_body) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "email": "nobody@example.com", "senha": "rightpass1" })),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["msg"], "Credenciais inválidas");
}

#[tokio::test]
async fn registering_a_taken_email_conflicts() {
    let app = test_app();
    let form = json!({ "nome": "Nina", "email": "nina@example.com", "senha": "password1" });

    let (status, _) = send(&app, "POST", "/register", Some(form.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/register", Some(form)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["msg"], "Email já cadastrado");
}

#[tokio::test]
async fn short_password_is_rejected() {
    let app = test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/register",
        Some(json!({ "nome": "Otto", "email": "otto@example.com", "senha": "short" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn users_created_through_crud_can_log_in() {
    let app = test_app();
    create_user(&app, "paula", "paula@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "email": "paula@example.com", "senha": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, me) = send_with_token(&app, "GET", "/me", body["token"].as_str().unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id_usuario"], "paula");
}

#[tokio::test]
async fn password_change_takes_effect_on_login() {
    let app = test_app();
    create_user(&app, "rui", "rui@example.com").await;

    let (status, _) = send(
        &app,
        "PUT",
        "/usuario/rui",
        Some(json!({ "senha": "brandnewpass" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (old, _) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "email": "rui@example.com", "senha": "password123" })),
    )
    .await;
    let (new, _) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "email": "rui@example.com", "senha": "brandnewpass" })),
    )
    .await;
    assert_eq!(old, StatusCode::UNAUTHORIZED);
    assert_eq!(new, StatusCode::OK);
}

#[tokio::test]
async fn me_requires_a_valid_token() {
    let app = test_app();

    let (status, _) = send(&app, "GET", "/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send_with_token(&app, "GET", "/me", "not.a.token").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["msg"], "Token ausente ou inválido");
}

#[tokio::test]
async fn token_of_a_deleted_user_no_longer_resolves() {
    let app = test_app();
    send(
        &app,
        "POST",
        "/register",
        Some(json!({ "nome": "Ode", "email": "ode@example.com", "senha": "odepass123" })),
    )
    .await;
    let (_, body) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "email": "ode@example.com", "senha": "odepass123" })),
    )
    .await;
    let token = body["token"].as_str().unwrap().to_string();

    let (_, me) = send_with_token(&app, "GET", "/me", &token).await;
    let user_id = me["id_usuario"].as_str().unwrap().to_string();
    assert_eq!(user_id.len(), 20);

    let (status, _) = send(&app, "DELETE", &format!("/usuario/{user_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_with_token(&app, "GET", "/me", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn password_longer_than_72_bytes_is_rejected() {
    let app = test_app();

    // 60 characters but 120 bytes
    let (status, body) = send(
        &app,
        "POST",
        "/register",
        Some(json!({ "nome": "Pia", "email": "pia@example.com", "senha": "é".repeat(60) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let (status, _) = send(
        &app,
        "POST",
        "/usuario/",
        Some(json!({
            "id_usuario": "pia",
            "email_usuario": "pia@example.com",
            "senha": "é".repeat(60),
            "nome_usuario": "Pia",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[test]
fn unknown_email_logins_check_a_real_bcrypt_hash() {
    let config = test_config();
    let pool = db::create_pool(&config.database_url, config.db_pool_size).unwrap();
    let state = AppState::new(pool, &config).unwrap();

    assert!(state.decoy_hash.starts_with("$2"));
    assert!(!verify_password(&state.decoy_hash, "password123").unwrap());
}
