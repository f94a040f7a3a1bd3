mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{create_site, create_user, send, test_app};

#[tokio::test]
async fn create_then_read_returns_public_fields_only() {
    let app = test_app();
    create_user(&app, "ana", "ana@example.com").await;

    let (status, body) = send(&app, "GET", "/usuario/ana", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id_usuario": "ana",
            "email_usuario": "ana@example.com",
            "nome_usuario": "Cook ana",
        })
    );
    assert!(body.get("senha").is_none());
    assert!(!body.to_string().contains("password123"));
}

#[tokio::test]
async fn missing_user_is_404_for_get_put_and_delete() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/usuario/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Usuário não encontrado");

    let (status, _) = send(
        &app,
        "PUT",
        "/usuario/ghost",
        Some(json!({ "nome_usuario": "Nobody" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/usuario/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_overwrites_only_supplied_fields() {
    let app = test_app();
    create_user(&app, "bia", "bia@example.com").await;

    let (status, body) = send(
        &app,
        "PUT",
        "/usuario/bia",
        Some(json!({ "nome_usuario": "Beatriz" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Usuário atualizado");

    let (_, body) = send(&app, "GET", "/usuario/bia", None).await;
    assert_eq!(body["nome_usuario"], "Beatriz");
    assert_eq!(body["email_usuario"], "bia@example.com");
}

#[tokio::test]
async fn empty_update_is_a_no_op() {
    let app = test_app();
    create_user(&app, "caio", "caio@example.com").await;

    let (status, _) = send(&app, "PUT", "/usuario/caio", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/usuario/caio", None).await;
    assert_eq!(body["nome_usuario"], "Cook caio");
}

#[tokio::test]
async fn update_rejects_fields_outside_the_allow_list() {
    let app = test_app();
    create_user(&app, "dani", "dani@example.com").await;

    let (status, _) = send(
        &app,
        "PUT",
        "/usuario/dani",
        Some(json!({ "id_usuario": "hijacked" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, "GET", "/usuario/dani", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", "/usuario/hijacked", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payload_is_rejected_with_400() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/usuario/",
        Some(json!({
            "id_usuario": "eva",
            "email_usuario": "not-an-email",
            "senha": "password123",
            "nome_usuario": "Eva",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn duplicate_email_or_id_conflicts() {
    let app = test_app();
    create_user(&app, "fabi", "fabi@example.com").await;

    let (status, _) = send(
        &app,
        "POST",
        "/usuario/",
        Some(json!({
            "id_usuario": "fabi2",
            "email_usuario": "fabi@example.com",
            "senha": "password123",
            "nome_usuario": "Fabi",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        "POST",
        "/usuario/",
        Some(json!({
            "id_usuario": "fabi",
            "email_usuario": "other@example.com",
            "senha": "password123",
            "nome_usuario": "Fabi",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn deleting_user_with_sites_fails_and_keeps_the_user() {
    let app = test_app();
    create_user(&app, "gil", "gil@example.com").await;
    create_site(&app, "gil", "https://gil.example.com").await;

    let (status, body) = send(&app, "DELETE", "/usuario/gil", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);

    let (status, _) = send(&app, "GET", "/usuario/gil", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn deleting_user_without_dependents_removes_it() {
    let app = test_app();
    create_user(&app, "hugo", "hugo@example.com").await;

    let (status, body) = send(&app, "DELETE", "/usuario/hugo", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Usuário deletado");

    let (status, _) = send(&app, "GET", "/usuario/hugo", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn changing_email_to_a_taken_one_conflicts() {
    let app = test_app();
    create_user(&app, "ivo", "ivo@example.com").await;
    create_user(&app, "jade", "jade@example.com").await;

    let (status, body) = send(
        &app,
        "PUT",
        "/usuario/jade",
        Some(json!({ "email_usuario": "ivo@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);

    let (_, body) = send(&app, "GET", "/usuario/jade", None).await;
    assert_eq!(body["email_usuario"], "jade@example.com");
}
