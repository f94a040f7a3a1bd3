use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use validator::Validate;

use crate::{
    data::models::{
        ApiMessage, CreateUserRequest, CreatedResponse, NewUser, UpdateUserRequest, UserChanges,
        UserResponse,
    },
    data::repositories::UserRepository,
    error::ApiError,
    extract::{Json, Path},
    features::auth::hash_password,
    state::AppState,
};

const NOT_FOUND: &str = "Usuário não encontrado";

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreatedResponse<String>>), ApiError> {
    payload.validate()?;

    let password_hash = hash_password(&payload.password, state.bcrypt_cost)?;
    let mut conn = state.conn()?;

    UserRepository::create(
        &mut conn,
        &NewUser {
            id: &payload.id,
            email: &payload.email,
            password_hash: &password_hash,
            display_name: &payload.display_name,
        },
    )?;

    log::info!("User created: {}", payload.id);
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Usuário criado com sucesso",
            id: payload.id,
        }),
    ))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let mut conn = state.conn()?;
    let user = UserRepository::find_by_id(&mut conn, &id)?.ok_or(ApiError::NotFound(NOT_FOUND))?;
    Ok(Json(user.into()))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<ApiMessage>, ApiError> {
    payload.validate()?;

    let password_hash = payload
        .password
        .as_deref()
        .map(|password| hash_password(password, state.bcrypt_cost))
        .transpose()?;

    let changes = UserChanges {
        email: payload.email,
        password_hash,
        display_name: payload.display_name,
    };

    let mut conn = state.conn()?;
    if UserRepository::find_by_id(&mut conn, &id)?.is_none() {
        return Err(ApiError::NotFound(NOT_FOUND));
    }
    if !changes.is_empty() {
        UserRepository::update(&mut conn, &id, &changes)?;
    }

    Ok(Json(ApiMessage {
        message: "Usuário atualizado",
    }))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiMessage>, ApiError> {
    let mut conn = state.conn()?;
    if UserRepository::delete(&mut conn, &id)? == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    log::info!("User deleted: {}", id);
    Ok(Json(ApiMessage {
        message: "Usuário deletado",
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/usuario/", post(create_user))
        .route(
            "/usuario/{id_usuario}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
