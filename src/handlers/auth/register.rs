use axum::{extract::State, http::StatusCode};
use rand::{distributions::Alphanumeric, thread_rng, Rng};
use validator::Validate;

use crate::{
    data::models::{AuthMessage, NewUser, RegisterForm},
    data::repositories::UserRepository,
    error::ApiError,
    extract::Json,
    features::auth::hash_password,
    state::AppState,
};

const USER_ID_LEN: usize = 20;

fn generate_user_id() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(USER_ID_LEN)
        .map(char::from)
        .collect()
}

#[axum::debug_handler]
pub async fn handle_register(
    State(state): State<AppState>,
    Json(form): Json<RegisterForm>,
) -> Result<(StatusCode, Json<AuthMessage>), ApiError> {
    form.validate()?;

    let mut conn = state.conn()?;

    if UserRepository::email_exists(&mut conn, &form.email)? {
        log::warn!("Registration attempt with existing email: {}", form.email);
        return Err(ApiError::Conflict("Email já cadastrado".into()));
    }

    let password_hash = hash_password(&form.password, state.bcrypt_cost)?;
    let user_id = generate_user_id();

    UserRepository::create(
        &mut conn,
        &NewUser {
            id: &user_id,
            email: &form.email,
            password_hash: &password_hash,
            display_name: &form.name,
        },
    )?;

    log::info!("New user registered: {}", form.email);
    Ok((
        StatusCode::CREATED,
        Json(AuthMessage {
            msg: "Usuário registrado com sucesso!",
        }),
    ))
}
