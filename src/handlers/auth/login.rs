use axum::extract::State;

use crate::{
    data::models::{LoginForm, TokenResponse},
    data::repositories::UserRepository,
    error::ApiError,
    extract::Json,
    features::auth::verify_password,
    state::AppState,
};

/// Unknown email and wrong password produce the same 401 response.
#[axum::debug_handler]
pub async fn handle_login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let mut conn = state.conn()?;

    let user = UserRepository::find_by_email(&mut conn, &form.email)?;

    match user {
        Some(user) => {
            if verify_password(&user.password_hash, &form.password)? {
                let token = state.tokens.issue(&user.id)?;
                log::info!("User logged in: {}", user.id);
                Ok(Json(TokenResponse { token }))
            } else {
                log::warn!("Invalid password for user: {}", form.email);
                Err(ApiError::InvalidCredentials)
            }
        }
        None => {
            verify_password(&state.decoy_hash, &form.password)?;
            log::warn!("User not found: {}", form.email);
            Err(ApiError::InvalidCredentials)
        }
    }
}
