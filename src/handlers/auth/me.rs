use axum::extract::State;

use crate::{
    data::models::UserResponse,
    data::repositories::UserRepository,
    error::ApiError,
    extract::Json,
    features::auth::AuthUser,
    state::AppState,
};

pub async fn current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let mut conn = state.conn()?;
    let user = UserRepository::find_by_id(&mut conn, &auth.user_id)?
        .ok_or(ApiError::NotFound("Usuário não encontrado"))?;
    Ok(Json(user.into()))
}
