use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Router,
};

use crate::{
    data::models::{ApiMessage, Recipe, SavedRecipe},
    data::repositories::{SavedRecipeRepository, UserRepository},
    error::ApiError,
    extract::{Json, Path},
    state::AppState,
};

pub async fn save_recipe(
    State(state): State<AppState>,
    Json(payload): Json<SavedRecipe>,
) -> Result<(StatusCode, Json<ApiMessage>), ApiError> {
    let mut conn = state.conn()?;
    if !SavedRecipeRepository::save(&mut conn, &payload)? {
        log::info!(
            "Recipe {} already saved by {}",
            payload.recipe_id,
            payload.user_id
        );
    }

    Ok((
        StatusCode::CREATED,
        Json(ApiMessage {
            message: "Receita salva",
        }),
    ))
}

pub async fn list_saved_recipes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let mut conn = state.conn()?;
    if UserRepository::find_by_id(&mut conn, &user_id)?.is_none() {
        return Err(ApiError::NotFound("Usuário não encontrado"));
    }
    Ok(Json(SavedRecipeRepository::list_recipes_for_user(&mut conn, &user_id)?))
}

pub async fn unsave_recipe(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(String, i32)>,
) -> Result<Json<ApiMessage>, ApiError> {
    let mut conn = state.conn()?;
    if SavedRecipeRepository::remove(&mut conn, &user_id, recipe_id)? == 0 {
        return Err(ApiError::NotFound("Receita salva não encontrada"));
    }

    Ok(Json(ApiMessage {
        message: "Receita removida dos salvos",
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/receitas_salvas/", post(save_recipe))
        .route("/receitas_salvas/{id_usuario}", get(list_saved_recipes))
        .route(
            "/receitas_salvas/{id_usuario}/{id_receita}",
            delete(unsave_recipe),
        )
}
