use axum::{extract::State, http::StatusCode, routing::get, Router};
use validator::Validate;

use crate::{
    data::models::{
        ApiMessage, CreateRecipeRequest, CreatedResponse, Feedback, NewRecipe, NutritionInfo,
        Recipe, RecipeChanges, RecipeFilter,
    },
    data::repositories::{FeedbackRepository, NutritionRepository, RecipeRepository},
    error::ApiError,
    extract::{Json, Path, Query},
    handlers::today,
    state::{AppState, DbConn},
};

const NOT_FOUND: &str = "Receita não encontrada";

fn ensure_recipe_exists(conn: &mut DbConn, id: i32) -> Result<(), ApiError> {
    match RecipeRepository::find_by_id(conn, id)? {
        Some(_) => Ok(()),
        None => Err(ApiError::NotFound(NOT_FOUND)),
    }
}

pub async fn create_recipe(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<CreatedResponse<i32>>), ApiError> {
    payload.validate()?;

    let mut conn = state.conn()?;
    let id = RecipeRepository::create(
        &mut conn,
        &NewRecipe {
            category: &payload.category,
            ingredients: &payload.ingredients,
            name: &payload.name,
            description: &payload.description,
            storage_note: &payload.storage_note,
            published_on: payload.published_on.unwrap_or_else(today),
            site_id: payload.site_id,
            user_id: &payload.user_id,
        },
    )?;

    log::info!("Recipe {} created by {}", id, payload.user_id);
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Receita criada com sucesso",
            id,
        }),
    ))
}

pub async fn list_recipes(
    State(state): State<AppState>,
    Query(filter): Query<RecipeFilter>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let mut conn = state.conn()?;
    Ok(Json(RecipeRepository::list(&mut conn, filter.category.as_deref())?))
}

pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Recipe>, ApiError> {
    let mut conn = state.conn()?;
    let recipe = RecipeRepository::find_by_id(&mut conn, id)?.ok_or(ApiError::NotFound(NOT_FOUND))?;
    Ok(Json(recipe))
}

pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(changes): Json<RecipeChanges>,
) -> Result<Json<ApiMessage>, ApiError> {
    changes.validate()?;

    let mut conn = state.conn()?;
    ensure_recipe_exists(&mut conn, id)?;
    if !changes.is_empty() {
        RecipeRepository::update(&mut conn, id, &changes)?;
    }

    Ok(Json(ApiMessage {
        message: "Receita atualizada",
    }))
}

pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiMessage>, ApiError> {
    let mut conn = state.conn()?;
    if RecipeRepository::delete(&mut conn, id)? == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    log::info!("Recipe {} deleted", id);
    Ok(Json(ApiMessage {
        message: "Receita deletada",
    }))
}

pub async fn list_recipe_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Feedback>>, ApiError> {
    let mut conn = state.conn()?;
    ensure_recipe_exists(&mut conn, id)?;
    Ok(Json(FeedbackRepository::list_by_recipe(&mut conn, id)?))
}

pub async fn list_recipe_nutrition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<NutritionInfo>>, ApiError> {
    let mut conn = state.conn()?;
    ensure_recipe_exists(&mut conn, id)?;
    Ok(Json(NutritionRepository::list_by_recipe(&mut conn, id)?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/receitas/", get(list_recipes).post(create_recipe))
        .route(
            "/receitas/{id_receita}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route("/receitas/{id_receita}/feedback", get(list_recipe_feedback))
        .route(
            "/receitas/{id_receita}/informacao_nutricional",
            get(list_recipe_nutrition),
        )
}
