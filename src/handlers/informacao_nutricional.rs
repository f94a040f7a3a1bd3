use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};

use crate::{
    data::models::{ApiMessage, CreatedResponse, NewNutritionInfo, NutritionChanges, NutritionInfo},
    data::repositories::NutritionRepository,
    error::ApiError,
    extract::{Json, Path},
    state::AppState,
};

const NOT_FOUND: &str = "Informação nutricional não encontrada";

pub async fn create_nutrition(
    State(state): State<AppState>,
    Json(payload): Json<NewNutritionInfo>,
) -> Result<(StatusCode, Json<CreatedResponse<i32>>), ApiError> {
    let mut conn = state.conn()?;
    let id = NutritionRepository::create(&mut conn, &payload)?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Informação nutricional criada com sucesso",
            id,
        }),
    ))
}

pub async fn get_nutrition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<NutritionInfo>, ApiError> {
    let mut conn = state.conn()?;
    let info = NutritionRepository::find_by_id(&mut conn, id)?.ok_or(ApiError::NotFound(NOT_FOUND))?;
    Ok(Json(info))
}

pub async fn update_nutrition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(changes): Json<NutritionChanges>,
) -> Result<Json<ApiMessage>, ApiError> {
    let mut conn = state.conn()?;
    if NutritionRepository::find_by_id(&mut conn, id)?.is_none() {
        return Err(ApiError::NotFound(NOT_FOUND));
    }
    if !changes.is_empty() {
        NutritionRepository::update(&mut conn, id, &changes)?;
    }

    Ok(Json(ApiMessage {
        message: "Informação nutricional atualizada",
    }))
}

pub async fn delete_nutrition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiMessage>, ApiError> {
    let mut conn = state.conn()?;
    if NutritionRepository::delete(&mut conn, id)? == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    Ok(Json(ApiMessage {
        message: "Informação nutricional deletada",
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/informacao_nutricional/", post(create_nutrition))
        .route(
            "/informacao_nutricional/{id_info}",
            get(get_nutrition).put(update_nutrition).delete(delete_nutrition),
        )
}
