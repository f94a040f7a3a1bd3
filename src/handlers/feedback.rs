use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use validator::Validate;

use crate::{
    data::models::{
        ApiMessage, CreateFeedbackRequest, CreatedResponse, Feedback, FeedbackChanges, NewFeedback,
    },
    data::repositories::FeedbackRepository,
    error::ApiError,
    extract::{Json, Path},
    handlers::today,
    state::AppState,
};

const NOT_FOUND: &str = "Feedback não encontrado";

pub async fn create_feedback(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeedbackRequest>,
) -> Result<(StatusCode, Json<CreatedResponse<i32>>), ApiError> {
    payload.validate()?;

    let mut conn = state.conn()?;
    let id = FeedbackRepository::create(
        &mut conn,
        &NewFeedback {
            comment: &payload.comment,
            rating: payload.rating,
            created_on: payload.created_on.unwrap_or_else(today),
            recipe_id: payload.recipe_id,
            user_id: &payload.user_id,
        },
    )?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Feedback criado com sucesso",
            id,
        }),
    ))
}

pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Feedback>, ApiError> {
    let mut conn = state.conn()?;
    let entry = FeedbackRepository::find_by_id(&mut conn, id)?.ok_or(ApiError::NotFound(NOT_FOUND))?;
    Ok(Json(entry))
}

pub async fn update_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(changes): Json<FeedbackChanges>,
) -> Result<Json<ApiMessage>, ApiError> {
    changes.validate()?;

    let mut conn = state.conn()?;
    if FeedbackRepository::find_by_id(&mut conn, id)?.is_none() {
        return Err(ApiError::NotFound(NOT_FOUND));
    }
    if !changes.is_empty() {
        FeedbackRepository::update(&mut conn, id, &changes)?;
    }

    Ok(Json(ApiMessage {
        message: "Feedback atualizado",
    }))
}

pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiMessage>, ApiError> {
    let mut conn = state.conn()?;
    if FeedbackRepository::delete(&mut conn, id)? == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    Ok(Json(ApiMessage {
        message: "Feedback deletado",
    }))
}

pub async fn like_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Feedback>, ApiError> {
    let mut conn = state.conn()?;
    if FeedbackRepository::add_like(&mut conn, id)? == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }
    let entry = FeedbackRepository::find_by_id(&mut conn, id)?.ok_or(ApiError::NotFound(NOT_FOUND))?;
    Ok(Json(entry))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/feedback/", post(create_feedback))
        .route(
            "/feedback/{id_feedback}",
            get(get_feedback).put(update_feedback).delete(delete_feedback),
        )
        .route("/feedback/{id_feedback}/curtir", post(like_feedback))
}
