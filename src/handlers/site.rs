use axum::{extract::State, http::StatusCode, routing::get, Router};
use validator::Validate;

use crate::{
    data::models::{ApiMessage, CreateSiteRequest, CreatedResponse, NewSite, Recipe, Site, SiteChanges},
    data::repositories::{RecipeRepository, SiteRepository},
    error::ApiError,
    extract::{Json, Path},
    handlers::today,
    state::AppState,
};

const NOT_FOUND: &str = "Site não encontrado";

pub async fn create_site(
    State(state): State<AppState>,
    Json(payload): Json<CreateSiteRequest>,
) -> Result<(StatusCode, Json<CreatedResponse<i32>>), ApiError> {
    payload.validate()?;

    let mut conn = state.conn()?;
    let id = SiteRepository::create(
        &mut conn,
        &NewSite {
            name: &payload.name,
            url: &payload.url,
            description: &payload.description,
            published_on: payload.published_on.unwrap_or_else(today),
            user_id: &payload.user_id,
        },
    )?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Site criado com sucesso",
            id,
        }),
    ))
}

pub async fn list_sites(State(state): State<AppState>) -> Result<Json<Vec<Site>>, ApiError> {
    let mut conn = state.conn()?;
    Ok(Json(SiteRepository::list(&mut conn)?))
}

pub async fn get_site(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Site>, ApiError> {
    let mut conn = state.conn()?;
    let site = SiteRepository::find_by_id(&mut conn, id)?.ok_or(ApiError::NotFound(NOT_FOUND))?;
    Ok(Json(site))
}

pub async fn update_site(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(changes): Json<SiteChanges>,
) -> Result<Json<ApiMessage>, ApiError> {
    changes.validate()?;

    let mut conn = state.conn()?;
    if SiteRepository::find_by_id(&mut conn, id)?.is_none() {
        return Err(ApiError::NotFound(NOT_FOUND));
    }
    if !changes.is_empty() {
        SiteRepository::update(&mut conn, id, &changes)?;
    }

    Ok(Json(ApiMessage {
        message: "Site atualizado",
    }))
}

pub async fn delete_site(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiMessage>, ApiError> {
    let mut conn = state.conn()?;
    if SiteRepository::delete(&mut conn, id)? == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    Ok(Json(ApiMessage {
        message: "Site deletado",
    }))
}

pub async fn list_site_recipes(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let mut conn = state.conn()?;
    if SiteRepository::find_by_id(&mut conn, id)?.is_none() {
        return Err(ApiError::NotFound(NOT_FOUND));
    }
    Ok(Json(RecipeRepository::list_by_site(&mut conn, id)?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/site/", get(list_sites).post(create_site))
        .route(
            "/site/{id_site}",
            get(get_site).put(update_site).delete(delete_site),
        )
        .route("/site/{id_site}/receitas", get(list_site_recipes))
}
