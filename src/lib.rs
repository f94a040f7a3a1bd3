//! Recipe-sharing backend: users, recipe sites, recipes, nutrition info,
//! feedback and saved-recipe bookmarks over JSON CRUD routes, plus
//! bcrypt-backed registration and JWT login.

use axum::Router;
use tower_http::cors::CorsLayer;

pub mod config;
pub mod data;
pub mod db;
pub mod error;
pub mod extract;
pub mod features;
pub mod handlers;
pub mod schema;
pub mod state;

pub use config::Config;
pub use error::ApiError;
pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::auth::router())
        .merge(handlers::usuario::router())
        .merge(handlers::site::router())
        .merge(handlers::receitas::router())
        .merge(handlers::informacao_nutricional::router())
        .merge(handlers::feedback::router())
        .merge(handlers::receitas_salvas::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
