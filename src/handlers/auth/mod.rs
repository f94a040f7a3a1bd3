pub mod login;
pub mod me;
pub mod register;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register::handle_register))
        .route("/login", post(login::handle_login))
        .route("/me", get(me::current_user))
}
