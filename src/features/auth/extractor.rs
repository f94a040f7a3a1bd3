use axum::{extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::{error::ApiError, state::AppState};

/// Caller identity taken from a valid `Authorization: Bearer` token.
#[derive(Debug)]
pub struct AuthUser {
    pub user_id: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::Unauthorized)?;

        let claims = state.tokens.verify(bearer.token()).map_err(|e| {
            log::warn!("Rejected access token: {}", e);
            ApiError::Unauthorized
        })?;

        Ok(AuthUser { user_id: claims.sub })
    }
}
