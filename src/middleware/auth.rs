//! Bearer-token authentication extractor.
//!
//! Every route requires an authenticated user. Handlers take an
//! [`AuthenticatedUser`] argument; extraction parses the `Authorization: Bearer`
//! header and resolves the token against the session table, rejecting the
//! request with 401 before the handler body runs. Token issuance is outside this
//! service; sessions are provisioned by the surrounding platform.

use axum::http::{header, request::Parts};

use crate::{
    data::session::SessionRepository,
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// The authenticated caller, resolved from the request's bearer token.
pub struct AuthenticatedUser {
    pub user_id: i32,
}

/// Extracts the token from a `Bearer <token>` authorization header value.
pub fn parse_bearer(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl axum::extract::FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = parse_bearer(header).ok_or(AuthError::MalformedToken)?;

        let user_id = SessionRepository::new(&state.db)
            .find_user_id_by_token(token)
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        Ok(Self { user_id })
    }
}
