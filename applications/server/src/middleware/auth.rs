/// Authentication middleware
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use jukebox_core::{Storage, User, UserId};

/// Identity of the caller, resolved by [`auth_middleware`]
///
/// Handlers that take this extractor can only run behind the middleware.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl AuthenticatedUser {
    pub fn user_id(&self) -> UserId {
        self.0.id
    }
}

/// Caller identity for routes where authentication is optional
#[derive(Debug, Clone)]
pub struct MaybeAuthenticatedUser(pub Option<User>);

/// Extract the bearer token from the Authorization header, if any
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolve the caller from the Authorization header
///
/// Returns `Ok(None)` when no bearer token is present. A token that fails
/// verification, or that names a user who no longer exists, is
/// `ServerError::InvalidToken`.
pub async fn resolve_bearer(app_state: &AppState, headers: &HeaderMap) -> Result<Option<User>> {
    let Some(token) = bearer_token(headers) else {
        return Ok(None);
    };

    let user_id = app_state.auth_service.verify_token(token)?;

    match app_state.db.get_user_by_id(user_id).await? {
        Some(user) => Ok(Some(user)),
        None => {
            tracing::warn!(user_id, "Token references missing user");
            Err(ServerError::InvalidToken)
        }
    }
}

/// Middleware that extracts and validates JWT from Authorization header
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let user = resolve_bearer(&app_state, request.headers())
        .await
        .map_err(|e| {
            tracing::warn!("Token verification failed: {}", e);
            e
        })?
        .ok_or(ServerError::Unauthorized)?;

    request.extensions_mut().insert(AuthenticatedUser(user));

    Ok(next.run(request).await)
}

/// Implement FromRequestParts so AuthenticatedUser can be used as an extractor
#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(ServerError::Unauthorized)
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for MaybeAuthenticatedUser {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        resolve_bearer(state, &parts.headers).await.map(Self)
    }
}
