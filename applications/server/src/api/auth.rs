/// Registration and login routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, Json};
use jukebox_core::{CreateUser, Storage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /register
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>> {
    let username = req.username.trim();
    if username.is_empty() {
        return Err(ServerError::BadRequest(
            "Username must not be empty".to_string(),
        ));
    }

    let password_hash = app_state.auth_service.hash_password(&req.password).await?;

    let user = app_state
        .db
        .create_user(CreateUser {
            username: username.to_string(),
            password_hash,
        })
        .await
        .map_err(|e| {
            if e.is_duplicate() {
                ServerError::UsernameTaken
            } else {
                ServerError::from(e)
            }
        })?;

    tracing::info!(user_id = user.id, "Registered user {}", user.username);

    let token = app_state.auth_service.issue_token(user.id)?;
    Ok(Json(TokenResponse { token }))
}

/// POST /login
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>> {
    // Usernames are stored trimmed
    let username = req.username.trim();

    let Some(credentials) = app_state.db.get_credentials(username).await? else {
        tracing::warn!("Login attempt for unknown user {}", username);
        return Err(ServerError::InvalidCredentials);
    };

    if !app_state
        .auth_service
        .verify_password(&req.password, &credentials.password_hash)
        .await?
    {
        tracing::warn!("Wrong password for user {}", username);
        return Err(ServerError::InvalidCredentials);
    }

    let token = app_state.auth_service.issue_token(credentials.user.id)?;
    Ok(Json(TokenResponse { token }))
}
