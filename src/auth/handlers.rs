use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, MessageResponse, RegisterRequest, SessionUser},
        extractors::AuthSession,
        jwt::JwtKeys,
        password,
        repo::User,
        AUTH_COOKIE_NAME,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}

/// Strength is scored before the duplicate checks; that ordering matches
/// the original API and is observable when both would fail.
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    if !password::is_strong_enough(&payload.password) {
        warn!(username = %payload.username, "password too weak");
        return Err(ApiError::WeakPassword);
    }

    if User::find_by_email(&state.db, &payload.email_address)
        .await?
        .is_some()
    {
        warn!(email = %payload.email_address, "email already registered");
        return Err(ApiError::EmailTaken);
    }

    if User::find_by_username(&state.db, &payload.username)
        .await?
        .is_some()
    {
        warn!(username = %payload.username, "username already registered");
        return Err(ApiError::UsernameTaken);
    }

    let hash = password::hash_password(&payload.password)?;
    let user = User::create(
        &state.db,
        &payload.first_name,
        &payload.last_name,
        &payload.email_address,
        &payload.username,
        &hash,
    )
    .await?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registration successfully".into(),
        }),
    ))
}

#[instrument(skip(state, jar, payload))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<SessionUser>), ApiError> {
    let user = match User::find_by_username(&state.db, &payload.username).await? {
        Some(u) => u,
        None => {
            warn!(username = %payload.username, "login unknown username");
            return Err(ApiError::InvalidCredentials(StatusCode::BAD_REQUEST));
        }
    };

    if !password::verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials(StatusCode::UNAUTHORIZED));
    }

    let session = SessionUser::from(&user);
    let token = JwtKeys::from_ref(&state).sign(&session)?;
    let jar = jar.add(
        Cookie::build((AUTH_COOKIE_NAME, token))
            .path("/")
            .http_only(true),
    );

    info!(user_id = %user.id, "user logged in");
    Ok((jar, Json(session)))
}

/// Clears the session cookie unconditionally; idempotent, no auth check.
#[instrument(skip(jar))]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build(AUTH_COOKIE_NAME).path("/"));
    (
        jar,
        Json(MessageResponse {
            message: "Logout successful".into(),
        }),
    )
}

#[instrument(skip(state, session))]
pub async fn me(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<SessionUser>, ApiError> {
    let user = User::find_by_id(&state.db, session.0.user.id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;
    Ok(Json(SessionUser::from(&user)))
}
