use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;

use crate::auth::jwt::{Claims, JwtKeys};
use crate::auth::AUTH_COOKIE_NAME;
use crate::error::ApiError;
use crate::state::AppState;

/// Session gate for protected routes: reads `authToken` from the cookie
/// jar, verifies it and hands the embedded claims to the handler. A
/// missing or invalid token rejects with 401 before the handler (and
/// therefore before any persistence call).
#[derive(Debug)]
pub struct AuthSession(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Unauthenticated)?;

        let token = jar
            .get(AUTH_COOKIE_NAME)
            .map(|c| c.value().to_owned())
            .ok_or(ApiError::Unauthenticated)?;

        let keys = JwtKeys::from_ref(state);
        match keys.verify(&token) {
            Ok(claims) => Ok(AuthSession(claims)),
            Err(_) => {
                warn!("invalid or expired session token");
                Err(ApiError::Unauthenticated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::dto::SessionUser;
    use axum::http::{header, Request};
    use uuid::Uuid;

    fn make_user() -> SessionUser {
        SessionUser {
            id: Uuid::new_v4(),
            first_name: "Brian".into(),
            last_name: "Gitonga".into(),
            email_address: "brian@example.com".into(),
            username: "brian123".into(),
        }
    }

    fn parts_with_cookie(cookie: Option<String>) -> Parts {
        let mut builder = Request::builder().uri("/blogs");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let req = builder.body(()).unwrap();
        req.into_parts().0
    }

    #[tokio::test]
    async fn missing_cookie_is_rejected() {
        let state = AppState::fake();
        let mut parts = parts_with_cookie(None);
        let err = AuthSession::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let state = AppState::fake();
        let mut parts = parts_with_cookie(Some(format!("{AUTH_COOKIE_NAME}=garbage")));
        let err = AuthSession::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn valid_token_yields_claims() {
        let state = AppState::fake();
        let user = make_user();
        let token = JwtKeys::from_ref(&state).sign(&user).expect("sign");

        let mut parts = parts_with_cookie(Some(format!("{AUTH_COOKIE_NAME}={token}")));
        let AuthSession(claims) = AuthSession::from_request_parts(&mut parts, &state)
            .await
            .expect("extract");
        assert_eq!(claims.user.id, user.id);
        assert_eq!(claims.user.username, user.username);
    }
}
