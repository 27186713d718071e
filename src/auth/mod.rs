use crate::state::AppState;
use axum::Router;

mod dto;
pub mod extractors;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod repo;

/// Name of the session cookie set on login and cleared on logout.
pub const AUTH_COOKIE_NAME: &str = "authToken";

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
