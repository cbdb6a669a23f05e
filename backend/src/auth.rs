use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{error::ApiError, state::AppState};

/// Gate for mutating archive routes: the caller must present the configured
/// admin token as `Authorization: Bearer <token>`. Without a configured
/// token every request passes.
pub async fn require_admin(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let Some(expected) = state.admin_token() else {
        return next.run(request).await;
    };

    let rejection = match bearer_token(request.headers()) {
        None => Some(ApiError::Unauthorized),
        Some(presented) if !constant_time_eq(presented.as_bytes(), expected.as_bytes()) => {
            Some(ApiError::Forbidden)
        },
        Some(_) => None,
    };

    match rejection {
        Some(err) => {
            tracing::warn!("rejected {} {}: {}", request.method(), request.uri().path(), err);
            err.into_response()
        },
        None => next.run(request).await,
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0_u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
