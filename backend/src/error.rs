use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use culture_archive_shared::{messages, Envelope};
use thiserror::Error;

/// Store operation a persistence failure happened in; picks the message
/// shown to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn fallback_message(self) -> &'static str {
        match self {
            Operation::List | Operation::Get => messages::FETCH_FAILED,
            Operation::Create => messages::CREATE_FAILED,
            Operation::Update => messages::UPDATE_FAILED,
            Operation::Delete => messages::DELETE_FAILED,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("archive index not found")]
    NotFound,
    #[error("missing admin credentials")]
    Unauthorized,
    #[error("admin credentials rejected")]
    Forbidden,
    #[error("no route for this path")]
    RouteNotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("{operation:?} failed: {source:#}")]
    Persistence {
        operation: Operation,
        source: anyhow::Error,
    },
}

impl ApiError {
    /// Builds a mapper for `map_err` that logs the cause before it is
    /// replaced by the generic message.
    pub fn persistence(operation: Operation) -> impl FnOnce(anyhow::Error) -> ApiError {
        move |source| {
            tracing::error!("archive {:?} failed: {:#}", operation, source);
            ApiError::Persistence {
                operation,
                source,
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Persistence {
                ..
            } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::Validation(message) => message.clone(),
            ApiError::NotFound => messages::NOT_FOUND.to_string(),
            ApiError::Unauthorized | ApiError::Forbidden => messages::ADMIN_REQUIRED.to_string(),
            ApiError::RouteNotFound => messages::ROUTE_NOT_FOUND.to_string(),
            ApiError::MethodNotAllowed => messages::METHOD_NOT_ALLOWED.to_string(),
            ApiError::Persistence {
                operation,
                ..
            } => operation.fallback_message().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(Envelope::<()>::error(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::{ApiError, Operation};

    #[test]
    fn persistence_error_hides_the_cause() {
        let err = ApiError::persistence(Operation::Create)(anyhow::anyhow!("disk I/O error"));
        assert_eq!(err.public_message(), "典藏索引建立失敗");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn taxonomy_maps_to_status_codes() {
        assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
