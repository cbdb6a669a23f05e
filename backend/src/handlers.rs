use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Json,
};
use culture_archive_shared::{messages, ArchiveFields, ArchiveIndex, ArchiveIndexInput, Envelope};

use crate::{
    error::{ApiError, Operation},
    state::AppState,
};

type ApiResult<T> = Result<Json<Envelope<T>>, ApiError>;

pub async fn list_archives(State(state): State<AppState>) -> ApiResult<Vec<ArchiveIndex>> {
    let archives = state
        .archives()
        .list()
        .await
        .map_err(ApiError::persistence(Operation::List))?;
    Ok(Json(Envelope::data(archives)))
}

pub async fn create_archive(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<ArchiveIndex> {
    let fields = validated_fields(&body)?;
    let archive = state
        .archives()
        .create(fields)
        .await
        .map_err(ApiError::persistence(Operation::Create))?;
    tracing::info!("created archive index {}", archive.id);
    Ok(Json(Envelope::data(archive)))
}

pub async fn get_archive(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ArchiveIndex> {
    let id = parse_id(&id)?;
    let archive = state
        .archives()
        .find(id)
        .await
        .map_err(ApiError::persistence(Operation::Get))?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Envelope::data(archive)))
}

/// Fields are validated before the existence check, so an incomplete body
/// for a missing id is a 400, not a 404.
pub async fn update_archive(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<ArchiveIndex> {
    let fields = validated_fields(&body)?;
    let id = parse_id(&id)?;

    ensure_exists(&state, id, Operation::Update).await?;

    let archive = state
        .archives()
        .update(id, fields)
        .await
        .map_err(ApiError::persistence(Operation::Update))?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("updated archive index {}", archive.id);
    Ok(Json(Envelope::data(archive)))
}

pub async fn delete_archive(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = parse_id(&id)?;

    ensure_exists(&state, id, Operation::Delete).await?;

    let removed = state
        .archives()
        .delete(id)
        .await
        .map_err(ApiError::persistence(Operation::Delete))?;
    if !removed {
        return Err(ApiError::NotFound);
    }
    tracing::info!("deleted archive index {}", id);
    Ok(Json(Envelope::message(messages::DELETED)))
}

/// Known archive path, unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn ensure_exists(state: &AppState, id: i64, operation: Operation) -> Result<(), ApiError> {
    state
        .archives()
        .find(id)
        .await
        .map_err(ApiError::persistence(operation))?
        .map(|_| ())
        .ok_or(ApiError::NotFound)
}

/// Bodies are parsed as JSON whatever their `Content-Type` says.
fn validated_fields(body: &[u8]) -> Result<ArchiveFields, ApiError> {
    let input: ArchiveIndexInput = serde_json::from_slice(body).map_err(|err| {
        tracing::debug!("archive body rejected: {err}");
        ApiError::Validation(messages::MALFORMED_BODY.to_string())
    })?;
    input.validate().map_err(|err| {
        tracing::debug!("{err}");
        ApiError::Validation(messages::FIELDS_REQUIRED.to_string())
    })
}

/// Ids that are not integers cannot name a row, so they are reported as
/// not found.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|_| ApiError::NotFound)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::anyhow;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use culture_archive_shared::{
        archive_store::{ArchiveRepository, SqliteArchiveStore},
        ArchiveFields, ArchiveIndex,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{routes::create_router, state::AppState};

    const TOKEN: &str = "curator-token";

    fn app(admin_token: Option<&str>) -> Router {
        let store = SqliteArchiveStore::open_in_memory().expect("open store");
        create_router(AppState::new(Arc::new(store), admin_token), None)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        let response = app.clone().oneshot(request).await.expect("call router");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn museum() -> Value {
        json!({
            "Class": "museum",
            "WebName": "W",
            "OrgName": "O",
            "OrgWebLink": "http://x"
        })
    }

    #[tokio::test]
    async fn create_echoes_fields_and_assigns_positive_id() {
        let app = app(None);
        let (status, body) = send(&app, Method::POST, "/api/archives", Some(museum()), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["data"]["id"].as_i64().is_some_and(|id| id > 0));
        for key in ["Class", "WebName", "OrgName", "OrgWebLink"] {
            assert_eq!(body["data"][key], museum()[key], "field {key}");
        }
    }

    #[tokio::test]
    async fn missing_field_is_rejected_without_writing() {
        let app = app(None);
        for key in ["Class", "WebName", "OrgName", "OrgWebLink"] {
            let mut input = museum();
            input.as_object_mut().expect("object").remove(key);
            let (status, body) = send(&app, Method::POST, "/api/archives", Some(input), None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "missing {key}");
            assert_eq!(body["success"], false);
            assert_eq!(body["error"], "所有欄位皆為必填");
        }

        let (_, body) = send(&app, Method::GET, "/api/archives", None, None).await;
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn malformed_body_is_a_validation_error() {
        let app = app(None);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/archives")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .expect("build request");
        let response = app.oneshot(request).await.expect("call router");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unsupported_method_and_unknown_path_answer_with_envelope() {
        let app = app(None);
        let (status, body) = send(&app, Method::PATCH, "/api/archives/1", None, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "不支援的請求方法");

        let (status, body) = send(&app, Method::GET, "/api/unknown", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "找不到請求的資源");
    }

    #[tokio::test]
    async fn body_without_content_type_is_still_parsed() {
        let app = app(None);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/archives")
            .body(Body::from(museum().to_string()))
            .expect("build request");
        let response = app.clone().oneshot(request).await.expect("call router");
        assert_eq!(response.status(), StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/api/archives", None, None).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn whitespace_only_field_is_accepted_verbatim() {
        let app = app(None);
        let mut input = museum();
        input["Class"] = json!(" ");
        let (status, body) = send(&app, Method::POST, "/api/archives", Some(input), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["Class"], " ");
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let app = app(None);
        let (_, created) = send(&app, Method::POST, "/api/archives", Some(museum()), None).await;
        let id = created["data"]["id"].as_i64().expect("id");

        let (status, fetched) = send(&app, Method::GET, &format!("/api/archives/{id}"), None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["data"], created["data"]);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let app = app(None);
        let (_, first) = send(&app, Method::POST, "/api/archives", Some(museum()), None).await;
        let (_, second) = send(&app, Method::POST, "/api/archives", Some(museum()), None).await;

        let (status, body) = send(&app, Method::GET, "/api/archives", None, None).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = body["data"]
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|row| row["id"].as_i64())
            .collect();
        assert_eq!(ids, vec![
            second["data"]["id"].as_i64().expect("id"),
            first["data"]["id"].as_i64().expect("id")
        ]);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let app = app(None);
        let (_, created) = send(&app, Method::POST, "/api/archives", Some(museum()), None).await;
        let id = created["data"]["id"].as_i64().expect("id");

        let next = json!({
            "Class": "library",
            "WebName": "W2",
            "OrgName": "O2",
            "OrgWebLink": "https://y"
        });
        let (status, body) =
            send(&app, Method::PUT, &format!("/api/archives/{id}"), Some(next.clone()), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], id);
        assert_eq!(body["data"]["createdAt"], created["data"]["createdAt"]);
        for key in ["Class", "WebName", "OrgName", "OrgWebLink"] {
            assert_eq!(body["data"][key], next[key]);
        }
    }

    #[tokio::test]
    async fn incomplete_update_leaves_row_untouched() {
        let app = app(None);
        let (_, created) = send(&app, Method::POST, "/api/archives", Some(museum()), None).await;
        let id = created["data"]["id"].as_i64().expect("id");

        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/archives/{id}"),
            Some(json!({ "Class": "library", "WebName": "", "OrgName": "O", "OrgWebLink": "x" })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, fetched) = send(&app, Method::GET, &format!("/api/archives/{id}"), None, None).await;
        assert_eq!(fetched["data"], created["data"]);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let app = app(None);
        let cases = [
            (Method::GET, None),
            (Method::PUT, Some(museum())),
            (Method::DELETE, None),
        ];
        for (method, body) in cases {
            for uri in ["/api/archives/999", "/api/archives/abc"] {
                let (status, response) = send(&app, method.clone(), uri, body.clone(), None).await;
                assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
                assert_eq!(response["error"], "典藏索引不存在");
            }
        }
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let app = app(None);
        let (_, created) = send(&app, Method::POST, "/api/archives", Some(museum()), None).await;
        let uri = format!("/api/archives/{}", created["data"]["id"]);

        let (status, body) = send(&app, Method::DELETE, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "message": "典藏索引已成功刪除" }));

        let (status, _) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn mutations_require_configured_admin_token() {
        let app = app(Some(TOKEN));

        let (status, body) = send(&app, Method::POST, "/api/archives", Some(museum()), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);

        let (status, _) =
            send(&app, Method::POST, "/api/archives", Some(museum()), Some("guess")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, created) =
            send(&app, Method::POST, "/api/archives", Some(museum()), Some(TOKEN)).await;
        assert_eq!(status, StatusCode::OK);

        let uri = format!("/api/archives/{}", created["data"]["id"]);
        let (status, _) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK, "reads stay public");

        let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let (status, _) = send(&app, Method::DELETE, &uri, None, Some(TOKEN)).await;
        assert_eq!(status, StatusCode::OK);
    }

    struct BrokenStore;

    #[async_trait]
    impl ArchiveRepository for BrokenStore {
        async fn list(&self) -> anyhow::Result<Vec<ArchiveIndex>> {
            Err(anyhow!("database is locked at /var/lib/archive.db"))
        }

        async fn find(&self, _id: i64) -> anyhow::Result<Option<ArchiveIndex>> {
            Err(anyhow!("database is locked at /var/lib/archive.db"))
        }

        async fn create(&self, _fields: ArchiveFields) -> anyhow::Result<ArchiveIndex> {
            Err(anyhow!("database is locked at /var/lib/archive.db"))
        }

        async fn update(
            &self,
            _id: i64,
            _fields: ArchiveFields,
        ) -> anyhow::Result<Option<ArchiveIndex>> {
            Err(anyhow!("database is locked at /var/lib/archive.db"))
        }

        async fn delete(&self, _id: i64) -> anyhow::Result<bool> {
            Err(anyhow!("database is locked at /var/lib/archive.db"))
        }
    }

    #[tokio::test]
    async fn store_failures_use_generic_messages() {
        let app = create_router(AppState::new(Arc::new(BrokenStore), None), None);
        let cases = [
            (Method::GET, "/api/archives", None, "典藏索引獲取失敗"),
            (Method::POST, "/api/archives", Some(museum()), "典藏索引建立失敗"),
            (Method::GET, "/api/archives/1", None, "典藏索引獲取失敗"),
            (Method::PUT, "/api/archives/1", Some(museum()), "典藏索引更新失敗"),
            (Method::DELETE, "/api/archives/1", None, "典藏索引刪除失敗"),
        ];
        for (method, uri, body, message) in cases {
            let (status, response) = send(&app, method.clone(), uri, body, None).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
            assert_eq!(response["error"], message);
            assert!(!response.to_string().contains("/var/lib"));
        }
    }
}
