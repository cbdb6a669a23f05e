use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::Request,
    http::{header::HeaderName, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const TRACE_ID_HEADER: &str = "x-trace-id";

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Wraps every request in an `http_request` span carrying request and trace
/// ids, echoes both ids back, and logs the outcome once the handler is done.
pub async fn request_context_middleware(request: Request, next: Next) -> Response {
    let headers = request.headers();
    let request_id = incoming_id(headers, REQUEST_ID_HEADER).unwrap_or_else(|| next_id("req"));
    let trace_id = incoming_id(headers, TRACE_ID_HEADER).unwrap_or_else(|| request_id.clone());

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        trace_id = %trace_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let started_at = Instant::now();
    let mut response = next.run(request).instrument(span.clone()).await;
    let status = response.status();
    let elapsed_ms = started_at.elapsed().as_millis();

    if status.is_server_error() {
        tracing::warn!(parent: &span, status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        tracing::info!(parent: &span, status = status.as_u16(), elapsed_ms, "request completed");
    }

    echo_header(response.headers_mut(), REQUEST_ID_HEADER, &request_id);
    echo_header(response.headers_mut(), TRACE_ID_HEADER, &trace_id);
    response
}

fn incoming_id(headers: &HeaderMap, name: &'static str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

fn next_id(prefix: &str) -> String {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or_default();
    let seq = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{now_ms:x}-{seq:08x}")
}

fn echo_header(headers: &mut HeaderMap, name: &'static str, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(HeaderName::from_static(name), value);
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue};

    use super::{incoming_id, next_id, REQUEST_ID_HEADER};

    #[test]
    fn generated_ids_are_unique_and_prefixed() {
        let first = next_id("req");
        let second = next_id("req");
        assert!(first.starts_with("req-"));
        assert_ne!(first, second);
    }

    #[test]
    fn incoming_id_ignores_blank_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  "));
        assert_eq!(incoming_id(&headers, REQUEST_ID_HEADER), None);

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc "));
        assert_eq!(incoming_id(&headers, REQUEST_ID_HEADER).as_deref(), Some("abc"));
    }
}
