// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Builds a per-request span carrying a request id taken from x-request-id or generated

use axum::http::Request;
use tracing::Span;
use uuid::Uuid;

/// Header clients may set to correlate their logs with ours
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span for one HTTP request, used as the `TraceLayer` span factory
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), ToOwned::to_owned);

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_builds_with_and_without_header() {
        let plain = Request::builder().uri("/health").body(()).unwrap();
        let _ = make_request_span(&plain);

        let tagged = Request::builder()
            .uri("/health")
            .header(REQUEST_ID_HEADER, "req_abc")
            .body(())
            .unwrap();
        let _ = make_request_span(&tagged);
    }
}
