use std::{fmt, str::FromStr};

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Correlation header, read on the way in and echoed on the way out
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation ID attached to every request as an extension
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Caller-supplied ID, if the header holds a UUID
    fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get(REQUEST_ID_HEADER)?
            .to_str()
            .ok()?
            .parse()
            .ok()
    }

    fn header_value(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.0.to_string()).ok()
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RequestId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Tags the request with a correlation ID and returns it in `x-request-id`
///
/// A UUID sent by the caller is kept; anything else gets a fresh one.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_headers(request.headers()).unwrap_or_default();
    request.extensions_mut().insert(request_id);

    let mut response = next.run(request).await;
    if let Some(value) = request_id.header_value() {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// `TraceLayer` span carrying method, path and correlation ID
pub fn make_span_with_request_id(request: &Request<Body>) -> tracing::Span {
    let request_id = request.extensions().get::<RequestId>().copied();

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = request_id.map(tracing::field::display),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_caller_uuid_is_kept() {
        let id = Uuid::new_v4();
        let headers = headers_with(&format!(" {id} "));
        assert_eq!(RequestId::from_headers(&headers), Some(RequestId(id)));
    }

    #[test]
    fn test_non_uuid_header_is_ignored() {
        assert_eq!(RequestId::from_headers(&headers_with("not-a-uuid")), None);
        assert_eq!(RequestId::from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_display_and_header_match_uuid() {
        let id = RequestId::new();
        assert_eq!(id.to_string(), id.0.to_string());
        assert_eq!(
            id.header_value().unwrap().to_str().unwrap(),
            id.0.to_string()
        );
    }
}
