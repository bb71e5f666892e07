//! CORS allow-list
//!
//! Requests without an `Origin` header pass through. Requests from an origin
//! outside the allow-list are refused with `403` before routing; allowed
//! origins get the usual `Access-Control-*` headers from tower-http.

use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:8080",
    "http://localhost:3000",
    "http://localhost:8000",
];

pub const CORS_REJECTED_MESSAGE: &str = "Not Allowed By CORS";

#[derive(Debug, Clone)]
pub struct AllowedOrigins {
    origins: Arc<Vec<HeaderValue>>,
}

impl AllowedOrigins {
    /// Unparseable entries and the `*` wildcard are skipped.
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let origins = origins
            .into_iter()
            .filter_map(|origin| {
                let origin = origin.as_ref().trim();
                if origin == "*" {
                    warn!("wildcard origin ignored in CORS allow-list");
                    return None;
                }
                HeaderValue::from_str(origin).ok()
            })
            .collect();

        Self {
            origins: Arc::new(origins),
        }
    }

    pub fn is_allowed(&self, origin: Option<&HeaderValue>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.origins.iter().any(|allowed| allowed == origin),
        }
    }

    pub fn layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.origins.iter().cloned()))
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
            .max_age(Duration::from_secs(600))
    }
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGINS)
    }
}

/// Middleware refusing requests from origins outside the allow-list.
pub async fn cors_gate(
    State(allowed): State<AllowedOrigins>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request.headers().get(header::ORIGIN);
    if allowed.is_allowed(origin) {
        return next.run(request).await;
    }

    warn!(
        origin = ?origin,
        method = %request.method(),
        path = %request.uri().path(),
        "request rejected by CORS allow-list"
    );
    (StatusCode::FORBIDDEN, CORS_REJECTED_MESSAGE).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_origin_is_allowed() {
        assert!(AllowedOrigins::default().is_allowed(None));
    }

    #[test]
    fn test_listed_origin_is_allowed() {
        let allowed = AllowedOrigins::default();
        let origin = HeaderValue::from_static("http://localhost:3000");
        assert!(allowed.is_allowed(Some(&origin)));
    }

    #[test]
    fn test_unlisted_origin_is_rejected() {
        let allowed = AllowedOrigins::default();
        let origin = HeaderValue::from_static("https://evil.example");
        assert!(!allowed.is_allowed(Some(&origin)));
    }

    #[test]
    fn test_wildcard_is_never_allowed() {
        let allowed = AllowedOrigins::new(["*", "http://localhost:9000"]);
        let origin = HeaderValue::from_static("https://evil.example");
        assert!(!allowed.is_allowed(Some(&origin)));
        let listed = HeaderValue::from_static("http://localhost:9000");
        assert!(allowed.is_allowed(Some(&listed)));
    }
}
