use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;

use axum::extract::ConnectInfo;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;

/// Fixed-window request counter for a single client.
struct WindowEntry {
    request_count: u32,
    window_start: Instant,
}

/// Process-wide request rate limiter.
///
/// Counts requests per client IP over a fixed window and rejects the
/// excess before any of it reaches authentication or handlers.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    entries: Mutex<HashMap<String, WindowEntry>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Check whether a request from `client` is within budget.
    pub fn check(&self, client: &str) -> bool {
        let Ok(mut entries) = self.entries.lock() else {
            tracing::warn!("Rate limiter lock poisoned, allowing request");
            return true;
        };

        let now = Instant::now();
        let entry = entries.entry(client.to_string()).or_insert(WindowEntry {
            request_count: 0,
            window_start: now,
        });

        if now.duration_since(entry.window_start) >= self.window {
            entry.request_count = 0;
            entry.window_start = now;
        }

        entry.request_count += 1;
        entry.request_count <= self.max_requests
    }
}

/// Middleware applying the process-wide rate limit.
///
/// Rejections use a plain 429 body; they happen before the request enters
/// the authenticated pipeline and stay outside its classified statuses.
pub async fn limit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    if !state.rate_limiter.check(&client) {
        tracing::warn!(%client, "Rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "error": "Too many requests",
                "message": "Rate limit exceeded, try again later"
            })),
        )
            .into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_max_requests() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));

        assert!(limiter.check("10.0.0.1"));
        assert!(limiter.check("10.0.0.1"));
        assert!(limiter.check("10.0.0.1"));
        assert!(!limiter.check("10.0.0.1"));
    }

    #[test]
    fn test_clients_are_counted_separately() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));

        assert!(limiter.check("10.0.0.1"));
        assert!(limiter.check("10.0.0.2"));
        assert!(!limiter.check("10.0.0.1"));
    }

    #[test]
    fn test_window_resets() {
        let limiter = RateLimiter::new(1, Duration::from_millis(20));

        assert!(limiter.check("10.0.0.1"));
        assert!(!limiter.check("10.0.0.1"));

        std::thread::sleep(Duration::from_millis(25));
        assert!(limiter.check("10.0.0.1"));
    }
}
