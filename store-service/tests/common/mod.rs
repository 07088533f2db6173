use std::sync::Arc;
use std::time::Duration;

use auth::PasswordHasher;
use auth::TokenService;
use serde_json::json;
use store_service::domain::auth::service::AuthService;
use store_service::domain::product::service::ProductService;
use store_service::domain::user::service::UserService;
use store_service::inbound::http::rate_limit::RateLimiter;
use store_service::inbound::http::router::create_router;
use store_service::outbound::repositories::InMemoryProductStore;
use store_service::outbound::repositories::InMemoryUserStore;

const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    /// Shares the server's signing secret; lets tests mint tokens with
    /// arbitrary lifetimes.
    pub tokens: TokenService,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_store = Arc::new(InMemoryUserStore::new());
        let product_store = Arc::new(InMemoryProductStore::new());
        let tokens = Arc::new(TokenService::new(TEST_JWT_SECRET));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_store),
            PasswordHasher::default(),
            Arc::clone(&tokens),
            chrono::Duration::hours(24),
        ));
        let user_service = Arc::new(UserService::new(Arc::clone(&user_store)));
        let product_service = Arc::new(ProductService::new(Arc::clone(&product_store)));
        let rate_limiter = Arc::new(RateLimiter::new(10_000, Duration::from_secs(60)));

        let router = create_router(
            auth_service,
            user_service,
            product_service,
            tokens,
            rate_limiter,
            false,
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            tokens: TokenService::new(TEST_JWT_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register a user and log in, returning the bearer token.
    pub async fn register_and_login(&self, username: &str, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/register")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self
            .post("/api/auth/login")
            .json(&json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Login response missing token")
            .to_string()
    }
}
