use std::sync::Arc;
use std::time::Duration;

use auth::TokenService;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::errors::handle_errors;
use super::errors::ApiError;
use super::handlers::create_product::create_product;
use super::handlers::current_user::current_user;
use super::handlers::delete_product::delete_product;
use super::handlers::get_product::get_product;
use super::handlers::get_user::get_user;
use super::handlers::health::health;
use super::handlers::list_products::list_products;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_product::update_product;
use super::middleware::authenticate as auth_middleware;
use super::middleware::request_id;
use super::rate_limit::limit;
use super::rate_limit::RateLimiter;
use crate::domain::auth::service::AuthService;
use crate::domain::product::service::ProductService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::InMemoryProductStore;
use crate::outbound::repositories::InMemoryUserStore;

/// Request bodies over this limit are rejected with a classified 413.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<InMemoryUserStore>>,
    pub user_service: Arc<UserService<InMemoryUserStore>>,
    pub product_service: Arc<ProductService<InMemoryProductStore>>,
    pub tokens: Arc<TokenService>,
    pub rate_limiter: Arc<RateLimiter>,
    pub verbose_errors: bool,
}

pub fn create_router(
    auth_service: Arc<AuthService<InMemoryUserStore>>,
    user_service: Arc<UserService<InMemoryUserStore>>,
    product_service: Arc<ProductService<InMemoryProductStore>>,
    tokens: Arc<TokenService>,
    rate_limiter: Arc<RateLimiter>,
    verbose_errors: bool,
) -> Router {
    let state = AppState {
        auth_service,
        user_service,
        product_service,
        tokens,
        rate_limiter,
        verbose_errors,
    };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/products", get(list_products))
        .route("/api/products/:product_id", get(get_product));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(current_user))
        .route("/api/users", get(list_users))
        .route("/api/users/:user_id", get(get_user))
        .route("/api/products", post(create_product))
        .route("/api/products/:product_id", put(update_product))
        .route("/api/products/:product_id", delete(delete_product))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id))
                .layer(trace_layer)
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn_with_state(state.clone(), limit))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    handle_errors,
                ))
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
