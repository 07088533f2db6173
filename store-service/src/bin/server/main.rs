use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use auth::HashingParams;
use auth::PasswordHasher;
use auth::TokenService;
use store_service::config::Config;
use store_service::domain::auth::service::AuthService;
use store_service::domain::product::service::ProductService;
use store_service::domain::user::service::UserService;
use store_service::inbound::http::rate_limit::RateLimiter;
use store_service::inbound::http::router::create_router;
use store_service::outbound::repositories::InMemoryProductStore;
use store_service::outbound::repositories::InMemoryUserStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "store_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "store-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        verbose_errors = config.server.verbose_errors,
        token_ttl_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let hasher = PasswordHasher::new(HashingParams {
        memory_kib: config.hashing.memory_kib,
        iterations: config.hashing.iterations,
        parallelism: config.hashing.parallelism,
    })?;
    let tokens = Arc::new(TokenService::new(config.jwt.secret.as_bytes()));

    let user_store = Arc::new(InMemoryUserStore::new());
    let product_store = Arc::new(InMemoryProductStore::new());

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_store),
        hasher,
        Arc::clone(&tokens),
        chrono::Duration::hours(config.jwt.expiration_hours),
    ));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_store)));
    let product_service = Arc::new(ProductService::new(Arc::clone(&product_store)));
    let rate_limiter = Arc::new(RateLimiter::new(
        config.rate_limit.max_requests,
        Duration::from_secs(config.rate_limit.window_seconds),
    ));

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, protocol = "http", "Http server listening");

    let application = create_router(
        auth_service,
        user_service,
        product_service,
        tokens,
        rate_limiter,
        config.server.verbose_errors,
    );

    axum::serve(
        listener,
        application.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install ctrl-c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, shutting down gracefully");
}
