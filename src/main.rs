use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loyalty_points_api::config::Config;
use loyalty_points_api::constants::ALLOWED_ORIGIN;
use loyalty_points_api::db::create_pool;
use loyalty_points_api::routes::{
    get_leaderboard, get_status, get_user_profile, get_user_transactions, test_api,
};
use loyalty_points_api::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loyalty_points_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Loyalty Points API...");

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Create database connection pool
    let pool = create_pool(&config.database_url()).await?;

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations complete");

    // The overlay is the only browser client; the API is read-only
    let cors = CorsLayer::new()
        .allow_origin(ALLOWED_ORIGIN.parse::<HeaderValue>()?)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    // Create app state
    let state = AppState::new(pool);

    // Build router
    let app = Router::new()
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/status", get(get_status))
        .route("/api/test", get(test_api))
        .route("/api/user/:user_id", get(get_user_profile))
        .route("/api/user/:user_id/transactions", get(get_user_transactions))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
