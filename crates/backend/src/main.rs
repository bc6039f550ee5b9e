pub mod api;
pub mod costing;
pub mod db;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::routing::{get, post};
    use axum::Router;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_path = std::env::var("BALLCOSTING_DB").unwrap_or_else(|_| "costing.db".into());
    let pool = db::init(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;
    tracing::info!("database ready at {}", db_path);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/save", post(api::handlers::save))
        .route("/api/submissions", get(api::handlers::list_submissions))
        .fallback_service(ServeDir::new("dist"))
        .layer(cors)
        .with_state(pool);

    let addr: SocketAddr = ([0, 0, 0, 0], 3000).into();
    tracing::info!("listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
