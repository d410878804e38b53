pub mod handlers;
pub mod view;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;

use crate::WebApp;

pub fn router(app: WebApp) -> Router {
    Router::new()
        .route("/login", get(handlers::login_page).post(handlers::login_submit))
        .route("/logout", post(handlers::logout))
        .route("/dashboard", get(handlers::dashboard))
        .route("/api/health", get(handlers::health))
        .layer(CompressionLayer::new())
        .with_state(app)
}

pub async fn start_web_server(app: WebApp) -> std::io::Result<()> {
    let addr = app.config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🌐 Web app available at http://{}", addr);

    axum::serve(listener, router(app)).await
}
