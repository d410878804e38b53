use tracing_subscriber::EnvFilter;

use webkit_helpers::config::Config;
use webkit_helpers::server::start_web_server;
use webkit_helpers::WebApp;

// ========================================
// MAIN ENTRY POINT
// ========================================

#[tokio::main]
async fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        "🚀 webkit-helpers starting (environment: {})",
        config.app.environment
    );

    let app = WebApp::new(config);

    if let Err(e) = start_web_server(app).await {
        tracing::error!("Web server stopped: {}", e);
        std::process::exit(1);
    }
}
