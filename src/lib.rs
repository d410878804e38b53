pub mod config;
pub mod navigation;
pub mod server;
pub mod utils;

use std::fmt::Display;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::utils::LocalLogger;

// ========================================
// APP STATE
// ========================================

/// Shared state handed to every handler. Cheap to clone (all fields are Arcs or Copy).
#[derive(Clone)]
pub struct WebApp {
    pub config: Arc<Config>,
    pub logger: Arc<LocalLogger>,
    pub start_time: Instant,
}

impl WebApp {
    pub fn new(config: Config) -> Self {
        let logger = Arc::new(LocalLogger::new(&config.app.environment));
        if logger.is_enabled() {
            tracing::debug!("Local console logging enabled ({})", config.app.environment);
        }

        Self {
            config: Arc::new(config),
            logger,
            start_time: Instant::now(),
        }
    }

    /// Local console log; a failing sink is reported through tracing and otherwise ignored.
    pub fn dev_log(&self, values: &[&dyn Display]) {
        if let Err(e) = self.logger.log(values) {
            tracing::warn!("Local log write failed: {}", e);
        }
    }
}
