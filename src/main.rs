use anyhow::Result;
use std::sync::Arc;

mod config;
mod error;
mod logging;
mod routes;
mod services;
pub mod models;
#[cfg(test)]
mod test_support;

use services::portfolio::{ProjectCache, WorkbookSource};
use services::session::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    logging::init_logging()?;

    // Load configuration
    let config = config::Config::new()?;
    tracing::info!("Portfolio workbook: {}", config.workbook_path.display());

    // Build our application state
    let source = Arc::new(WorkbookSource::new(config.workbook_path.clone()));
    let state = Arc::new(AppState::new(config, ProjectCache::new(source)));

    let app = routes::router(state.clone());

    // Run it
    let addr = state.config.bind_addr;
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// Application state
pub struct AppState {
    config: config::Config,
    projects: ProjectCache,
    sessions: SessionStore,
}

impl AppState {
    fn new(config: config::Config, projects: ProjectCache) -> Self {
        let sessions = SessionStore::new(config.session_ttl);
        Self { config, projects, sessions }
    }
}
