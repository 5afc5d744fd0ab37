use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use payroll_reference::api::{AppState, create_router};
use payroll_reference::config::{Settings, SettingsLoader};
use payroll_reference::error::{EngineError, EngineResult};
use payroll_reference::fetch::{FetchClient, ReqwestTransport};
use payroll_reference::logging::{Logger, TracingLogger};
use payroll_reference::table::TableRegistry;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        error!(error = %err, "payroll-reference exited with an error");
        std::process::exit(1);
    }
}

async fn run() -> EngineResult<()> {
    let config_path = SettingsLoader::config_path();
    let settings = SettingsLoader::load_with_env(&config_path)?;
    info!(path = %config_path, tables = settings.tables.len(), "Settings loaded");

    let missing = settings.resources.missing_known_keys();
    if !missing.is_empty() {
        warn!(?missing, "Known reference resources have no URL configured");
    }

    let registry = build_registry(&settings)?;
    let app = create_router(AppState::new(registry));

    let listener = tokio::net::TcpListener::bind(settings.server.bind.as_str())
        .await
        .map_err(|e| EngineError::TransportSetup {
            message: format!("cannot bind {}: {e}", settings.server.bind),
        })?;
    info!(bind = %settings.server.bind, "Listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| EngineError::TransportSetup {
            message: e.to_string(),
        })
}

fn build_registry(settings: &Settings) -> EngineResult<TableRegistry> {
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
    let transport = ReqwestTransport::new(settings.fetch.request_timeout())?;
    let client = Arc::new(FetchClient::new(
        Arc::new(transport),
        Arc::clone(&logger),
        settings.resources.clone(),
        settings.fetch.retry_policy(),
    ));
    TableRegistry::from_settings(settings, client, logger)
}
