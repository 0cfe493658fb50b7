//! smart-notes-api - HTTP API server for smart-notes

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smart_notes_api::config::{LogConfig, DEFAULT_LOG_FILTER};
use smart_notes_api::{build_router, AppState, Config, NoteService};
use smart_notes_db::{Database, PoolConfig};
use smart_notes_inference::{GeminiBackend, Summarizer};

/// Install the global tracing subscriber.
///
/// Returns the file writer guard, which must live as long as the process.
fn init_tracing(log: &LogConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let registry = tracing_subscriber::registry().with(env_filter);

    // Optionally create a file appender with daily rotation
    if let Some(ref path) = log.file {
        let path = std::path::Path::new(path);
        let file_dir = path.parent().unwrap_or(std::path::Path::new("."));
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("smart-notes-api.log");
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        if log.json {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init();
        } else {
            // no ANSI in files unless asked for
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(log.ansi.unwrap_or(false));
            registry.with(layer).init();
        }
        Some(guard)
    } else {
        if log.json {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        } else {
            let mut layer = tracing_subscriber::fmt::layer();
            if let Some(ansi) = log.ansi {
                layer = layer.with_ansi(ansi);
            }
            registry.with(layer).init();
        }
        None
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let _file_guard = init_tracing(&config.log);
    let log_format = if config.log.json { "json" } else { "text" };
    info!(
        log_format,
        log_file = config.log.file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );

    // Database
    let db = Database::connect_with_config(
        &config.database_url,
        PoolConfig::new().max_connections(config.db_max_connections),
    )
    .await?;
    db.migrate().await?;
    info!(subsystem = "db", "Migrations applied");

    // Summarization
    let backend = GeminiBackend::new(config.gemini.clone())?;
    let summarizer = Summarizer::new(Arc::new(backend));

    let service = NoteService::new(Arc::new(db.notes.clone()), summarizer);
    let app = build_router(AppState::new(service));

    // Start server
    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
