//! studykit-api - HTTP API server for studykit.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studykit_api::{router, AppState, StoreConfig};
use studykit_core::defaults::{SERVER_HOST, SERVER_PORT};
use studykit_core::DocumentStore;
use studykit_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with configurable output
    //
    // Environment variables:
    //   LOG_FORMAT - "json" or "text" (default: "text")
    //   RUST_LOG   - standard env filter (default: "studykit_api=debug,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "studykit_api=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(env_filter);
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // Get configuration from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| SERVER_HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| SERVER_PORT.to_string())
        .parse()
        .unwrap_or(SERVER_PORT);

    // Connect to the document store. Missing configuration or a failed
    // connection leaves the process in degraded mode for its whole life;
    // requests then answer with a store-unavailable error and the /test
    // endpoint reports what was observed here.
    let config = StoreConfig::from_env();
    let store: Option<Arc<dyn DocumentStore>> = match config.database_url() {
        Some(url) => match Database::connect(&url).await {
            Ok(db) => match db.migrate().await {
                Ok(()) => {
                    info!("Document store connected");
                    Some(Arc::new(db.documents))
                }
                Err(err) => {
                    warn!(error = %err, "Migration failed; running without a store");
                    None
                }
            },
            Err(err) => {
                warn!(error = %err, "Document store connection failed; running without a store");
                None
            }
        },
        None => {
            warn!("DATABASE_URL/DATABASE_NAME not configured; running without a store");
            None
        }
    };

    let state = AppState::new(store, &config);
    let app = router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
