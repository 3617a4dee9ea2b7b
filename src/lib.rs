//! Shutterbay - A lightweight photo-sharing server
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      API Layer (Axum)                        │
//! │  - Account / photo / comment endpoints                      │
//! │  - Static single-page front door                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Service Layer                            │
//! │  - Credential checks, tallies, comment threads              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Data Layer                              │
//! │  - Flat JSON documents, read and rewritten wholesale        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - `api`: HTTP handlers and DTOs
//! - `service`: Business logic layer
//! - `data`: Store trait and the JSON-file implementation
//! - `auth`: HMAC-signed cookie sessions
//! - `config`: Configuration management
//! - `error`: Error types
//! - `metrics`: Prometheus instruments
//! - `validate`: Email syntax validation

pub mod api;
pub mod auth;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod service;
pub mod validate;

use std::sync::Arc;

use crate::data::{JsonFileStore, PhotoStore};
use crate::service::{AccountService, CommentService, PhotoService};

/// Application state shared across all handlers
///
/// This struct is cloned for each request. Handlers reach persistence
/// only through the services, which share one injected store.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<config::AppConfig>,

    /// Account operations (credential store)
    pub accounts: Arc<AccountService>,

    /// Image post operations (content store)
    pub photos: Arc<PhotoService>,

    /// Comment operations (content store)
    pub comments: Arc<CommentService>,
}

impl AppState {
    /// Initialize application state
    ///
    /// # Steps
    /// 1. Open the JSON-file store, creating missing files empty
    /// 2. Wire the services over the shared store handle
    ///
    /// # Errors
    /// Returns error if the store files cannot be created
    pub async fn new(config: config::AppConfig) -> Result<Self, error::AppError> {
        tracing::info!("Initializing application state...");

        let file_store = JsonFileStore::new(&config.store);
        file_store.ensure_files().await?;
        let store: Arc<dyn PhotoStore> = Arc::new(file_store);
        tracing::info!("Store files ready");

        Ok(Self {
            config: Arc::new(config),
            accounts: Arc::new(AccountService::new(store.clone())),
            photos: Arc::new(PhotoService::new(store.clone())),
            comments: Arc::new(CommentService::new(store)),
        })
    }
}

/// Build the Axum router with all routes.
///
/// This is shared by the binary and integration tests to keep route
/// composition consistent across environments.
pub fn build_router(state: AppState) -> axum::Router {
    use axum::Router;
    use tower_http::services::{ServeDir, ServeFile};
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

    // Static assets, with the single-page shell for unmatched paths.
    let public_dir = state.config.server.public_dir.clone();
    let front_door =
        ServeDir::new(&public_dir).fallback(ServeFile::new(public_dir.join("index.html")));

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .nest("/api", api::api_router())
        .fallback_service(front_door)
        .layer(axum::middleware::from_fn(api::metrics::track_metrics))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(api::metrics_router())
}

async fn health_check() -> &'static str {
    "OK"
}
