//! # FashionOS HTTP API Module
//!
//! This module implements the HTTP JSON API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /site` - Brand copy
//! - `GET /collections`, `GET /collections/{id}` - Collection gallery
//! - `GET /designers` - Designer directory
//! - `GET /designers/{id}` - Designer profile
//! - `POST /wizards` - Open a submission wizard
//! - `GET|DELETE /wizards/{id}` - Inspect or discard a wizard
//! - `POST /wizards/{id}/fields|images|tags` - Edit the draft
//! - `DELETE /wizards/{id}/images/{index}` - Remove an image
//! - `POST /wizards/{id}/advance|retreat|review|reset` - Navigate
//! - `POST /wizards/{id}/submit` - Start submission (202)
//! - `GET /wizards/{id}/preview` - Profile preview from the wizard data
//!
//! ## Security Configuration
//!
//! - `cors_origins`: allowed origins, `["*"]` for all (default: localhost only)
//! - `rate_limit`: requests per second (default: 100, 0 to disable)
//! - `FASHIONOS_API_KEY`: if set, requires Bearer token authentication

mod auth;
mod handlers;
mod middleware;
mod types;

pub use auth::keys_match;
pub use middleware::create_rate_limiter;
pub use types::{
    DraftView, ErrorResponse, HealthResponse, ImagePayload, ImageUploadRequest, ProfileResponse,
    SubmittedView, TagToggleRequest, WizardResponse, WizardView, error_status,
};

use crate::config::{ServerSettings, Settings};
use crate::sessions::{SharedRegistry, WizardRegistry};
use crate::submission::{SimulatedGateway, SubmissionGateway};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use fashionos_core::{Catalog, FashionError};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state.
#[derive(Clone)]
pub struct AppState {
    /// Live wizard sessions.
    pub wizards: SharedRegistry,
    /// Read-only site data.
    pub catalog: Arc<Catalog>,
    /// Where finished submissions go.
    pub gateway: Arc<dyn SubmissionGateway>,
}

impl AppState {
    /// State with an empty, unbounded registry.
    #[must_use]
    pub fn new(catalog: Catalog, gateway: Arc<dyn SubmissionGateway>) -> Self {
        Self {
            wizards: WizardRegistry::new().into_shared(),
            catalog: Arc::new(catalog),
            gateway,
        }
    }

    /// Replace the registry with an empty one capped at `max_sessions`.
    #[must_use]
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.wizards = WizardRegistry::with_max_sessions(max_sessions).into_shared();
        self
    }

    /// Built-in catalog and the simulated gateway configured in `settings`.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Catalog::builtin(),
            Arc::new(SimulatedGateway::new(settings.submit_delay())),
        )
        .with_max_sessions(settings.wizard.max_sessions)
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

const CORS_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];

/// Build the CORS layer.
///
/// - `["*"]`: allows all origins (development only)
/// - `None`: localhost only
/// - otherwise: the listed origins; invalid entries are skipped
fn build_cors_layer(origins: Option<&[String]>) -> CorsLayer {
    match origins {
        Some([only]) if only == "*" => {
            tracing::warn!("CORS: Allowing ALL origins. This is insecure for production!");
            CorsLayer::permissive()
        }
        Some(list) => {
            let allowed: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(hv) => {
                        tracing::info!("CORS: Allowing origin: {}", origin);
                        Some(hv)
                    }
                    Err(e) => {
                        tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                        None
                    }
                })
                .collect();

            if allowed.is_empty() {
                tracing::warn!("CORS: No valid origins configured, defaulting to localhost only");
                build_localhost_cors()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed)
                    .allow_methods(CORS_METHODS)
                    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            }
        }
        None => {
            tracing::info!("CORS: No origins configured, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

/// Build a restrictive CORS layer that only allows localhost origins.
fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:5173",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:5173",
    ]
    .into_iter()
    .filter_map(|o| o.parse().ok())
    .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(CORS_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Rate Limiting - if enabled
/// 4. Authentication - if an API key is configured
pub fn create_router(state: AppState, settings: &ServerSettings) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/site", get(handlers::site_handler))
        .route("/collections", get(handlers::collections_handler))
        .route("/collections/{id}", get(handlers::collection_handler))
        .route("/designers", get(handlers::designers_handler))
        .route("/designers/{id}", get(handlers::designer_handler))
        .route("/wizards", post(handlers::create_wizard_handler))
        .route(
            "/wizards/{id}",
            get(handlers::get_wizard_handler).delete(handlers::delete_wizard_handler),
        )
        .route("/wizards/{id}/fields", post(handlers::set_field_handler))
        .route("/wizards/{id}/images", post(handlers::add_images_handler))
        .route(
            "/wizards/{id}/images/{index}",
            delete(handlers::remove_image_handler),
        )
        .route("/wizards/{id}/tags", post(handlers::toggle_tag_handler))
        .route("/wizards/{id}/advance", post(handlers::advance_handler))
        .route("/wizards/{id}/retreat", post(handlers::retreat_handler))
        .route("/wizards/{id}/review", post(handlers::review_handler))
        .route("/wizards/{id}/submit", post(handlers::submit_handler))
        .route("/wizards/{id}/reset", post(handlers::reset_handler))
        .route("/wizards/{id}/preview", get(handlers::preview_handler));

    match settings.api_key.as_deref() {
        Some(key) => {
            tracing::info!("API key authentication enabled");
            router = router.layer(axum_middleware::from_fn_with_state(
                auth::ApiKey::from(key),
                auth::api_key_auth_middleware,
            ));
        }
        None => tracing::warn!(
            "API key authentication DISABLED - all endpoints are publicly accessible! \
             Set FASHIONOS_API_KEY to enable authentication."
        ),
    }

    match create_rate_limiter(settings.rate_limit) {
        Some(limiter) => {
            tracing::info!("Rate limiting enabled: {} requests/second", settings.rate_limit);
            router = router.layer(axum_middleware::from_fn_with_state(
                limiter,
                middleware::rate_limit_middleware,
            ));
        }
        None => tracing::info!("Rate limiting disabled"),
    }

    router
        .layer(axum::extract::DefaultBodyLimit::max(settings.body_limit_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer(settings.cors_origins.as_deref())),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl+C.
pub async fn run_server(settings: Settings) -> Result<(), FashionError> {
    let state = AppState::from_settings(&settings);
    let router = create_router(state, &settings.server);
    let addr = settings.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FashionError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!(
        submit_delay_ms = settings.wizard.submit_delay_ms,
        "FashionOS HTTP server listening on {}",
        addr
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FashionError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
