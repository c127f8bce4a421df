//! # RoomBook API
//!
//! The API crate serves the room availability resolver over HTTP.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Fetch bookings through the booking backend and resolve slots
//! - **Middleware**: Error mapping and per-request session extraction
//! - **Config**: Environment-driven server, backend and operating-hours settings
//!
//! Bookings are owned by an external REST backend, reached through
//! [`roombook_client::BookingBackend`].

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error mapping and session extraction
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::Result;
use roombook_client::BookingBackend;
use roombook_core::hours::OperatingHours;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Source of bookings
    pub backend: Arc<dyn BookingBackend>,
    /// Slots offered on every day
    pub hours: OperatingHours,
    /// Fallback token for requests that carry none
    pub service_token: Option<String>,
}

/// Builds the application router with all routes attached to `state`
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Availability endpoints
        .merge(routes::availability::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
        ])
        .allow_origin(origins)
        .allow_credentials(true)
}

/// Starts the API server with the provided configuration and booking backend
///
/// Initializes logging, builds the router with CORS, tracing and timeout
/// layers, then serves until the process is stopped.
///
/// # Example
///
/// ```no_run
/// # use std::{sync::Arc, time::Duration};
/// # use roombook_api::config::ApiConfig;
/// # use roombook_client::RestClient;
/// # async fn run() -> eyre::Result<()> {
/// let config = ApiConfig::from_env()?;
/// let backend = RestClient::new(&config.backend_url, Duration::from_secs(config.request_timeout))?;
/// roombook_api::start_server(config, Arc::new(backend)).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(
    config: config::ApiConfig,
    backend: Arc<dyn BookingBackend>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState {
        backend,
        hours: config.hours,
        service_token: config.backend_token.clone(),
    });

    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        "Server listening on http://{} (slots {:02}:00-{:02}:00, backend {})",
        addr,
        config.hours.open_hour(),
        config.hours.close_hour(),
        config.backend_url
    );
    axum::serve(listener, app).await?;

    Ok(())
}
