//! HTTP API that serves app metadata scraped from the Aptoide store.

pub mod aptoide;
pub mod config;
pub mod error;
pub mod routes;
pub mod shared;
pub mod state;

pub use aptoide::{AptoideClient, SearchService};
pub use config::Config;
pub use error::AppError;
pub use state::AppState;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/aptoide", get(routes::app::get_app_metadata))
        .route("/health", get(routes::health::health_check))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
