//! HTTP server setup and routing
//!
//! Builds the Axum router for all EcoTrack endpoints. Unsupported verbs on a
//! known path get a 405 from the method router.

use axum::{
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

/// Shared application context passed to all handlers
#[derive(Clone)]
pub struct AppContext {
    pub db_pool: SqlitePool,
}

/// Build the application router with all routes
pub fn create_router(ctx: AppContext) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(super::health))
        // User lookup and first-login upsert
        .route(
            "/users",
            get(super::users::get_user).post(super::users::create_user),
        )
        // Audit listing and submission
        .route(
            "/audits",
            get(super::audits::list_audits).post(super::audits::create_audit),
        )
        // Recommendation listing, generation, and completion
        .route(
            "/recommendations",
            get(super::recommendations::list_recommendations)
                .post(super::recommendations::generate_recommendations)
                .put(super::recommendations::update_recommendation),
        )
        // Action listing and creation
        .route(
            "/actions",
            get(super::actions::list_actions).post(super::actions::create_action),
        )
        // Attach application context
        .with_state(ctx)
        // Enable CORS for local access
        .layer(CorsLayer::permissive())
}
