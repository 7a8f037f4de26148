//! API Routes
//!
//! Configures the Axum router with all atlas endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, city_details_handler, cleanup_cache_handler, clear_cache_handler,
    dataset_health_handler, dataset_integrity_handler, dataset_stats_handler, get_config_handler,
    health_handler, list_cities_handler, list_regions_handler, random_cities_handler,
    random_regions_handler, region_by_name_handler, region_cities_handler,
    region_city_count_handler, reset_config_handler, search_cities_handler,
    search_regions_handler, unassigned_cities_handler, update_config_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (the API is read-only apart from cache and settings)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/regions", get(list_regions_handler))
        .route("/regions/search", get(search_regions_handler))
        .route("/regions/random", get(random_regions_handler))
        .route("/regions/by-name/:name", get(region_by_name_handler))
        .route("/regions/:region_id/cities", get(region_cities_handler))
        .route(
            "/regions/:region_id/cities/count",
            get(region_city_count_handler),
        )
        .route("/cities", get(list_cities_handler))
        .route("/cities/search", get(search_cities_handler))
        .route("/cities/random", get(random_cities_handler))
        .route("/cities/unassigned", get(unassigned_cities_handler))
        .route("/cities/details/:name", get(city_details_handler))
        .route("/dataset/stats", get(dataset_stats_handler))
        .route("/dataset/integrity", get(dataset_integrity_handler))
        .route("/dataset/health", get(dataset_health_handler))
        .route("/cache", delete(clear_cache_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/cache/cleanup", post(cleanup_cache_handler))
        .route(
            "/config",
            get(get_config_handler)
                .patch(update_config_handler)
                .delete(reset_config_handler),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
