use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::venues::handlers;
use crate::features::venues::services::{VenueSearchService, VenueService};

/// Search and listing routes
pub fn search_routes(service: Arc<VenueSearchService>) -> Router {
    Router::new()
        .route("/api/venues/search", post(handlers::search_venues))
        .route("/api/venues/search/by-name", post(handlers::search_by_name))
        .route("/api/venues/spots", post(handlers::search_spots))
        .with_state(service)
}

/// Single-venue and ranking routes
pub fn venue_routes(service: Arc<VenueService>) -> Router {
    Router::new()
        .route("/api/venues/ranked", post(handlers::list_ranked_venues))
        .route("/api/venues/{id}", get(handlers::get_venue))
        .route("/api/venues/{id}/rank", get(handlers::get_venue_rank))
        .with_state(service)
}

/// Create routes for the venues feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(search_service: Arc<VenueSearchService>, venue_service: Arc<VenueService>) -> Router {
    search_routes(search_service).merge(venue_routes(venue_service))
}
