use utoipa::{Modify, OpenApi};

use crate::features::catalog::{dtos as catalog_dtos, handlers as catalog_handlers};
use crate::features::venues::models::{Coordinate, WeeklyTimetable};
use crate::features::venues::{dtos as venues_dtos, handlers as venues_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Venues
        venues_handlers::search_venues,
        venues_handlers::search_by_name,
        venues_handlers::search_spots,
        venues_handlers::list_ranked_venues,
        venues_handlers::get_venue,
        venues_handlers::get_venue_rank,
        // Catalog
        catalog_handlers::list_categories,
        catalog_handlers::list_amenities,
    ),
    components(
        schemas(
            ApiResponse<Vec<venues_dtos::VenueSummaryDto>>,
            ApiResponse<venues_dtos::VenueDetailDto>,
            ApiResponse<venues_dtos::VenueRankDto>,
            ApiResponse<Vec<catalog_dtos::CatalogItemDto>>,
            Meta,
            Coordinate,
            WeeklyTimetable,
            venues_dtos::CoordinateDto,
            venues_dtos::SearchVenuesDto,
            venues_dtos::NameSearchDto,
            venues_dtos::SpotSearchDto,
            venues_dtos::RankedVenuesDto,
            venues_dtos::VenueSummaryDto,
            venues_dtos::VenueDetailDto,
            venues_dtos::VenueRankDto,
            venues_dtos::LocationDto,
            catalog_dtos::CatalogItemDto,
        )
    ),
    tags(
        (name = "venues", description = "Geo-temporal venue search and ranking"),
        (name = "catalog", description = "Venue categories and amenities"),
    ),
    info(
        title = "Venue Finder API",
        version = "0.1.0",
        description = "API documentation for Venue Finder",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
