use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::venues::dtos::{
    NameSearchDto, SearchVenuesDto, SpotSearchDto, TimetableScope, VenueSummaryDto,
};
use crate::features::venues::engine::{resolve_day_keys, ScoredVenue};
use crate::features::venues::models::Coordinate;
use crate::features::venues::services::VenueSearchService;
use crate::shared::constants::{BUSINESS_LIST, BUSINESS_SPOT_LIMIT, SEARCH_BUSINESS_LIMIT};
use crate::shared::types::{ApiResponse, Meta};

fn summaries(venues: &[ScoredVenue], scope: TimetableScope) -> Vec<VenueSummaryDto> {
    venues
        .iter()
        .map(|venue| VenueSummaryDto::from_scored(venue, scope))
        .collect()
}

/// Search venues around a point or in a city, optionally open at a given time
///
/// Results carry the full week timetable with `closed_too`, otherwise only
/// the calendar yesterday and today of `search_instant`.
#[utoipa::path(
    post,
    path = "/api/venues/search",
    request_body = SearchVenuesDto,
    responses(
        (status = 200, description = "One page of matching venues", body = ApiResponse<Vec<VenueSummaryDto>>),
        (status = 400, description = "Validation error")
    ),
    tag = "venues"
)]
pub async fn search_venues(
    State(service): State<Arc<VenueSearchService>>,
    AppJson(dto): AppJson<SearchVenuesDto>,
) -> Result<Json<ApiResponse<Vec<VenueSummaryDto>>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    dto.check_required_fields()?;

    let criteria = dto.criteria();
    let venues = service.search(&criteria, dto.offset).await?;

    let scope = match (criteria.closed_too, criteria.instant) {
        (false, Some(instant)) => TimetableScope::Days(resolve_day_keys(instant, None)),
        _ => TimetableScope::Week,
    };

    let meta = Meta::for_page(dto.offset, BUSINESS_LIST, venues.len());
    Ok(Json(ApiResponse::success(
        Some(summaries(&venues, scope)),
        None,
        Some(meta),
    )))
}

/// Search venues by name, or list the nearest ones when the value is empty
#[utoipa::path(
    post,
    path = "/api/venues/search/by-name",
    request_body = NameSearchDto,
    responses(
        (status = 200, description = "One page of venues", body = ApiResponse<Vec<VenueSummaryDto>>),
        (status = 400, description = "Validation error")
    ),
    tag = "venues"
)]
pub async fn search_by_name(
    State(service): State<Arc<VenueSearchService>>,
    AppJson(dto): AppJson<NameSearchDto>,
) -> Result<Json<ApiResponse<Vec<VenueSummaryDto>>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    dto.check_required_fields()?;

    let origin = dto.coordinate.map(Coordinate::from);
    let venues = service
        .search_by_name(&dto.value, origin, dto.offset)
        .await?;

    let meta = Meta::for_page(dto.offset, SEARCH_BUSINESS_LIMIT, venues.len());
    Ok(Json(ApiResponse::success(
        Some(summaries(&venues, TimetableScope::Hidden)),
        None,
        Some(meta),
    )))
}

/// List venues that have at least one spot
#[utoipa::path(
    post,
    path = "/api/venues/spots",
    request_body = SpotSearchDto,
    responses(
        (status = 200, description = "One page of venues with spots", body = ApiResponse<Vec<VenueSummaryDto>>),
        (status = 400, description = "Validation error")
    ),
    tag = "venues"
)]
pub async fn search_spots(
    State(service): State<Arc<VenueSearchService>>,
    AppJson(dto): AppJson<SpotSearchDto>,
) -> Result<Json<ApiResponse<Vec<VenueSummaryDto>>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let venues = service
        .search_spots(dto.coordinate.into(), dto.place_id(), dto.offset)
        .await?;

    let meta = Meta::for_page(dto.offset, BUSINESS_SPOT_LIMIT, venues.len());
    Ok(Json(ApiResponse::success(
        Some(summaries(&venues, TimetableScope::Hidden)),
        None,
        Some(meta),
    )))
}
