use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::catalog::dtos::LanguageQuery;
use crate::features::venues::dtos::{
    RankedVenuesDto, TimetableScope, VenueDetailDto, VenueRankDto, VenueSummaryDto,
};
use crate::features::venues::services::VenueService;
use crate::shared::types::ApiResponse;

/// Get an approved venue by id
#[utoipa::path(
    get,
    path = "/api/venues/{id}",
    params(
        ("id" = Uuid, Path, description = "Venue public id"),
        LanguageQuery
    ),
    responses(
        (status = 200, description = "Venue details", body = ApiResponse<VenueDetailDto>),
        (status = 404, description = "Venue not found")
    ),
    tag = "venues"
)]
pub async fn get_venue(
    State(service): State<Arc<VenueService>>,
    Path(id): Path<Uuid>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<ApiResponse<VenueDetailDto>>> {
    let venue = service.get_detail(id, query.language()).await?;
    Ok(Json(ApiResponse::success(Some(venue), None, None)))
}

/// Get the category rank and place-wide rank of a venue
#[utoipa::path(
    get,
    path = "/api/venues/{id}/rank",
    params(
        ("id" = Uuid, Path, description = "Venue public id")
    ),
    responses(
        (status = 200, description = "Venue ranks, null when unranked", body = ApiResponse<VenueRankDto>),
        (status = 404, description = "Venue not found")
    ),
    tag = "venues"
)]
pub async fn get_venue_rank(
    State(service): State<Arc<VenueService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VenueRankDto>>> {
    let rank = service.get_rank(id).await?;
    Ok(Json(ApiResponse::success(Some(rank), None, None)))
}

/// List the most liked venues of a place and category
#[utoipa::path(
    post,
    path = "/api/venues/ranked",
    request_body = RankedVenuesDto,
    responses(
        (status = 200, description = "Top venues, most liked first", body = ApiResponse<Vec<VenueSummaryDto>>),
        (status = 400, description = "Validation error")
    ),
    tag = "venues"
)]
pub async fn list_ranked_venues(
    State(service): State<Arc<VenueService>>,
    AppJson(dto): AppJson<RankedVenuesDto>,
) -> Result<Json<ApiResponse<Vec<VenueSummaryDto>>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let venues = service
        .ranked_venues(dto.place_id.trim(), dto.category_id)
        .await?;
    let dtos = venues
        .iter()
        .map(|venue| VenueSummaryDto::from_scored(venue, TimetableScope::Week))
        .collect();

    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use super::*;
    use crate::features::catalog::store::MemoryCatalogStore;
    use crate::features::catalog::CatalogService;
    use crate::features::venues::models::Venue;
    use crate::features::venues::routes::venue_routes;
    use crate::features::venues::store::MemoryVenueStore;
    use crate::shared::test_helpers::VenueBuilder;

    fn server(venues: Vec<Venue>) -> TestServer {
        let catalog = Arc::new(CatalogService::new(Arc::new(MemoryCatalogStore::default())));
        let service = Arc::new(VenueService::new(
            Arc::new(MemoryVenueStore::new(venues)),
            catalog,
        ));
        TestServer::new(venue_routes(service)).unwrap()
    }

    fn pub_venue(id: i64, likes: i64) -> Venue {
        VenueBuilder::new(id)
            .place("milan")
            .category(3, "Pub")
            .likes(likes)
            .build()
    }

    #[tokio::test]
    async fn test_get_venue_detail() {
        let venue = pub_venue(1, 12);
        let server = server(vec![venue.clone()]);

        let response = server.get(&format!("/api/venues/{}", venue.uuid)).await;
        response.assert_status_ok();

        let value: Value = response.json();
        assert_eq!(value["data"]["name"], venue.name.as_str());
        assert_eq!(value["data"]["likes_count"], 12);
        assert_eq!(value["data"]["rank"], 1);
    }

    #[tokio::test]
    async fn test_get_unknown_venue_is_not_found() {
        let response = server(Vec::new())
            .get(&format!("/api/venues/{}", Uuid::now_v7()))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_venue_rank() {
        let venues = vec![pub_venue(1, 5), pub_venue(2, 9)];
        let target = venues[0].uuid;
        let server = server(venues);

        let value: Value = server
            .get(&format!("/api/venues/{}/rank", target))
            .await
            .json();
        assert_eq!(value["data"]["category_rank"], 2);
        assert_eq!(value["data"]["place_rank"], 2);
    }

    #[tokio::test]
    async fn test_list_ranked_venues() {
        let venues = (1..=12).map(|id| pub_venue(id, id)).collect();
        let server = server(venues);

        let response = server
            .post("/api/venues/ranked")
            .json(&json!({"place_id": "milan", "category_id": 3}))
            .await;
        response.assert_status_ok();

        let value: Value = response.json();
        let data = value["data"].as_array().unwrap();
        assert_eq!(data.len(), 10);
        assert_eq!(data[0]["likes_count"], 12);
        assert_eq!(data[9]["likes_count"], 3);
    }

    #[tokio::test]
    async fn test_list_ranked_venues_requires_place() {
        let response = server(Vec::new())
            .post("/api/venues/ranked")
            .json(&json!({"place_id": "", "category_id": 3}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
