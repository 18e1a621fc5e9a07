use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::catalog::dtos::{CatalogItemDto, LanguageQuery};
use crate::features::catalog::services::CatalogService;
use crate::shared::types::ApiResponse;

/// List venue categories
#[utoipa::path(
    get,
    path = "/api/catalog/categories",
    params(LanguageQuery),
    responses(
        (status = 200, description = "List of venue categories", body = ApiResponse<Vec<CatalogItemDto>>),
    ),
    tag = "catalog"
)]
pub async fn list_categories(
    State(service): State<Arc<CatalogService>>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<ApiResponse<Vec<CatalogItemDto>>>> {
    let items = service.list_categories(query.language()).await?;
    Ok(Json(ApiResponse::success(Some(items), None, None)))
}

/// List amenities
#[utoipa::path(
    get,
    path = "/api/catalog/amenities",
    params(LanguageQuery),
    responses(
        (status = 200, description = "List of amenities", body = ApiResponse<Vec<CatalogItemDto>>),
    ),
    tag = "catalog"
)]
pub async fn list_amenities(
    State(service): State<Arc<CatalogService>>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<ApiResponse<Vec<CatalogItemDto>>>> {
    let items = service.list_amenities(query.language()).await?;
    Ok(Json(ApiResponse::success(Some(items), None, None)))
}
