use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::venues::engine::{ExperienceType, SearchCriteria};
use crate::features::venues::models::Coordinate;

/// Caller position
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, ToSchema)]
pub struct CoordinateDto {
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: f64,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
}

impl From<CoordinateDto> for Coordinate {
    fn from(dto: CoordinateDto) -> Self {
        Coordinate::new(dto.longitude, dto.latitude)
    }
}

/// Request DTO for the geo-temporal venue search
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SearchVenuesDto {
    /// Required unless `place_id` is given
    #[validate(nested)]
    pub coordinate: Option<CoordinateDto>,

    /// City-level place identifier; switches to city search
    pub place_id: Option<String>,

    /// Local time of the search; required unless `closed_too`
    pub search_instant: Option<DateTime<FixedOffset>>,

    /// 0 populars, 1 to_eat, 2 aperitif, 3 café, 4 tonight; anything else means no preset
    pub experience_type: Option<i64>,

    #[serde(default)]
    pub category_ids: Vec<i32>,

    #[serde(default)]
    pub amenity_ids: Vec<i32>,

    #[validate(range(min = 1, max = 4, message = "Price target must be between 1 and 4"))]
    pub price_target: Option<i32>,

    /// Include venues that are closed at `search_instant`
    #[serde(default)]
    pub closed_too: bool,

    #[serde(default)]
    #[validate(range(min = 0, message = "Offset must not be negative"))]
    pub offset: i64,
}

impl SearchVenuesDto {
    /// Field rules that span more than one field
    pub fn check_required_fields(&self) -> Result<()> {
        if self.place_id().is_none() && self.coordinate.is_none() {
            return Err(AppError::Validation(
                "Coordinate is required when no place_id is given".to_string(),
            ));
        }

        if !self.closed_too && self.search_instant.is_none() {
            return Err(AppError::Validation(
                "search_instant is required unless closed_too is set".to_string(),
            ));
        }

        Ok(())
    }

    /// Blank place identifiers count as absent
    pub fn place_id(&self) -> Option<&str> {
        self.place_id
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            origin: self.coordinate.map(Coordinate::from),
            place_id: self.place_id().map(str::to_string),
            instant: self.search_instant.map(|instant| instant.naive_local()),
            experience: self.experience_type.and_then(ExperienceType::from_index),
            category_ids: self.category_ids.clone(),
            amenity_ids: self.amenity_ids.clone(),
            price_target: self.price_target,
            closed_too: self.closed_too,
        }
    }
}

/// Request DTO for the name search
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NameSearchDto {
    /// Substring of the venue name; empty lists the nearest venues
    #[serde(default)]
    #[validate(length(max = 128, message = "Search value must not exceed 128 characters"))]
    pub value: String,

    #[validate(nested)]
    pub coordinate: Option<CoordinateDto>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Offset must not be negative"))]
    pub offset: i64,
}

impl NameSearchDto {
    pub fn check_required_fields(&self) -> Result<()> {
        if self.value.trim().is_empty() && self.coordinate.is_none() {
            return Err(AppError::Validation(
                "Coordinate is required when the search value is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Request DTO for venues with spots
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SpotSearchDto {
    #[validate(nested)]
    pub coordinate: CoordinateDto,

    pub place_id: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Offset must not be negative"))]
    pub offset: i64,
}

impl SpotSearchDto {
    pub fn place_id(&self) -> Option<&str> {
        self.place_id
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// Request DTO for the top venues of a place and category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RankedVenuesDto {
    #[validate(length(min = 1, message = "Place id is required"))]
    pub place_id: String,

    pub category_id: i32,
}
