use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::catalog::dtos::CatalogItemDto;
use crate::features::venues::engine::{DayKeys, ScoredVenue};
use crate::features::venues::models::{weekday_key, Coordinate, Location, Venue, WeeklyTimetable};

/// Timetable attached to a search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimetableView {
    /// Every weekday
    Week(WeeklyTimetable),
    /// Only the two weekday keys the client needs, e.g. `{"tue": [...], "wed": [...]}`
    Days(BTreeMap<String, Option<Vec<DateTime<Utc>>>>),
}

impl TimetableView {
    pub fn days(timetable: &WeeklyTimetable, keys: DayKeys) -> Self {
        let days = [keys.yesterday, keys.today]
            .into_iter()
            .map(|weekday| {
                let entry = timetable.day(weekday).map(|times| times.to_vec());
                (weekday_key(weekday).to_string(), entry)
            })
            .collect();
        TimetableView::Days(days)
    }
}

/// Which slice of the timetable a listing exposes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimetableScope {
    Hidden,
    Week,
    Days(DayKeys),
}

impl TimetableScope {
    fn view(self, timetable: Option<&WeeklyTimetable>) -> Option<TimetableView> {
        let timetable = timetable?;
        match self {
            TimetableScope::Hidden => None,
            TimetableScope::Week => Some(TimetableView::Week(timetable.clone())),
            TimetableScope::Days(keys) => Some(TimetableView::days(timetable, keys)),
        }
    }
}

/// Venue as listed in search results
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub cover_source: String,
    pub city: Option<String>,
    /// Meters from the caller; null when no coordinate was sent
    pub distance: Option<f64>,
    pub likes_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object, required = false)]
    pub timetable: Option<TimetableView>,
}

impl VenueSummaryDto {
    pub fn from_scored(scored: &ScoredVenue, scope: TimetableScope) -> Self {
        let venue = &scored.venue;
        Self {
            id: venue.uuid,
            name: venue.name.clone(),
            cover_source: venue.cover_source.clone(),
            city: venue.city().map(str::to_string),
            distance: scored.distance,
            likes_count: venue.likes_count,
            timetable: scope.view(venue.timetable.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub place_id: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub coordinate: Option<Coordinate>,
}

impl From<&Location> for LocationDto {
    fn from(location: &Location) -> Self {
        Self {
            place_id: location.place_id.clone(),
            city: location.city.clone(),
            address: location.address.clone(),
            coordinate: location.coordinate,
        }
    }
}

/// Full view of one venue
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueDetailDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub cover_source: String,
    pub price_target: Option<i32>,
    pub category: Option<CatalogItemDto>,
    pub categories: Vec<CatalogItemDto>,
    pub amenities: Vec<CatalogItemDto>,
    pub location: Option<LocationDto>,
    pub timetable: Option<WeeklyTimetable>,
    pub likes_count: i64,
    /// Position among the place's venues of the same category, top 10 only
    pub rank: Option<u32>,
}

impl VenueDetailDto {
    pub fn new(
        venue: Venue,
        category: Option<CatalogItemDto>,
        categories: Vec<CatalogItemDto>,
        amenities: Vec<CatalogItemDto>,
        rank: Option<u32>,
    ) -> Self {
        Self {
            id: venue.uuid,
            location: venue.location.as_ref().map(LocationDto::from),
            name: venue.name,
            description: venue.description,
            cover_source: venue.cover_source,
            price_target: venue.price_target,
            category,
            categories,
            amenities,
            timetable: venue.timetable,
            likes_count: venue.likes_count,
            rank,
        }
    }
}

/// Both rank flavors of one venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VenueRankDto {
    /// Among approved venues of the same place and category, top 10 only
    pub category_rank: Option<u32>,
    /// Among all approved venues of the same place
    pub place_rank: Option<u32>,
}
