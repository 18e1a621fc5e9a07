use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::location::{Coordinate, Location};
use super::timetable::WeeklyTimetable;

/// Category reference carried by a venue (id + English label)
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRef {
    pub id: i32,
    pub en: String,
}

/// A venue as read by the search engine
#[derive(Debug, Clone)]
pub struct Venue {
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub cover_source: String,
    pub is_approved: bool,
    pub price_target: Option<i32>,
    pub category: Option<CategoryRef>,
    pub categories: Vec<CategoryRef>,
    pub amenity_ids: Vec<i32>,
    pub likes_count: i64,
    pub has_spots: bool,
    pub location: Option<Location>,
    pub timetable: Option<WeeklyTimetable>,
}

impl Venue {
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.location.as_ref().and_then(|l| l.coordinate)
    }

    pub fn place_id(&self) -> Option<&str> {
        self.location.as_ref().map(|l| l.place_id.as_str())
    }

    pub fn city(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.city.as_deref())
    }
}

/// Database row for a venue joined with its location, timetable and counters
#[derive(Debug, Clone, FromRow)]
pub struct VenueRow {
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub cover_source: String,
    pub is_approved: bool,
    pub price_target: Option<i32>,
    pub category_id: Option<i32>,
    pub category_en: Option<String>,
    pub has_location: bool,
    pub place_id: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub has_timetable: bool,
    pub mon: Option<Vec<DateTime<Utc>>>,
    pub tue: Option<Vec<DateTime<Utc>>>,
    pub wed: Option<Vec<DateTime<Utc>>>,
    pub thu: Option<Vec<DateTime<Utc>>>,
    pub fri: Option<Vec<DateTime<Utc>>>,
    pub sat: Option<Vec<DateTime<Utc>>>,
    pub sun: Option<Vec<DateTime<Utc>>>,
    pub likes_count: i64,
    pub category_ids: Vec<i32>,
    pub category_names: Vec<String>,
    pub amenity_ids: Vec<i32>,
    pub has_spots: bool,
}

impl From<VenueRow> for Venue {
    fn from(row: VenueRow) -> Self {
        let coordinate = match (row.longitude, row.latitude) {
            (Some(longitude), Some(latitude)) => Some(Coordinate::new(longitude, latitude)),
            _ => None,
        };

        let location = row.has_location.then(|| Location {
            place_id: row.place_id.unwrap_or_default(),
            city: row.city,
            address: row.address,
            coordinate,
        });

        let timetable = row.has_timetable.then(|| WeeklyTimetable {
            mon: row.mon,
            tue: row.tue,
            wed: row.wed,
            thu: row.thu,
            fri: row.fri,
            sat: row.sat,
            sun: row.sun,
        });

        let category = row.category_id.map(|id| CategoryRef {
            id,
            en: row.category_en.unwrap_or_default(),
        });

        let categories = row
            .category_ids
            .into_iter()
            .zip(row.category_names)
            .map(|(id, en)| CategoryRef { id, en })
            .collect();

        Self {
            id: row.id,
            uuid: row.uuid,
            name: row.name,
            description: row.description,
            cover_source: row.cover_source,
            is_approved: row.is_approved,
            price_target: row.price_target,
            category,
            categories,
            amenity_ids: row.amenity_ids,
            likes_count: row.likes_count,
            has_spots: row.has_spots,
            location,
            timetable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> VenueRow {
        VenueRow {
            id: 7,
            uuid: Uuid::nil(),
            name: "Bar Basso".to_string(),
            description: None,
            cover_source: "covers/7.png".to_string(),
            is_approved: true,
            price_target: Some(2),
            category_id: Some(3),
            category_en: Some("Cocktail Bar".to_string()),
            has_location: true,
            place_id: Some("milan".to_string()),
            city: Some("Milano".to_string()),
            address: None,
            latitude: Some(45.4781),
            longitude: Some(9.2196),
            has_timetable: false,
            mon: None,
            tue: None,
            wed: None,
            thu: None,
            fri: None,
            sat: None,
            sun: None,
            likes_count: 12,
            category_ids: vec![3, 5],
            category_names: vec!["Cocktail Bar".to_string(), "Lounge".to_string()],
            amenity_ids: vec![1],
            has_spots: false,
        }
    }

    #[test]
    fn test_venue_from_row_hydrates_location_and_categories() {
        let venue = Venue::from(row());

        assert_eq!(venue.place_id(), Some("milan"));
        assert_eq!(venue.city(), Some("Milano"));
        assert_eq!(venue.coordinate(), Some(Coordinate::new(9.2196, 45.4781)));
        assert_eq!(venue.category.as_ref().map(|c| c.id), Some(3));
        assert_eq!(venue.categories.len(), 2);
        assert_eq!(venue.categories[1].en, "Lounge");
        assert!(venue.timetable.is_none());
    }

    #[test]
    fn test_venue_from_row_without_location() {
        let mut row = row();
        row.has_location = false;
        row.place_id = None;
        row.latitude = None;
        row.longitude = None;

        let venue = Venue::from(row);
        assert!(venue.location.is_none());
        assert!(venue.coordinate().is_none());
    }

    #[test]
    fn test_venue_from_row_location_without_point() {
        let mut row = row();
        row.latitude = None;

        let venue = Venue::from(row);
        assert!(venue.location.is_some());
        assert!(venue.coordinate().is_none());
    }
}
