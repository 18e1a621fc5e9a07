use chrono::{DateTime, TimeZone, Utc, Weekday};
use fake::{faker::company::en::CompanyName, Fake};
use uuid::Uuid;

use crate::features::venues::models::{CategoryRef, Coordinate, Location, Venue, WeeklyTimetable};

/// Stored timetable value for `hour:minute` on the sentinel date
pub fn stored_time(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Approved venue with a random name and nothing else attached.
/// Location and timetable are added through the builder methods.
pub struct VenueBuilder {
    venue: Venue,
}

impl VenueBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            venue: Venue {
                id,
                uuid: Uuid::now_v7(),
                name: CompanyName().fake(),
                description: None,
                cover_source: format!("covers/{}.jpg", id),
                is_approved: true,
                price_target: None,
                category: None,
                categories: Vec::new(),
                amenity_ids: Vec::new(),
                likes_count: 0,
                has_spots: false,
                location: None,
                timetable: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.venue.name = name.to_string();
        self
    }

    pub fn unapproved(mut self) -> Self {
        self.venue.is_approved = false;
        self
    }

    pub fn likes(mut self, likes: i64) -> Self {
        self.venue.likes_count = likes;
        self
    }

    pub fn price(mut self, tier: i32) -> Self {
        self.venue.price_target = Some(tier);
        self
    }

    pub fn category(mut self, id: i32, en: &str) -> Self {
        self.venue.category = Some(CategoryRef {
            id,
            en: en.to_string(),
        });
        self
    }

    pub fn secondary(mut self, id: i32, en: &str) -> Self {
        self.venue.categories.push(CategoryRef {
            id,
            en: en.to_string(),
        });
        self
    }

    pub fn amenities(mut self, ids: &[i32]) -> Self {
        self.venue.amenity_ids = ids.to_vec();
        self
    }

    pub fn spots(mut self) -> Self {
        self.venue.has_spots = true;
        self
    }

    /// Set the city; creates the location when missing
    pub fn place(mut self, place_id: &str) -> Self {
        let location = self.location_mut();
        location.place_id = place_id.to_string();
        location.city = Some(place_id.to_string());
        self
    }

    /// Set the coordinate; creates the location (in "milan") when missing
    pub fn at(mut self, longitude: f64, latitude: f64) -> Self {
        self.location_mut().coordinate = Some(Coordinate::new(longitude, latitude));
        self
    }

    /// Add opening hours for one weekday as `(hour, minute)` pairs
    pub fn open(mut self, weekday: Weekday, times: &[(u32, u32)]) -> Self {
        let entry = times.iter().map(|&(h, m)| stored_time(h, m)).collect();
        let timetable = self.venue.timetable.take().unwrap_or_default();
        self.venue.timetable = Some(timetable.with_day(weekday, entry));
        self
    }

    /// Attach an empty timetable row
    pub fn scheduled(mut self) -> Self {
        self.venue.timetable.get_or_insert_with(WeeklyTimetable::default);
        self
    }

    pub fn build(self) -> Venue {
        self.venue
    }

    fn location_mut(&mut self) -> &mut Location {
        self.venue.location.get_or_insert_with(|| Location {
            place_id: "milan".to_string(),
            city: Some("Milan".to_string()),
            address: None,
            coordinate: None,
        })
    }
}
