use chrono::{NaiveDateTime, NaiveTime};

use super::geo::{haversine_distance, BoundingBox};
use super::schedule::{is_open_at, is_open_tonight};
use crate::features::venues::models::{Coordinate, Venue};

const TO_EAT: &[&str] = &[
    "Japanese",
    "Indian",
    "Chinese",
    "Salads",
    "Fast Food",
    "Vegan",
    "Meat",
    "Street Food",
    "Take Away",
    "Restaurant",
    "Bakery",
    "Sushi",
    "Pizza",
    "Italian",
    "Ice Cream",
    "Hawaiian",
    "Sandwiches",
    "Bistro",
    "Fish",
    "Kebab",
    "Crepes",
    "Tapas",
];

const APERITIF: &[&str] = &[
    "Aperitif",
    "Bar",
    "Pub",
    "Cocktail Bar",
    "Wine Bar",
    "Shisha Bar",
    "Rooftop Bar",
    "Lounge",
];

const CAFE: &[&str] = &[
    "Café",
    "Bakery",
    "Bistro",
    "Aperitif",
    "Bar",
    "Lounge",
    "Rooftop Bar",
];

const TONIGHT: &[&str] = &[
    "Cocktail Bar",
    "Pub",
    "Bar",
    "Shisha Bar",
    "Rooftop Bar",
    "Night Club",
    "Wine Bar",
];

/// Search preset picked by the client, sent as an index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceType {
    Populars,
    ToEat,
    Aperitif,
    Cafe,
    Tonight,
}

impl ExperienceType {
    /// Unknown indexes mean "no preset"
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(ExperienceType::Populars),
            1 => Some(ExperienceType::ToEat),
            2 => Some(ExperienceType::Aperitif),
            3 => Some(ExperienceType::Cafe),
            4 => Some(ExperienceType::Tonight),
            _ => None,
        }
    }

    /// English category labels the preset restricts to; empty for `Populars`
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            ExperienceType::Populars => &[],
            ExperienceType::ToEat => TO_EAT,
            ExperienceType::Aperitif => APERITIF,
            ExperienceType::Cafe => CAFE,
            ExperienceType::Tonight => TONIGHT,
        }
    }

    pub fn ranks_by_popularity(self) -> bool {
        matches!(self, ExperienceType::Populars | ExperienceType::Tonight)
    }
}

/// One condition a venue must satisfy to stay in a result set
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Approved,
    Located,
    Scheduled,
    HasSpots,
    CityMatch(String),
    WithinRadius {
        origin: Coordinate,
        meters: f64,
    },
    /// Primary category or any secondary category in `category_ids`,
    /// or any amenity in `amenity_ids`
    CategoryOrAmenity {
        category_ids: Vec<i32>,
        amenity_ids: Vec<i32>,
    },
    /// Primary or any secondary category carries one of these English labels
    CategoryNamed(&'static [&'static str]),
    PriceTier(i32),
    OpenAt {
        instant: NaiveDateTime,
        cutoff: NaiveTime,
    },
    OpenTonight {
        instant: NaiveDateTime,
        cutoff: NaiveTime,
        threshold: NaiveTime,
    },
}

impl Predicate {
    pub fn matches(&self, venue: &Venue) -> bool {
        match self {
            Predicate::Approved => venue.is_approved,
            Predicate::Located => venue.location.is_some(),
            Predicate::Scheduled => venue.timetable.is_some(),
            Predicate::HasSpots => venue.has_spots,
            Predicate::CityMatch(place_id) => venue.place_id() == Some(place_id.as_str()),
            Predicate::WithinRadius { origin, meters } => venue.coordinate().is_some_and(|point| {
                BoundingBox::around(*origin, *meters).contains(point)
                    && haversine_distance(*origin, point) <= *meters
            }),
            Predicate::CategoryOrAmenity {
                category_ids,
                amenity_ids,
            } => {
                venue
                    .category
                    .as_ref()
                    .is_some_and(|c| category_ids.contains(&c.id))
                    || venue
                        .categories
                        .iter()
                        .any(|c| category_ids.contains(&c.id))
                    || venue.amenity_ids.iter().any(|a| amenity_ids.contains(a))
            }
            Predicate::CategoryNamed(labels) => {
                venue
                    .category
                    .as_ref()
                    .is_some_and(|c| labels.contains(&c.en.as_str()))
                    || venue
                        .categories
                        .iter()
                        .any(|c| labels.contains(&c.en.as_str()))
            }
            Predicate::PriceTier(tier) => venue.price_target == Some(*tier),
            Predicate::OpenAt { instant, cutoff } => venue
                .timetable
                .as_ref()
                .is_some_and(|t| is_open_at(t, *instant, *cutoff)),
            Predicate::OpenTonight {
                instant,
                cutoff,
                threshold,
            } => venue
                .timetable
                .as_ref()
                .is_some_and(|t| is_open_tonight(t, *instant, *cutoff, *threshold)),
        }
    }
}

/// Predicates combined left to right with AND
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterChain {
    predicates: Vec<Predicate>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        self.predicates.iter().all(|p| p.matches(venue))
    }

    /// The exact, store-checkable part of the chain
    pub fn candidate_filter(&self) -> CandidateFilter {
        let mut filter = CandidateFilter::default();

        for predicate in &self.predicates {
            match predicate {
                Predicate::Scheduled => filter.scheduled = true,
                Predicate::HasSpots => filter.has_spots = true,
                Predicate::PriceTier(tier) => filter.price_target = Some(*tier),
                Predicate::CategoryOrAmenity {
                    category_ids,
                    amenity_ids,
                } => {
                    filter.category_ids = category_ids.clone();
                    filter.amenity_ids = amenity_ids.clone();
                }
                Predicate::CategoryNamed(labels) => {
                    filter.category_labels = labels.iter().map(|l| l.to_string()).collect();
                }
                _ => {}
            }
        }

        filter
    }
}

/// Narrowing a store applies before the engine re-checks the whole chain.
///
/// Empty id and label lists mean "no restriction". Category and amenity ids
/// match on any axis, like [`Predicate::CategoryOrAmenity`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateFilter {
    pub scheduled: bool,
    pub has_spots: bool,
    pub price_target: Option<i32>,
    pub category_ids: Vec<i32>,
    pub amenity_ids: Vec<i32>,
    pub category_labels: Vec<String>,
}
