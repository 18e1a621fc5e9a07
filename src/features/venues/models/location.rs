use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// WGS84 point, longitude first like the clients send it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// Where a venue is. `place_id` is the city-level identifier used by city search.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub place_id: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub coordinate: Option<Coordinate>,
}
