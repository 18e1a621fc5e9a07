mod pg_store;

#[cfg(test)]
mod memory_store;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::venues::engine::{CandidateFilter, GeoScope};
use crate::features::venues::models::Venue;

pub use pg_store::PgVenueStore;

#[cfg(test)]
pub use memory_store::MemoryVenueStore;

/// Read access to venues. Implementations only narrow the candidate set;
/// the engine re-applies every predicate on what comes back.
#[async_trait]
pub trait VenueStore: Send + Sync {
    /// Approved, located venues inside `scope` that pass `filter` (radius
    /// scopes may return a superset: everything inside the bounding box)
    async fn fetch_candidates(
        &self,
        scope: &GeoScope,
        filter: &CandidateFilter,
    ) -> Result<Vec<Venue>>;

    /// Approved venues whose name contains `value` case-insensitively, by id
    async fn search_by_name(&self, value: &str, offset: i64, limit: i64) -> Result<Vec<Venue>>;

    /// Any venue by public id, approved or not
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Venue>>;

    /// Approved venues of a place, optionally restricted to one primary category
    async fn fetch_place_peers(&self, place_id: &str, category_id: Option<i32>)
        -> Result<Vec<Venue>>;
}
