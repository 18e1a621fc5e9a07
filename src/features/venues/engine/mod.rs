//! Pure venue search engine: predicates, schedule resolution, ordering and
//! paging. Nothing in here touches the store or can fail.

pub mod filters;
pub mod geo;
pub mod plan;
pub mod rank;
pub mod ranking;
pub mod schedule;

pub use filters::{CandidateFilter, ExperienceType};
pub use geo::GeoScope;
pub use plan::{SearchCriteria, SearchPlan};
pub use rank::rank_position;
pub use ranking::{page, ScoredVenue, SortOrder};
pub use schedule::{resolve_day_keys, DayKeys};
