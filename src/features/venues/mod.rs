//! Venue geo-temporal search and ranking.
//!
//! Requests are validated into [`engine::SearchCriteria`], turned into a
//! [`engine::SearchPlan`] and run over the candidates the store returns for
//! the plan's geographic scope. Paging happens after the whole predicate
//! chain and the sort.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/venues/search` | Venues near a point or in a city, open at a given time |
//! | POST | `/api/venues/search/by-name` | Name search, nearest venues when the value is empty |
//! | POST | `/api/venues/spots` | Venues with at least one spot |
//! | POST | `/api/venues/ranked` | Top 10 venues of a place and category |
//! | GET | `/api/venues/{id}` | Venue detail with category rank |
//! | GET | `/api/venues/{id}/rank` | Category and place-wide rank |

pub mod dtos;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::{VenueSearchService, VenueService};
pub use store::{PgVenueStore, VenueStore};
