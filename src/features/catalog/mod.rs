//! Static reference lists: venue categories and amenities.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/catalog/categories` | Venue categories with localized titles |
//! | GET | `/api/catalog/amenities` | Amenities with localized titles |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::CatalogService;
pub use store::{CatalogStore, PgCatalogStore};
