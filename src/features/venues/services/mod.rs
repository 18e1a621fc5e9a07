mod venue_search_service;
mod venue_service;

pub use venue_search_service::VenueSearchService;
pub use venue_service::VenueService;
