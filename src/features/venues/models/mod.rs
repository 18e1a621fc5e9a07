mod location;
mod timetable;
mod venue;

pub use location::{Coordinate, Location};
pub use timetable::{weekday_key, WeeklyTimetable};
pub use venue::{CategoryRef, Venue, VenueRow};
