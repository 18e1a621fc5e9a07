pub mod catalog;
pub mod venues;
