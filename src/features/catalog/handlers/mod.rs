mod catalog_handler;

pub use catalog_handler::*;
