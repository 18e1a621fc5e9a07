mod search_handler;
mod venue_handler;

pub use search_handler::*;
pub use venue_handler::*;
