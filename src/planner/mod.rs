//! Pure pricing core: budget estimation and itinerary generation

pub mod budget;
pub mod itinerary;
pub mod rates;

pub use budget::estimate_budget;
pub use itinerary::{generate_itinerary, inclusive_day_count, MAX_ITINERARY_DAYS};
pub use rates::RateTable;
