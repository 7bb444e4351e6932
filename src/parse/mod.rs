mod cities_page;
mod city_page;
mod error;
pub use error::Error;
mod static_selector;
mod text;

pub use cities_page::{cities, CityMeta};
pub use city_page::{restaurant_entries, Deal, DealFilter, DealKind, RestaurantEntry};
