//! Starred restaurants: an ordered, keyed in-memory collection joined against the catalog.

pub mod seed;
pub mod service;

pub use service::StarredRestaurantsService;
