//! Service layer for the starred restaurants resource.
//! - `catalog`: read-only restaurant lookup the starred list joins against.
//! - `starred`: the in-memory starred collection and its five operations.
//! - Errors are reported through `ServiceError` and mapped to HTTP by the server crate.

pub mod errors;
pub mod catalog;
pub mod starred;

pub use catalog::{memory::InMemoryCatalog, RestaurantCatalog};
pub use errors::ServiceError;
pub use starred::service::StarredRestaurantsService;
