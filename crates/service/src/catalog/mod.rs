//! Restaurant catalog abstraction.
//!
//! The starred list never mutates the catalog; it only resolves ids to records.

pub mod memory;

use async_trait::async_trait;
use models::Restaurant;

/// Read-only lookup of catalog restaurants by id.
/// Implementations can be in-memory, file-backed, or a remote service.
#[async_trait]
pub trait RestaurantCatalog: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Option<Restaurant>;
}
