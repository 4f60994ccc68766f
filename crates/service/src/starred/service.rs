use std::sync::Arc;

use indexmap::IndexMap;
use models::{StarredEntry, StarredView};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use common::metrics::record_operation;

use super::seed;
use crate::catalog::RestaurantCatalog;
use crate::errors::ServiceError;

/// Owns the starred collection and joins it against the restaurant catalog.
///
/// Entries are keyed by id and kept in insertion order, so `list` reflects the
/// order entries were starred in while lookups stay keyed.
pub struct StarredRestaurantsService {
    entries: RwLock<IndexMap<Uuid, StarredEntry>>,
    catalog: Arc<dyn RestaurantCatalog>,
}

impl StarredRestaurantsService {
    /// Empty collection.
    pub fn new(catalog: Arc<dyn RestaurantCatalog>) -> Self {
        Self { entries: RwLock::new(IndexMap::new()), catalog }
    }

    /// Start from existing entries. Entries whose restaurant is unknown to the
    /// catalog are dropped with a warning.
    pub async fn with_entries(catalog: Arc<dyn RestaurantCatalog>, entries: Vec<StarredEntry>) -> Self {
        let mut map = IndexMap::with_capacity(entries.len());
        for entry in entries {
            if catalog.find_by_id(&entry.restaurant_id).await.is_none() {
                warn!(id = %entry.id, restaurant_id = %entry.restaurant_id, "skipping starred entry with unknown restaurant");
                continue;
            }
            map.insert(entry.id, entry);
        }
        Self { entries: RwLock::new(map), catalog }
    }

    /// Start from the default starred entries.
    pub async fn seeded(catalog: Arc<dyn RestaurantCatalog>) -> Self {
        Self::with_entries(catalog, seed::default_entries()).await
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// All entries in insertion order, joined with restaurant names.
    ///
    /// A dangling `restaurantId` fails the whole listing with `Inconsistent`.
    pub async fn list(&self) -> Result<Vec<StarredView>, ServiceError> {
        let snapshot: Vec<StarredEntry> = self.entries.read().await.values().cloned().collect();
        let mut views = Vec::with_capacity(snapshot.len());
        for entry in &snapshot {
            match self.catalog.find_by_id(&entry.restaurant_id).await {
                Some(restaurant) => views.push(entry.view(&restaurant)),
                None => {
                    error!(id = %entry.id, restaurant_id = %entry.restaurant_id, "starred entry references unknown restaurant");
                    let err = ServiceError::Inconsistent(format!(
                        "starred entry {} references unknown restaurant {}",
                        entry.id, entry.restaurant_id
                    ));
                    record_operation("list", err.kind());
                    return Err(err);
                }
            }
        }
        debug!(count = views.len(), "listed starred restaurants");
        record_operation("list", "ok");
        Ok(views)
    }

    /// The raw entry (not joined) with exactly this id.
    pub async fn get_by_id(&self, id: &str) -> Result<StarredEntry, ServiceError> {
        let found = match parse_id(id) {
            Some(key) => self.entries.read().await.get(&key).cloned(),
            None => None,
        };
        let result = found.ok_or_else(|| ServiceError::not_found("starred restaurant"));
        observe("get", &result);
        result
    }

    /// Star a catalog restaurant. The new entry has no comment and goes to the end of the list.
    #[instrument(skip(self))]
    pub async fn create(&self, restaurant_id: &str) -> Result<StarredView, ServiceError> {
        let Some(restaurant) = self.catalog.find_by_id(restaurant_id).await else {
            let err = ServiceError::not_found("restaurant");
            record_operation("create", err.kind());
            return Err(err);
        };

        let mut map = self.entries.write().await;
        let mut id = Uuid::new_v4();
        while map.contains_key(&id) {
            id = Uuid::new_v4();
        }
        let entry = StarredEntry { id, restaurant_id: restaurant.id.clone(), comment: None };
        let view = entry.view(&restaurant);
        map.insert(id, entry);
        drop(map);

        info!(%id, restaurant_id = %restaurant.id, "starred restaurant created");
        record_operation("create", "ok");
        Ok(view)
    }

    /// Unstar. An id that isn't currently starred is a `BadRequest`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let removed = match parse_id(id) {
            Some(key) => self.entries.write().await.shift_remove(&key).is_some(),
            None => false,
        };
        let result = if removed {
            info!(%id, "starred restaurant removed");
            Ok(())
        } else {
            Err(ServiceError::BadRequest(format!("restaurant {id} is not starred")))
        };
        observe("delete", &result);
        result
    }

    /// Replace the comment of the entry with this id; `None` clears it.
    #[instrument(skip(self, new_comment))]
    pub async fn update_comment(&self, id: &str, new_comment: Option<String>) -> Result<(), ServiceError> {
        let updated = match parse_id(id) {
            Some(key) => {
                let mut map = self.entries.write().await;
                match map.get_mut(&key) {
                    Some(entry) => {
                        entry.comment = new_comment;
                        true
                    }
                    None => false,
                }
            }
            None => false,
        };
        let result = if updated {
            info!(%id, "starred restaurant comment updated");
            Ok(())
        } else {
            Err(ServiceError::not_found("starred restaurant"))
        };
        observe("update_comment", &result);
        result
    }
}

/// Ids are opaque to callers and match exactly: only the lowercase hyphenated
/// form an entry was issued with finds it. Other spellings match nothing.
fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id)
        .ok()
        .filter(|key| key.hyphenated().to_string() == id)
}

fn observe<T>(operation: &str, result: &Result<T, ServiceError>) {
    match result {
        Ok(_) => record_operation(operation, "ok"),
        Err(e) => {
            debug!(operation, error = %e, "starred operation rejected");
            record_operation(operation, e.kind());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::InMemoryCatalog;
    use models::Restaurant;

    fn catalog() -> Arc<dyn RestaurantCatalog> {
        Arc::new(InMemoryCatalog::from_restaurants(vec![
            Restaurant::new("R1", "Pho House"),
            Restaurant::new("R2", "Casa Verde"),
        ]))
    }

    #[tokio::test]
    async fn create_then_get_returns_uncommented_entry() -> Result<(), anyhow::Error> {
        let svc = StarredRestaurantsService::new(catalog());
        let view = svc.create("R1").await?;
        assert_eq!(view.name, "Pho House");
        assert!(view.comment.is_none());

        let entry = svc.get_by_id(&view.id.to_string()).await?;
        assert_eq!(entry.id, view.id);
        assert_eq!(entry.restaurant_id, "R1");
        assert!(entry.comment.is_none());

        let listed = svc.list().await?;
        assert_eq!(listed, vec![StarredView { id: view.id, comment: None, name: "Pho House".into() }]);
        Ok(())
    }

    #[tokio::test]
    async fn create_unknown_restaurant_is_not_found_and_leaves_collection() -> Result<(), anyhow::Error> {
        let svc = StarredRestaurantsService::new(catalog());
        svc.create("R1").await?;
        assert!(matches!(svc.create("nope").await, Err(ServiceError::NotFound(_))));
        assert_eq!(svc.len().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn repeated_creates_get_distinct_ids() -> Result<(), anyhow::Error> {
        let svc = StarredRestaurantsService::new(catalog());
        let a = svc.create("R1").await?;
        let b = svc.create("R1").await?;
        assert_ne!(a.id, b.id);
        assert_eq!(svc.len().await, 2);
        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_or_malformed_id_is_not_found() {
        let svc = StarredRestaurantsService::seeded(catalog()).await;
        assert!(matches!(svc.get_by_id(&Uuid::new_v4().to_string()).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.get_by_id("not-a-uuid").await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn alternate_id_spellings_match_nothing() {
        let svc = StarredRestaurantsService::seeded(Arc::new(InMemoryCatalog::builtin())).await;
        let spellings = [
            "A7272CD9-26FB-44B5-8D53-9781F55175A1",
            "a7272cd926fb44b58d539781f55175a1",
            "{a7272cd9-26fb-44b5-8d53-9781f55175a1}",
            "urn:uuid:a7272cd9-26fb-44b5-8d53-9781f55175a1",
        ];
        for id in spellings {
            assert!(matches!(svc.get_by_id(id).await, Err(ServiceError::NotFound(_))), "get {id}");
            assert!(
                matches!(svc.update_comment(id, Some("x".into())).await, Err(ServiceError::NotFound(_))),
                "update {id}"
            );
            assert!(matches!(svc.delete(id).await, Err(ServiceError::BadRequest(_))), "delete {id}");
        }
        assert_eq!(svc.len().await, 2);
        let entry = svc.get_by_id("a7272cd9-26fb-44b5-8d53-9781f55175a1").await.expect("canonical id");
        assert_eq!(entry.comment.as_deref(), Some("Best pho in NYC"));
    }

    #[tokio::test]
    async fn delete_removes_once_then_bad_request() -> Result<(), anyhow::Error> {
        let svc = StarredRestaurantsService::new(catalog());
        let view = svc.create("R1").await?;
        svc.create("R2").await?;
        let id = view.id.to_string();

        svc.delete(&id).await?;
        assert_eq!(svc.len().await, 1);
        assert!(matches!(svc.get_by_id(&id).await, Err(ServiceError::NotFound(_))));

        assert!(matches!(svc.delete(&id).await, Err(ServiceError::BadRequest(_))));
        assert_eq!(svc.len().await, 1);
        assert!(matches!(svc.delete("garbage").await, Err(ServiceError::BadRequest(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_keeps_order_of_remaining_entries() -> Result<(), anyhow::Error> {
        let svc = StarredRestaurantsService::new(catalog());
        let a = svc.create("R1").await?;
        let b = svc.create("R2").await?;
        let c = svc.create("R1").await?;

        svc.delete(&b.id.to_string()).await?;
        let ids: Vec<Uuid> = svc.list().await?.into_iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
        Ok(())
    }

    #[tokio::test]
    async fn update_comment_targets_only_matching_entry() -> Result<(), anyhow::Error> {
        let svc = StarredRestaurantsService::new(catalog());
        let first = svc.create("R1").await?;
        let second = svc.create("R2").await?;

        svc.update_comment(&second.id.to_string(), Some("Great service".into())).await?;
        assert_eq!(svc.get_by_id(&second.id.to_string()).await?.comment.as_deref(), Some("Great service"));
        assert!(svc.get_by_id(&first.id.to_string()).await?.comment.is_none());

        svc.update_comment(&second.id.to_string(), None).await?;
        assert!(svc.get_by_id(&second.id.to_string()).await?.comment.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn update_comment_unknown_id_mutates_nothing() -> Result<(), anyhow::Error> {
        let svc = StarredRestaurantsService::seeded(Arc::new(InMemoryCatalog::builtin())).await;
        let before = svc.list().await?;
        let res = svc.update_comment(&Uuid::new_v4().to_string(), Some("x".into())).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        assert_eq!(svc.list().await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn list_names_match_catalog() -> Result<(), anyhow::Error> {
        let catalog = Arc::new(InMemoryCatalog::builtin());
        let svc = StarredRestaurantsService::seeded(catalog.clone()).await;
        svc.create("3c2f5a8e-1d2b-4c55-9a0e-6f1b7f2d9a11").await?;

        let listed = svc.list().await?;
        assert_eq!(listed.len(), svc.len().await);
        for view in &listed {
            let entry = svc.get_by_id(&view.id.to_string()).await?;
            let restaurant = catalog.find_by_id(&entry.restaurant_id).await.expect("catalog record");
            assert_eq!(view.name, restaurant.name);
        }
        assert_eq!(listed[0].comment.as_deref(), Some("Best pho in NYC"));
        Ok(())
    }

    /// Catalog whose contents can be swapped out from under the service.
    struct ShrinkingCatalog {
        inner: std::sync::Mutex<InMemoryCatalog>,
    }

    #[async_trait::async_trait]
    impl RestaurantCatalog for ShrinkingCatalog {
        async fn find_by_id(&self, id: &str) -> Option<Restaurant> {
            let inner = self.inner.lock().unwrap().clone();
            inner.find_by_id(id).await
        }
    }

    #[tokio::test]
    async fn list_fails_when_restaurant_disappears() -> Result<(), anyhow::Error> {
        let catalog = Arc::new(ShrinkingCatalog {
            inner: std::sync::Mutex::new(InMemoryCatalog::from_restaurants(vec![Restaurant::new("R1", "Pho House")])),
        });
        let svc = StarredRestaurantsService::new(catalog.clone());
        svc.create("R1").await?;

        *catalog.inner.lock().unwrap() = InMemoryCatalog::default();
        assert!(matches!(svc.list().await, Err(ServiceError::Inconsistent(_))));
        Ok(())
    }

    #[tokio::test]
    async fn seeding_skips_entries_with_unknown_restaurant() {
        let svc = StarredRestaurantsService::seeded(catalog()).await;
        assert!(svc.is_empty().await);

        let svc = StarredRestaurantsService::seeded(Arc::new(InMemoryCatalog::builtin())).await;
        assert_eq!(svc.len().await, 2);
        let entry = svc.get_by_id("a7272cd9-26fb-44b5-8d53-9781f55175a1").await.expect("seeded entry");
        assert_eq!(entry.comment.as_deref(), Some("Best pho in NYC"));
    }

    #[tokio::test]
    async fn scenario_star_comment_unstar() -> Result<(), anyhow::Error> {
        let svc = StarredRestaurantsService::new(catalog());
        let view = svc.create("R1").await?;
        let id = view.id.to_string();
        assert!(svc.list().await?.contains(&StarredView { id: view.id, comment: None, name: "Pho House".into() }));

        svc.update_comment(&id, Some("Great service".into())).await?;
        assert_eq!(svc.get_by_id(&id).await?.comment.as_deref(), Some("Great service"));

        svc.delete(&id).await?;
        assert!(matches!(svc.delete(&id).await, Err(ServiceError::BadRequest(_))));
        Ok(())
    }
}
