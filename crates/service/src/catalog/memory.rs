use std::{collections::HashMap, path::Path};

use async_trait::async_trait;
use models::Restaurant;
use tokio::fs;
use tracing::info;

use super::RestaurantCatalog;
use crate::errors::ServiceError;

/// Catalog held in a `HashMap<id, Restaurant>`, loaded once and never changed.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    restaurants: HashMap<String, Restaurant>,
}

impl InMemoryCatalog {
    /// Build from a list; a later record with the same id replaces an earlier one.
    pub fn from_restaurants(list: Vec<Restaurant>) -> Self {
        let restaurants = list.into_iter().map(|r| (r.id.clone(), r)).collect();
        Self { restaurants }
    }

    /// Load a JSON array of restaurants from disk.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .await
            .map_err(|e| ServiceError::Catalog(format!("cannot read {}: {e}", path.display())))?;
        let list: Vec<Restaurant> = serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::Catalog(format!("cannot parse {}: {e}", path.display())))?;
        let catalog = Self::from_restaurants(list);
        info!(path = %path.display(), count = catalog.len(), "restaurant catalog loaded");
        Ok(catalog)
    }

    /// Small bundled dataset; includes the restaurants the default starred entries reference.
    pub fn builtin() -> Self {
        let r = |id: &str, name: &str, cuisine: &str, address: &str| Restaurant {
            id: id.into(),
            name: name.into(),
            cuisine: Some(cuisine.into()),
            address: Some(address.into()),
        };
        Self::from_restaurants(vec![
            r("869c848c-7a58-4ed6-ab88-72ee2e8e677c", "Pho Saigon", "Vietnamese", "128 Baxter St, New York, NY"),
            r("e8036613-4b72-46f6-ab5e-edd2fc7c4fe4", "Lucky Dumpling House", "Chinese", "45 Mott St, New York, NY"),
            r("3c2f5a8e-1d2b-4c55-9a0e-6f1b7f2d9a11", "Casa Verde", "Mexican", "311 W 14th St, New York, NY"),
            r("b5e9d0c4-77a1-4f0e-8c3d-2a6e4b1f5c22", "Sakura Ramen", "Japanese", "62 St Marks Pl, New York, NY"),
            r("f1a4c7e2-9b3d-4e68-a5f0-8d2c6b7e3a33", "Trattoria Luna", "Italian", "19 Carmine St, New York, NY"),
        ])
    }

    pub fn len(&self) -> usize { self.restaurants.len() }

    pub fn is_empty(&self) -> bool { self.restaurants.is_empty() }
}

#[async_trait]
impl RestaurantCatalog for InMemoryCatalog {
    async fn find_by_id(&self, id: &str) -> Option<Restaurant> {
        self.restaurants.get(id).cloned()
    }
}
