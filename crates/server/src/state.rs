use std::sync::Arc;

use service::StarredRestaurantsService;

#[derive(Clone)]
pub struct ServerState {
    pub starred: Arc<StarredRestaurantsService>,
}

impl ServerState {
    pub fn new(starred: StarredRestaurantsService) -> Self {
        Self { starred: Arc::new(starred) }
    }
}
