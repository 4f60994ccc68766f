use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::restaurant::Restaurant;

/// A starred restaurant as stored: `{ id, restaurantId, comment }`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StarredEntry {
    pub id: Uuid,
    pub restaurant_id: String,
    pub comment: Option<String>,
}

impl StarredEntry {
    /// Join with the catalog record this entry points at.
    pub fn view(&self, restaurant: &Restaurant) -> StarredView {
        StarredView {
            id: self.id,
            comment: self.comment.clone(),
            name: restaurant.name.clone(),
        }
    }
}

/// Listing shape: entry joined with the restaurant name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StarredView {
    pub id: Uuid,
    pub comment: Option<String>,
    pub name: String,
}

/// `POST` body; `id` is the catalog restaurant id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateStarredRequest {
    pub id: String,
}

/// `PUT` body. A missing `newComment` deserializes as `None` and clears the comment.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
    #[serde(default)]
    pub new_comment: Option<String>,
}
