//! Plain data types shared by the service and HTTP layers.

pub mod restaurant;
pub mod starred;

pub use restaurant::Restaurant;
pub use starred::{CreateStarredRequest, StarredEntry, StarredView, UpdateCommentRequest};
