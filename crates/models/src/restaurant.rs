use serde::{Deserialize, Serialize};

/// A catalog restaurant. Only `id` and `name` matter to the starred list;
/// the remaining attributes are carried along when present.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Restaurant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), cuisine: None, address: None }
    }
}
