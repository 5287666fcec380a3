use serde::{Deserialize, Serialize};

use super::ids::PartnerId;
use super::record::Extra;

/// The sharing partner. A singleton stored under `@partner`, not a collection.
///
/// `connected` is only a local flag; nothing is synchronised over the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub connected: bool,
    #[serde(flatten, default)]
    pub extra: Extra,
}

impl Partner {
    pub fn new(id: PartnerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            connected: false,
            extra: Extra::new(),
        }
    }

    pub fn connected(mut self) -> Self {
        self.connected = true;
        self
    }
}
