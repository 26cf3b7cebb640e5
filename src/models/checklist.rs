use serde::{Deserialize, Serialize};

/// One item of the security checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistResource {
    pub title: String,
    pub description: String,
    /// Tools or reading for this item. Empty when the item stands on its own.
    #[serde(default)]
    pub resources: Vec<ResourceLink>,
}

/// A named link attached to a checklist item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub name: String,
    pub url: String,
}
