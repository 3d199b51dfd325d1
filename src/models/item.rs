use crate::models::types::ItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique key (e.g., "apple")
    pub id: ItemId,

    /// Display name (e.g., "Red Apple")
    pub name: String,

    /// Full description
    pub description: String,

    /// Whether the item can be eaten (and is destroyed by it)
    pub is_edible: bool,
}

impl Item {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
        is_edible: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            is_edible,
        }
    }
}
