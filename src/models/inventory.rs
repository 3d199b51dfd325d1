use crate::models::item::Item;
use crate::models::types::ItemId;
use std::collections::BTreeMap;

/// A set of items unique by id. Used both for what lies in a room and for what
/// the player carries. Iteration order is by item id, so listings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<ItemId, Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Adds the item, returning the previous item with the same id (if any).
    pub fn insert(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.id.clone(), item)
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        self.items.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.keys()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders one `<li>` per item, with a form button per action.
    pub(crate) fn to_html_list(&self, actions: &[&str]) -> String {
        if self.items.is_empty() {
            return "<li>nothing</li>".to_string();
        }

        self.items
            .values()
            .map(|item| {
                let buttons: Vec<String> = actions
                    .iter()
                    .map(|action| {
                        format!(
                            r#"<form method="post" action="/items/{id}/{action}"><button type="submit">{action}</button></form>"#,
                            id = item.id,
                        )
                    })
                    .collect();
                format!(
                    "<li><strong>{}</strong> - {} {}</li>",
                    item.name,
                    item.description,
                    buttons.join(" ")
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl IntoIterator for Inventory {
    type Item = Item;
    type IntoIter = std::collections::btree_map::IntoValues<ItemId, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_values()
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        let mut inv = Inventory::new();
        for item in iter {
            inv.insert(item);
        }
        inv
    }
}
