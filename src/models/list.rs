//! The shopping list: an ordered store of items
//!
//! Mutators never fail. An unknown id leaves the list untouched; the return
//! value tells the caller whether anything changed.

use serde::{Deserialize, Serialize};

use super::ids::ItemId;
use super::item::{ItemInput, ShoppingItem};
use super::money::Money;
use crate::error::{BasketError, BasketResult};

/// Items in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item and return a reference to it
    pub fn add(&mut self, input: ItemInput) -> &ShoppingItem {
        self.items.push(ShoppingItem::from_input(input));
        &self.items[self.items.len() - 1]
    }

    /// Replace name, category and amount of the item with `id`
    ///
    /// Returns the item as it was before the edit, or `None` if absent.
    pub fn edit(&mut self, id: &ItemId, input: ItemInput) -> Option<ShoppingItem> {
        let item = self.items.iter_mut().find(|i| &i.id == id)?;
        let before = item.clone();
        item.apply(input);
        Some(before)
    }

    /// Flip the completed flag; returns the new value, or `None` if absent
    pub fn toggle(&mut self, id: &ItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|i| &i.id == id)?;
        item.completed = !item.completed;
        Some(item.completed)
    }

    /// Delete by id; returns the removed item, or `None` if absent
    pub fn remove(&mut self, id: &ItemId) -> Option<ShoppingItem> {
        let pos = self.items.iter().position(|i| &i.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Remove every completed item, returning them in list order
    pub fn remove_completed(&mut self) -> Vec<ShoppingItem> {
        let (done, pending): (Vec<_>, Vec<_>) =
            self.items.drain(..).partition(|i| i.completed);
        self.items = pending;
        done
    }

    pub fn get(&self, id: &ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Resolve a user-supplied identifier to a single item
    ///
    /// Tries, in order: exact id, id prefix, case-insensitive name.
    pub fn find(&self, identifier: &str) -> BasketResult<&ShoppingItem> {
        let identifier = identifier.trim();

        if let Some(item) = self.items.iter().find(|i| i.id.as_str() == identifier) {
            return Ok(item);
        }

        let by_prefix: Vec<_> = self
            .items
            .iter()
            .filter(|i| i.id.starts_with(identifier))
            .collect();
        let candidates = if by_prefix.is_empty() {
            self.items
                .iter()
                .filter(|i| i.matches_name(identifier))
                .collect()
        } else {
            by_prefix
        };

        match candidates.as_slice() {
            [] => Err(BasketError::item_not_found(identifier)),
            [item] => Ok(*item),
            many => Err(BasketError::Ambiguous {
                identifier: identifier.to_string(),
                count: many.len(),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }

    /// Sum of all item amounts
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.amount).sum()
    }
}

impl From<Vec<ShoppingItem>> for ShoppingList {
    fn from(items: Vec<ShoppingItem>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a ShoppingItem;
    type IntoIter = std::slice::Iter<'a, ShoppingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
