//! The shop's stock and its day-advance operation.

use tracing::{debug_span, trace};

use crate::category::ItemCategory;
use crate::item::Item;

/// Owned, ordered list of items plus the category each one resolved to.
///
/// Categories are resolved once, when an item enters the inventory. Names are
/// immutable, so the resolution never goes stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    categories: Vec<ItemCategory>,
    day: u32,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        let categories = items.iter().map(ItemCategory::from).collect();
        Self {
            items,
            categories,
            day: 0,
        }
    }

    /// Build an inventory from `(name, sell_in, quality)` triples, in order.
    pub fn from_triples<I, S>(triples: I) -> Self
    where
        I: IntoIterator<Item = (S, i32, i32)>,
        S: Into<String>,
    {
        triples
            .into_iter()
            .map(|(name, sell_in, quality)| Item::new(name, sell_in, quality))
            .collect()
    }

    /// Advance every item by one day.
    pub fn update_quality(&mut self) {
        self.day = self.day.saturating_add(1);
        let span = debug_span!("update_quality", day = self.day, items = self.items.len());
        let _enter = span.enter();

        for (item, category) in self.items.iter_mut().zip(&self.categories) {
            let (sell_in_before, quality_before) = (item.sell_in, item.quality);
            category.apply(item);
            trace!(
                item = item.name(),
                category = category.as_str(),
                sell_in_before,
                quality_before,
                sell_in = item.sell_in,
                quality = item.quality,
                "item updated"
            );
        }
    }

    /// Advance `days` days, one at a time.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }

    /// Number of day-advances performed so far.
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in order, paired with their resolved category.
    pub fn iter(&self) -> impl Iterator<Item = (ItemCategory, &Item)> + '_ {
        self.categories.iter().copied().zip(self.items.iter())
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
