//! Item categories and name-based resolution.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::rules;

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const CONJURED: &str = "Conjured Mana Cake";

/// Closed set of update behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Normal,
    AgedBrie,
    /// Never ages, never changes quality.
    Legendary,
    BackstagePass,
    Conjured,
}

impl ItemCategory {
    /// Resolve the category for an item name.
    ///
    /// Exact, case-sensitive match on the known special names. Everything else
    /// (including names the shop has not heard of yet) is `Normal`.
    pub fn resolve(name: &str) -> Self {
        match name {
            AGED_BRIE => ItemCategory::AgedBrie,
            BACKSTAGE_PASS => ItemCategory::BackstagePass,
            SULFURAS => ItemCategory::Legendary,
            CONJURED => ItemCategory::Conjured,
            _ => ItemCategory::Normal,
        }
    }

    /// Advance `item` by one day under this category's rule.
    pub fn apply(self, item: &mut Item) {
        match self {
            ItemCategory::Normal => rules::normal(item),
            ItemCategory::AgedBrie => rules::aged_brie(item),
            ItemCategory::Legendary => rules::legendary(item),
            ItemCategory::BackstagePass => rules::backstage_pass(item),
            ItemCategory::Conjured => rules::conjured(item),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Normal => "normal",
            ItemCategory::AgedBrie => "aged_brie",
            ItemCategory::Legendary => "legendary",
            ItemCategory::BackstagePass => "backstage_pass",
            ItemCategory::Conjured => "conjured",
        }
    }
}

impl From<&Item> for ItemCategory {
    fn from(item: &Item) -> Self {
        Self::resolve(item.name())
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
