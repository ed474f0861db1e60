use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::DomainError;

/// Upper bound of `quality` for every non-legendary item.
pub const MAX_QUALITY: i32 = 50;

/// Lower bound of `quality` for every non-legendary item.
pub const MIN_QUALITY: i32 = 0;

/// A stocked item.
///
/// The name is fixed at construction and selects the update rule. `sell_in`
/// counts down with no floor (expired means `sell_in < 0`); `quality` is kept in
/// `MIN_QUALITY..=MAX_QUALITY` by the rules, except for legendary items which
/// are never touched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
}

impl Item {
    /// Create an item. Initial values are taken as-is, no range checks.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// Past its sell-by date.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Parses the `Display` form: `"<name>, <sell_in>, <quality>"`.
///
/// Names may themselves contain commas, so the two numbers are taken from the
/// right and everything before them is the name.
impl FromStr for Item {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.rsplitn(3, ',');
        let quality = fields.next();
        let sell_in = fields.next();
        let name = fields.next();

        let (Some(name), Some(sell_in), Some(quality)) = (name, sell_in, quality) else {
            return Err(DomainError::validation(format!(
                "expected \"name, sell_in, quality\", got {s:?}"
            )));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let sell_in = sell_in.trim().parse::<i32>().map_err(|e| {
            DomainError::validation(format!("sell_in {:?}: {e}", sell_in.trim()))
        })?;
        let quality = quality.trim().parse::<i32>().map_err(|e| {
            DomainError::validation(format!("quality {:?}: {e}", quality.trim()))
        })?;

        Ok(Self::new(name, sell_in, quality))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_demo_format() {
        let item = Item::new("+5 Dexterity Vest", 10, 20);
        assert_eq!(item.to_string(), "+5 Dexterity Vest, 10, 20");
    }

    #[test]
    fn parse_keeps_commas_in_name() {
        let item: Item = "Sulfuras, Hand of Ragnaros, -1, 80".parse().unwrap();
        assert_eq!(item.name(), "Sulfuras, Hand of Ragnaros");
        assert_eq!(item.sell_in(), -1);
        assert_eq!(item.quality(), 80);
        assert_eq!(item.to_string().parse::<Item>().unwrap(), item);
    }

    #[test]
    fn parse_trims_whitespace() {
        let item: Item = "  Aged Brie ,2 ,  0 ".parse().unwrap();
        assert_eq!(item, Item::new("Aged Brie", 2, 0));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(matches!(
            "Aged Brie, 2".parse::<Item>(),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            " , 2, 0".parse::<Item>(),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            "Aged Brie, two, 0".parse::<Item>(),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            "Aged Brie, 2, 0.5".parse::<Item>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn expiry_is_negative_sell_in() {
        assert!(!Item::new("x", 0, 1).is_expired());
        assert!(Item::new("x", -1, 1).is_expired());
    }

    #[test]
    fn serde_shape_is_flat_record() {
        let item = Item::new("Conjured Mana Cake", 3, 6);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Conjured Mana Cake", "sell_in": 3, "quality": 6})
        );
        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
