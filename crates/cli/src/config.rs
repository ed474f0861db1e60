//! Harness configuration, read from the environment.
//!
//! - `GILDED_ROSE_DAYS`: days to simulate after day 0 (default 5)
//! - `GILDED_ROSE_FORMAT`: `text` (default) or `json`
//! - `GILDED_ROSE_ITEMS`: JSON array of `{name, sell_in, quality}` objects, or
//!   `;`-separated `"name, sell_in, quality"` entries

use gildedrose_core::{DomainError, DomainResult};
use gildedrose_inventory::Item;

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const FORMAT_VAR: &str = "GILDED_ROSE_FORMAT";
pub const ITEMS_VAR: &str = "GILDED_ROSE_ITEMS";

pub const DEFAULT_DAYS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub days: u32,
    pub format: OutputFormat,
    pub items: Vec<Item>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            format: OutputFormat::default(),
            items: default_items(),
        }
    }
}

/// The single item the demo runs when nothing else is configured.
pub fn default_items() -> Vec<Item> {
    vec![Item::new("+5 Dexterity Vest", 10, 20)]
}

impl DemoConfig {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    ///
    /// Unset or blank variables fall back to defaults; present but malformed
    /// values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let days = match read(DAYS_VAR) {
            Some(raw) => raw.parse::<u32>().map_err(|e| {
                DomainError::invalid_config(format!("{DAYS_VAR}={raw:?}: {e}"))
            })?,
            None => DEFAULT_DAYS,
        };

        let format = match read(FORMAT_VAR) {
            Some(raw) => parse_format(&raw)?,
            None => OutputFormat::default(),
        };

        let items = match read(ITEMS_VAR) {
            Some(raw) => {
                let items = parse_items(&raw)?;
                if items.is_empty() {
                    tracing::warn!("{ITEMS_VAR} lists no items; using the default demo item");
                    default_items()
                } else {
                    items
                }
            }
            None => default_items(),
        };

        Ok(Self {
            days,
            format,
            items,
        })
    }
}

fn parse_format(raw: &str) -> DomainResult<OutputFormat> {
    match raw.to_ascii_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(DomainError::invalid_config(format!(
            "{FORMAT_VAR}={other:?}: expected \"text\" or \"json\""
        ))),
    }
}

fn parse_items(raw: &str) -> DomainResult<Vec<Item>> {
    if raw.starts_with('[') {
        return serde_json::from_str(raw)
            .map_err(|e| DomainError::invalid_config(format!("{ITEMS_VAR}: {e}")));
    }

    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::parse::<Item>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> DomainResult<DemoConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(load(&[]).unwrap(), DemoConfig::default());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = load(&[(DAYS_VAR, "  "), (FORMAT_VAR, ""), (ITEMS_VAR, " ; ")]).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn reads_days_and_format() {
        let config = load(&[(DAYS_VAR, "30"), (FORMAT_VAR, "JSON")]).unwrap();
        assert_eq!(config.days, 30);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_bad_days_and_format() {
        assert!(matches!(
            load(&[(DAYS_VAR, "-1")]),
            Err(DomainError::InvalidConfig(_))
        ));
        assert!(matches!(
            load(&[(FORMAT_VAR, "yaml")]),
            Err(DomainError::InvalidConfig(_))
        ));
    }

    #[test]
    fn reads_text_item_list() {
        let config = load(&[(
            ITEMS_VAR,
            "Aged Brie, 2, 0; Sulfuras, Hand of Ragnaros, 0, 80",
        )])
        .unwrap();
        assert_eq!(
            config.items,
            vec![
                Item::new("Aged Brie", 2, 0),
                Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
            ]
        );
    }

    #[test]
    fn reads_json_item_list() {
        let config = load(&[(
            ITEMS_VAR,
            r#"[{"name": "Conjured Mana Cake", "sell_in": 3, "quality": 6}]"#,
        )])
        .unwrap();
        assert_eq!(config.items, vec![Item::new("Conjured Mana Cake", 3, 6)]);
    }

    #[test]
    fn malformed_item_lists_are_errors() {
        assert!(matches!(
            load(&[(ITEMS_VAR, "Aged Brie, 2")]),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            load(&[(ITEMS_VAR, r#"[{"name": "Aged Brie"}]"#)]),
            Err(DomainError::InvalidConfig(_))
        ));
    }
}
