//! Day-by-day report of the simulation.

use std::io::Write;

use serde::Serialize;

use gildedrose_inventory::{Inventory, Item};

use crate::config::{DemoConfig, OutputFormat};

/// State of every item at the end of a day.
#[derive(Debug, Serialize)]
pub struct DayReport<'a> {
    pub day: u32,
    pub items: &'a [Item],
}

impl<'a> DayReport<'a> {
    pub fn of(inventory: &'a Inventory) -> Self {
        Self {
            day: inventory.day(),
            items: inventory.items(),
        }
    }

    fn write(&self, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
        match format {
            OutputFormat::Text => {
                for item in self.items {
                    writeln!(out, "Day {}: {item}", self.day)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// Print day 0, then advance and print once per configured day.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let mut inventory = Inventory::new(config.items.clone());

    DayReport::of(&inventory).write(config.format, out)?;
    for _ in 0..config.days {
        inventory.update_quality();
        DayReport::of(&inventory).write(config.format, out)?;
    }

    out.flush()?;
    Ok(())
}
