//! Inventory domain module.
//!
//! This crate contains the day-advance business rules for the shop's stock,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod inventory;
pub mod item;
mod rules;

pub use category::{AGED_BRIE, BACKSTAGE_PASS, CONJURED, ItemCategory, SULFURAS};
pub use inventory::Inventory;
pub use item::{Item, MAX_QUALITY, MIN_QUALITY};
