//! `gildedrose-core` — shared domain building blocks.
//!
//! Pure domain primitives only (no IO, no logging setup).

pub mod error;

pub use error::{DomainError, DomainResult};
