//! Per-category day-advance rules.
//!
//! Each rule advances a single item by one day, in place. Every rule other than
//! `legendary` re-clamps quality after changing it.

use crate::item::{Item, MAX_QUALITY, MIN_QUALITY};

fn lower_quality(item: &mut Item, amount: i32) {
    item.quality = item.quality.saturating_sub(amount).max(MIN_QUALITY);
}

fn raise_quality(item: &mut Item, amount: i32) {
    item.quality = item.quality.saturating_add(amount).min(MAX_QUALITY);
}

fn tick(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
}

pub(crate) fn normal(item: &mut Item) {
    tick(item);
    if item.sell_in >= 0 {
        lower_quality(item, 1);
    } else {
        lower_quality(item, 2);
    }
}

pub(crate) fn aged_brie(item: &mut Item) {
    tick(item);
    if item.sell_in >= 0 {
        raise_quality(item, 1);
    } else {
        raise_quality(item, 2);
    }
}

/// Legendary items neither age nor lose quality.
pub(crate) fn legendary(_item: &mut Item) {}

pub(crate) fn backstage_pass(item: &mut Item) {
    tick(item);
    if item.sell_in < 0 {
        // Concert is over.
        item.quality = 0;
    } else if item.sell_in >= 10 {
        raise_quality(item, 1);
    } else if item.sell_in >= 5 {
        raise_quality(item, 2);
    } else {
        raise_quality(item, 3);
    }
}

pub(crate) fn conjured(item: &mut Item) {
    tick(item);
    if item.sell_in >= 0 {
        lower_quality(item, 2);
    } else {
        lower_quality(item, 4);
    }
}
