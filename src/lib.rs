#![doc(test(attr(deny(warnings))))]

//! Daybook Core offers the ledger and journal storage primitives behind
//! a personal finance tracker and a markdown journal: signed transactions
//! with derived totals, dated entries with tags and mood, filtered
//! listing, a small markdown preview renderer, and JSON import/export.

pub mod errors;
pub mod journal;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Daybook Core tracing initialized.");
    });
}
