#![doc(test(attr(deny(warnings))))]

//! Household Core offers the chore reward ledger and meal-plan driven
//! grocery aggregation primitives that power higher level family-hub
//! workflows.

pub mod domain;
pub mod errors;
pub mod grocery;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use errors::{CoreError, CoreResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Household Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
