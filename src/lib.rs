#![doc(test(attr(deny(warnings))))]

//! Finance Story derives the time series behind a household-finance narrative:
//! running checking balances, cumulative savings against a projection, monthly
//! spending, and the counterfactual "what-if" scenarios built on top of them.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use crate::core::scenario::{
    Counterfactual, Preset, ScenarioController, ScenarioParameters, ScenarioSnapshot,
};
pub use crate::domain::{Account, BalancePoint, MonthlySpending, SavingsPoint, Transaction};
pub use crate::errors::{Result, StoryError};
pub use crate::ledger::Ledger;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Story tracing initialized.");
    });
}
