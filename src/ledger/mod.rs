//! The in-memory ledger store every series is derived from.

#[allow(clippy::module_inception)]
pub mod ledger;

pub use ledger::Ledger;
