//! The ledger-load boundary: raw records are parsed and typed here, once,
//! before any series is derived.

pub mod csv_source;
pub mod snapshot_export;

pub use csv_source::CsvLedgerSource;
pub use snapshot_export::export_snapshot;

use crate::{errors::Result, ledger::Ledger};

/// Anything that can produce a fully typed ledger snapshot.
pub trait LedgerSource: Send + Sync {
    fn load(&self) -> Result<Ledger>;
}
