use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    str::FromStr,
};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::{
    domain::{Account, Transaction},
    errors::{Result, StoryError},
    ledger::Ledger,
};

use super::LedgerSource;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reads `date,account,category,type,amount,description` rows.
#[derive(Debug, Clone)]
pub struct CsvLedgerSource {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct LedgerRow {
    date: String,
    account: String,
    category: String,
    #[serde(rename = "type", default)]
    kind: String,
    amount: String,
    #[serde(default)]
    description: String,
}

impl CsvLedgerSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses CSV content from any reader. Errors name the 1-based line of the bad row.
    pub fn parse_reader<R: Read>(reader: R) -> Result<Ledger> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut transactions = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|pos| pos.line()).unwrap_or_default() as usize;
            let row: LedgerRow =
                record
                    .deserialize(Some(&headers))
                    .map_err(|err| StoryError::ParseError {
                        line,
                        message: err.to_string(),
                    })?;
            transactions.push(row_to_transaction(row, line)?);
        }
        Ok(Ledger::new(transactions))
    }
}

impl LedgerSource for CsvLedgerSource {
    fn load(&self) -> Result<Ledger> {
        let file = File::open(&self.path).map_err(|err| {
            StoryError::StorageError(format!("cannot open {}: {}", self.path.display(), err))
        })?;
        let ledger = Self::parse_reader(file)?;
        info!(
            path = %self.path.display(),
            transactions = ledger.transaction_count(),
            "ledger loaded"
        );
        Ok(ledger)
    }
}

fn row_to_transaction(row: LedgerRow, line: usize) -> Result<Transaction> {
    let date = NaiveDate::parse_from_str(&row.date, DATE_FORMAT).map_err(|err| {
        StoryError::ParseError {
            line,
            message: format!("date `{}`: {}", row.date, err),
        }
    })?;
    let amount = Decimal::from_str(&row.amount).map_err(|err| StoryError::ParseError {
        line,
        message: format!("amount `{}`: {}", row.amount, err),
    })?;
    if row.account.is_empty() {
        return Err(StoryError::ParseError {
            line,
            message: "account is empty".into(),
        });
    }

    Ok(Transaction {
        date,
        account: Account::from(row.account),
        category: row.category,
        kind: row.kind,
        amount,
        description: row.description,
    })
}
