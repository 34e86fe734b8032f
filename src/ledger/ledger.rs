use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{Account, Transaction};

/// Immutable, chronologically ordered snapshot of the analysis period.
///
/// Cloning is cheap; clones share the same transaction list.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Arc<[Transaction]>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Ledger {
    /// Takes ownership of parsed records and sorts them by date. Ties keep
    /// their insertion order.
    pub fn new(mut transactions: Vec<Transaction>) -> Self {
        transactions.sort_by_key(|txn| txn.date);
        Self {
            transactions: transactions.into(),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transactions booked against `account`, in ledger order.
    pub fn for_account(&self, account: &Account) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|txn| &txn.account == account)
            .cloned()
            .collect()
    }

    /// Recorded deposits into savings: entries on `account` carrying `category`.
    pub fn savings_deposits(&self, account: &Account, category: &str) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|txn| &txn.account == account && txn.category == category)
            .cloned()
            .collect()
    }

    /// First and last transaction dates, if any.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.transactions.first()?;
        let last = self.transactions.last()?;
        Some((first.date, last.date))
    }
}
