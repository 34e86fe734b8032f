use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Running account balance after the transaction dated `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: Decimal,
}

/// Cumulative savings reached on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsPoint {
    pub date: NaiveDate,
    pub savings: Decimal,
}

/// Outflows of one calendar month, grouped by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySpending {
    /// First day of the month.
    pub month: NaiveDate,
    pub categories: BTreeMap<String, Decimal>,
    pub total: Decimal,
}
