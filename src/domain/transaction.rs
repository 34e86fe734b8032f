use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::account::Account;

/// A single dated ledger movement. Outflows are negative, inflows positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub account: Account,
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        account: Account,
        category: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            date,
            account,
            category: category.into(),
            kind: String::new(),
            amount,
            description: String::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Calendar-day match on category and date.
    pub fn is_event(&self, category: &str, date: NaiveDate) -> bool {
        self.category == category && self.date == date
    }

    pub fn is_outflow(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}
