use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::{
    domain::{checked_add2, MonthlySpending, Transaction},
    errors::{Result, StoryError},
};

pub struct SpendingService;

impl SpendingService {
    /// Outflows grouped by calendar month and category, reported as positive totals.
    /// Inflows are ignored.
    pub fn monthly_breakdown(transactions: &[Transaction]) -> Result<Vec<MonthlySpending>> {
        let mut months: BTreeMap<NaiveDate, BTreeMap<String, Decimal>> = BTreeMap::new();
        for txn in transactions.iter().filter(|txn| txn.is_outflow()) {
            let Some(month) = txn.date.with_day(1) else {
                continue;
            };
            let slot = months
                .entry(month)
                .or_default()
                .entry(txn.category.clone())
                .or_insert(Decimal::ZERO);
            *slot = checked_add2(*slot, txn.amount.abs())
                .ok_or_else(|| StoryError::overflow("monthly spending", txn.date))?;
        }

        months
            .into_iter()
            .map(|(month, categories)| {
                let total = categories
                    .values()
                    .try_fold(Decimal::ZERO, |acc, amount| checked_add2(acc, *amount))
                    .ok_or_else(|| StoryError::overflow("monthly spending", month))?;
                Ok(MonthlySpending {
                    month,
                    categories,
                    total,
                })
            })
            .collect()
    }
}
