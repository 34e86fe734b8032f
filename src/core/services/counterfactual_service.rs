use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    domain::{money::halve, Account, BalancePoint, Transaction},
    errors::Result,
};

use super::SeriesService;

/// Result of dropping every transaction of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionOutcome {
    pub series: Vec<BalancePoint>,
    /// Input transactions the series was folded from.
    pub transactions: Vec<Transaction>,
    pub removed: usize,
}

/// Result of re-timing one transaction as two half payments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    pub series: Vec<BalancePoint>,
    /// Input transactions with the original removed and both halves appended.
    pub transactions: Vec<Transaction>,
    /// The two inserted halves, in split-date order.
    pub synthetic: [Transaction; 2],
    /// `false` when no ledger transaction matched category, date and amount.
    /// The halves are still applied, but the scenario no longer agrees with
    /// the ledger it was written against.
    pub matched: bool,
}

pub struct CounterfactualService;

impl CounterfactualService {
    /// Balance series with every `(category, date)` match removed.
    pub fn excluding_event(
        transactions: &[Transaction],
        start_balance: Decimal,
        category: &str,
        date: NaiveDate,
    ) -> Result<ExclusionOutcome> {
        let kept: Vec<Transaction> = transactions
            .iter()
            .filter(|txn| !txn.is_event(category, date))
            .cloned()
            .collect();
        let removed = transactions.len() - kept.len();
        debug!(removed, category, %date, "excluded event from balance series");
        Ok(ExclusionOutcome {
            series: SeriesService::balance_series(&kept, start_balance)?,
            transactions: kept,
            removed,
        })
    }

    /// Balance series with the first `(category, date, original_amount)` match
    /// replaced by two halves dated `split_dates[0]` and `split_dates[1]`.
    ///
    /// Unmatched halves are booked on `fallback_account`.
    pub fn split_event(
        transactions: &[Transaction],
        start_balance: Decimal,
        fallback_account: &Account,
        category: &str,
        date: NaiveDate,
        original_amount: Decimal,
        split_dates: [NaiveDate; 2],
    ) -> Result<SplitOutcome> {
        let mut adjusted = transactions.to_vec();
        let position = adjusted
            .iter()
            .position(|txn| txn.is_event(category, date) && txn.amount == original_amount);

        let template = match position {
            Some(idx) => adjusted.remove(idx),
            None => {
                warn!(
                    category,
                    %date,
                    %original_amount,
                    account = %fallback_account,
                    "no ledger transaction matches the split event; applying synthetic split anyway"
                );
                Transaction::new(date, fallback_account.clone(), category, original_amount)
            }
        };

        let (first, second) = halve(original_amount);
        let synthetic = [
            split_half(&template, split_dates[0], first, 1),
            split_half(&template, split_dates[1], second, 2),
        ];
        adjusted.extend(synthetic.iter().cloned());

        Ok(SplitOutcome {
            series: SeriesService::balance_series(&adjusted, start_balance)?,
            transactions: adjusted,
            synthetic,
            matched: position.is_some(),
        })
    }
}

fn split_half(template: &Transaction, date: NaiveDate, amount: Decimal, part: u8) -> Transaction {
    let description = if template.description.is_empty() {
        format!("{} (part {part} of 2)", template.category)
    } else {
        format!("{} (part {part} of 2)", template.description)
    };
    Transaction::new(date, template.account.clone(), template.category.clone(), amount)
        .with_kind(template.kind.clone())
        .with_description(description)
}
