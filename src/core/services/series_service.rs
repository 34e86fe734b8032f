use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    domain::{checked_add2, BalancePoint, SavingsPoint, Transaction},
    errors::{Result, StoryError},
};

pub struct SeriesService;

impl SeriesService {
    /// Folds `transactions` over `start_balance` in date order, one point per transaction.
    pub fn balance_series(
        transactions: &[Transaction],
        start_balance: Decimal,
    ) -> Result<Vec<BalancePoint>> {
        let series: Vec<BalancePoint> = Self::fold_balances(transactions, start_balance)?
            .into_iter()
            .map(|(_, point)| point)
            .collect();
        debug!(
            points = series.len(),
            %start_balance,
            "built balance series"
        );
        Ok(series)
    }

    /// Accumulates `entries` from zero in date order. The caller selects which
    /// entries count as savings deposits.
    pub fn cumulative_series(entries: &[Transaction]) -> Result<Vec<SavingsPoint>> {
        let mut cumulative = Decimal::ZERO;
        let series = chronological(entries)
            .into_iter()
            .map(|entry| {
                cumulative = checked_add2(cumulative, entry.amount)
                    .ok_or_else(|| StoryError::overflow("cumulative series", entry.date))?;
                Ok(SavingsPoint {
                    date: entry.date,
                    savings: cumulative,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(points = series.len(), "built cumulative series");
        Ok(series)
    }

    /// Balance fold that keeps each point paired with the transaction that produced it.
    pub(crate) fn fold_balances(
        transactions: &[Transaction],
        start_balance: Decimal,
    ) -> Result<Vec<(&Transaction, BalancePoint)>> {
        let mut balance = start_balance;
        chronological(transactions)
            .into_iter()
            .map(|txn| {
                balance = checked_add2(balance, txn.amount)
                    .ok_or_else(|| StoryError::overflow("balance series", txn.date))?;
                Ok((
                    txn,
                    BalancePoint {
                        date: txn.date,
                        balance,
                    },
                ))
            })
            .collect()
    }
}

/// Borrowed copy of `transactions` sorted by date; equal dates keep input order.
pub(crate) fn chronological(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|txn| txn.date);
    sorted
}
