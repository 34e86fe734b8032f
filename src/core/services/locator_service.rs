use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    domain::{BalancePoint, Transaction},
    errors::Result,
};

use super::SeriesService;

/// Where an event landed on a derived series.
///
/// `Exact` means the point *is* the event; `Approximate` is only the
/// nearest-dated point, and annotations must say so.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "point", rename_all = "snake_case")]
pub enum EventLookup {
    Exact(BalancePoint),
    Approximate(BalancePoint),
    NotFound,
}

impl EventLookup {
    pub fn point(&self) -> Option<&BalancePoint> {
        match self {
            EventLookup::Exact(point) | EventLookup::Approximate(point) => Some(point),
            EventLookup::NotFound => None,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, EventLookup::Exact(_))
    }
}

pub struct EventLocator;

impl EventLocator {
    /// Re-folds `transactions` and returns the balance right after the first
    /// transaction whose category and calendar day match.
    pub fn locate_event(
        transactions: &[Transaction],
        start_balance: Decimal,
        category: &str,
        target: NaiveDate,
    ) -> Result<Option<BalancePoint>> {
        Ok(SeriesService::fold_balances(transactions, start_balance)?
            .into_iter()
            .find(|(txn, _)| txn.is_event(category, target))
            .map(|(_, point)| point))
    }

    /// Point with the smallest day distance to `target`; ties go to the earlier entry in `series`.
    pub fn nearest_point(series: &[BalancePoint], target: NaiveDate) -> Option<BalancePoint> {
        series
            .iter()
            .min_by_key(|point| (point.date - target).num_days().abs())
            .copied()
    }

    /// Exact lookup first, nearest point on `series` only when that finds nothing.
    pub fn locate(
        transactions: &[Transaction],
        start_balance: Decimal,
        category: &str,
        target: NaiveDate,
        series: &[BalancePoint],
    ) -> Result<EventLookup> {
        if let Some(point) = Self::locate_event(transactions, start_balance, category, target)? {
            return Ok(EventLookup::Exact(point));
        }
        Ok(Self::nearest_point(series, target)
            .map(EventLookup::Approximate)
            .unwrap_or(EventLookup::NotFound))
    }
}
