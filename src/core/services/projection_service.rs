use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    domain::{checked_add2, SavingsPoint},
    errors::{Result, StoryError},
};

/// Day of month projected deposits land on, ahead of most recorded activity.
pub const PROJECTION_DAY: u32 = 2;

pub struct ProjectionService;

impl ProjectionService {
    /// Twelve cumulative monthly deposits of `monthly_income * rate` across `year`.
    ///
    /// The rate is applied as given; range checks belong to the caller.
    pub fn project_savings(
        rate: Decimal,
        monthly_income: Decimal,
        year: i32,
    ) -> Result<Vec<SavingsPoint>> {
        Self::project_savings_on_day(rate, monthly_income, year, PROJECTION_DAY)
    }

    pub fn project_savings_on_day(
        rate: Decimal,
        monthly_income: Decimal,
        year: i32,
        day: u32,
    ) -> Result<Vec<SavingsPoint>> {
        let deposit = monthly_income.checked_mul(rate).ok_or_else(|| {
            StoryError::invalid(
                "monthly_income",
                format!("{monthly_income} * {rate} leaves the representable range"),
            )
        })?;
        let mut cumulative = Decimal::ZERO;
        let mut series = Vec::with_capacity(12);
        for month in 1..=12 {
            let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                StoryError::invalid(
                    "projection_day",
                    format!("{year}-{month:02}-{day:02} is not a calendar date"),
                )
            })?;
            cumulative = checked_add2(cumulative, deposit)
                .ok_or_else(|| StoryError::overflow("savings projection", date))?;
            series.push(SavingsPoint {
                date,
                savings: cumulative,
            });
        }
        debug!(%rate, %monthly_income, year, "built savings projection");
        Ok(series)
    }
}
