
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{Account, Transaction};

pub(super) fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

pub(super) fn checking(month: u32, day: u32, category: &str, amount: Decimal) -> Transaction {
    Transaction::new(date(month, day), Account::Checking, category, amount)
}
