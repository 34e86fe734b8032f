#![allow(dead_code)]

use chrono::NaiveDate;
use finance_story::{Account, Ledger, Transaction};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A year of synthetic household activity, shared across tests.
pub static SAMPLE_LEDGER: Lazy<Ledger> = Lazy::new(|| Ledger::new(sample_transactions()));

pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).expect("valid 2024 date")
}

fn checking(month: u32, day: u32, category: &str, kind: &str, amount: Decimal) -> Transaction {
    Transaction::new(date(month, day), Account::Checking, category, amount).with_kind(kind)
}

pub fn sample_transactions() -> Vec<Transaction> {
    let mut txns = Vec::new();
    for month in 1..=12 {
        txns.push(checking(month, 1, "Salary", "Income", dec!(4500)));
        txns.push(checking(month, 3, "Rent", "Expense", dec!(-1500)));
        txns.push(checking(month, 8, "Groceries", "Expense", dec!(-210.35)));
        txns.push(checking(month, 22, "Groceries", "Expense", dec!(-187.615)));
        txns.push(checking(month, 5, "Transfer", "Transfer", dec!(-600)));
        txns.push(
            Transaction::new(date(month, 5), Account::Savings, "Savings Balance", dec!(600))
                .with_kind("Transfer"),
        );
    }
    txns.push(
        checking(4, 15, "Travel", "Expense", dec!(-1200)).with_description("Spring trip"),
    );
    txns
}

pub const SAMPLE_CSV: &str = "\
date,account,category,type,amount,description
2024-01-01,Checking,Salary,Income,4500,Paycheck
2024-01-03,Checking,Rent,Expense,-1500,Apartment
2024-01-05,Savings,Savings Balance,Transfer,600,Monthly deposit
2024-01-05,Checking,Transfer,Transfer,-600,To savings
2024-04-01,Checking,Salary,Income,4500,Paycheck
2024-04-15,Checking,Travel,Expense,-1200,Spring trip
2024-04-20,Checking,Groceries,Expense,-200,Market
";

pub fn write_sample_csv() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("temp csv");
    std::io::Write::write_all(&mut file, SAMPLE_CSV.as_bytes()).expect("write csv");
    file
}
