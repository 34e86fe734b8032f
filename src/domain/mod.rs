//! Typed records shared by the ledger store, the series services and the scenario controller.

pub mod account;
pub mod money;
pub mod series;
pub mod transaction;

pub use account::Account;
pub use money::{checked_add2, round2};
pub use series::{BalancePoint, MonthlySpending, SavingsPoint};
pub use transaction::Transaction;
