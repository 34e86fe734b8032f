use std::fmt;

use serde::{Deserialize, Serialize};

/// Account a transaction was booked against.
///
/// Labels other than the two well-known accounts are preserved verbatim so
/// that a ledger with extra accounts still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Account {
    Checking,
    Savings,
    Other(String),
}

impl Account {
    pub fn label(&self) -> &str {
        match self {
            Account::Checking => "Checking",
            Account::Savings => "Savings",
            Account::Other(label) => label,
        }
    }
}

impl From<&str> for Account {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("checking") {
            Account::Checking
        } else if trimmed.eq_ignore_ascii_case("savings") {
            Account::Savings
        } else {
            Account::Other(trimmed.to_string())
        }
    }
}

impl From<String> for Account {
    fn from(value: String) -> Self {
        Account::from(value.as_str())
    }
}

impl From<Account> for String {
    fn from(account: Account) -> Self {
        account.label().to_string()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
