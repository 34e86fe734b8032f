//! Plain-text views of a scenario snapshot.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    core::scenario::{Counterfactual, ScenarioSnapshot},
    core::services::EventLookup,
    domain::{round2, BalancePoint, SavingsPoint},
};

const DATE_LABEL: &str = "%b %d";
const MONTH_LABEL: &str = "%b %Y";

/// `$1,234.50` / `-$1,200.00`.
pub fn money(value: Decimal) -> String {
    let rounded = format!("{:.2}", round2(value.abs()));
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}

/// `0.15` -> `15%`.
pub fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

fn day(date: NaiveDate) -> String {
    date.format(DATE_LABEL).to_string()
}

pub fn summary(snapshot: &ScenarioSnapshot) -> Vec<String> {
    let params = &snapshot.parameters;
    let mut lines = vec![
        format!(
            "Savings rate {} | travel {} | split {}",
            percent(params.savings_rate),
            if params.travel_included { "included" } else { "removed" },
            if params.split_travel { "on" } else { "off" },
        ),
        format!(
            "Checking ends at {}",
            last_balance(&snapshot.balance).unwrap_or_else(|| "n/a".into())
        ),
    ];

    if let Some(counterfactual) = &snapshot.counterfactual {
        let label = match counterfactual {
            Counterfactual::Excluded(_) => "Without the event",
            Counterfactual::Split(_) => "With the event split",
        };
        lines.push(format!(
            "{label}, checking ends at {}",
            last_balance(counterfactual.series()).unwrap_or_else(|| "n/a".into())
        ));
    }

    lines.push(format!(
        "Projected savings {} vs recorded {}",
        last_savings(&snapshot.projection).unwrap_or_else(|| "n/a".into()),
        last_savings(&snapshot.actual_savings).unwrap_or_else(|| "n/a".into()),
    ));

    if let Some(note) = annotation(snapshot) {
        lines.push(note);
    }
    lines
}

/// Caption for the event marker; approximate matches are labelled as such.
pub fn annotation(snapshot: &ScenarioSnapshot) -> Option<String> {
    let note = snapshot.annotation.as_ref()?;
    let event = format!(
        "{} {} {}",
        note.category,
        day(note.date),
        money(note.amount)
    );
    let text = match (&snapshot.counterfactual, note.lookup) {
        (Some(Counterfactual::Excluded(_)), EventLookup::Approximate(point)) => format!(
            "{event} removed; nearest point {} at {}",
            day(point.date),
            money(point.balance)
        ),
        (_, EventLookup::Exact(point)) => format!(
            "{event} caused dip to {} on {}",
            money(point.balance),
            day(point.date)
        ),
        (_, EventLookup::Approximate(point)) => format!(
            "{event} not found; nearest point {} at {}",
            day(point.date),
            money(point.balance)
        ),
        (_, EventLookup::NotFound) => return None,
    };
    Some(text)
}

pub fn balance_table(snapshot: &ScenarioSnapshot) -> Vec<String> {
    let mut lines = vec![format!("{:<8} {:>14}", "Date", "Balance")];
    lines.extend(
        snapshot
            .balance
            .iter()
            .map(|point| format!("{:<8} {:>14}", day(point.date), money(point.balance))),
    );
    if let Some(counterfactual) = &snapshot.counterfactual {
        lines.push(String::new());
        lines.push(format!("{:<8} {:>14}", "Date", "What-if"));
        lines.extend(
            counterfactual
                .series()
                .iter()
                .map(|point| format!("{:<8} {:>14}", day(point.date), money(point.balance))),
        );
    }
    lines
}

pub fn savings_table(snapshot: &ScenarioSnapshot) -> Vec<String> {
    let mut lines = vec![format!("{:<8} {:>14}", "Date", "Projected")];
    lines.extend(
        snapshot
            .projection
            .iter()
            .map(|point| format!("{:<8} {:>14}", day(point.date), money(point.savings))),
    );
    lines.push(String::new());
    lines.push(format!("{:<8} {:>14}", "Date", "Recorded"));
    lines.extend(
        snapshot
            .actual_savings
            .iter()
            .map(|point| format!("{:<8} {:>14}", day(point.date), money(point.savings))),
    );
    lines
}

pub fn spending_table(snapshot: &ScenarioSnapshot) -> Vec<String> {
    let mut lines = Vec::new();
    for month in snapshot.spending.iter() {
        lines.push(format!(
            "{:<20} {:>14}",
            month.month.format(MONTH_LABEL).to_string(),
            money(month.total)
        ));
        for (category, amount) in &month.categories {
            lines.push(format!("  {:<18} {:>14}", category, money(*amount)));
        }
    }
    if lines.is_empty() {
        lines.push("No spending recorded.".into());
    }
    lines
}

fn last_balance(series: &[BalancePoint]) -> Option<String> {
    series.last().map(|point| money(point.balance))
}

fn last_savings(series: &[SavingsPoint]) -> Option<String> {
    series.last().map(|point| money(point.savings))
}
