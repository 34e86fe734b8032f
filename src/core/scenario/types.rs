use std::{fmt, str::FromStr, sync::Arc};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    core::services::EventLookup,
    domain::{BalancePoint, MonthlySpending, SavingsPoint},
    errors::{Result, StoryError},
};

/// 15%, the rate the narrative opens with.
pub const DEFAULT_SAVINGS_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

const AGGRESSIVE_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
const CONSERVATIVE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Similarity threshold below which an unknown preset gets no suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    pub savings_rate: Decimal,
    pub travel_included: bool,
    pub split_travel: bool,
}

impl ScenarioParameters {
    pub fn new(savings_rate: Decimal) -> Self {
        Self {
            savings_rate,
            travel_included: true,
            split_travel: false,
        }
    }

    /// Clears `split_travel` when travel is excluded; an event cannot be
    /// removed and re-timed at once.
    pub fn normalized(mut self) -> Self {
        if !self.travel_included {
            self.split_travel = false;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_rate(self.savings_rate).map(|_| ())
    }
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self::new(DEFAULT_SAVINGS_RATE)
    }
}

/// Rejects savings rates outside `[0, 1]`.
pub fn validate_rate(rate: Decimal) -> Result<Decimal> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(StoryError::invalid(
            "savings_rate",
            format!("{rate} is outside [0, 1]"),
        ));
    }
    Ok(rate)
}

/// Named parameter sets that replace all three fields at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Aggressive,
    Conservative,
    RemoveTravel,
    SplitTravel,
    Reset,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Aggressive,
        Preset::Conservative,
        Preset::RemoveTravel,
        Preset::SplitTravel,
        Preset::Reset,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Aggressive => "aggressive",
            Preset::Conservative => "conservative",
            Preset::RemoveTravel => "remove-travel",
            Preset::SplitTravel => "split-travel",
            Preset::Reset => "reset",
        }
    }

    /// Full parameter tuple for this preset. `default_rate` fills the presets
    /// that do not pin a rate of their own.
    pub fn parameters(&self, default_rate: Decimal) -> ScenarioParameters {
        let (savings_rate, travel_included, split_travel) = match self {
            Preset::Aggressive => (AGGRESSIVE_RATE, true, false),
            Preset::Conservative => (CONSERVATIVE_RATE, true, false),
            Preset::RemoveTravel => (default_rate, false, false),
            Preset::SplitTravel => (default_rate, true, true),
            Preset::Reset => (default_rate, true, false),
        };
        ScenarioParameters {
            savings_rate,
            travel_included,
            split_travel,
        }
    }
}

impl FromStr for Preset {
    type Err = StoryError;

    fn from_str(raw: &str) -> Result<Self> {
        let needle = raw.trim().to_ascii_lowercase().replace('_', "-");
        if needle == "default" {
            return Ok(Preset::Reset);
        }
        if let Some(preset) = Preset::ALL.iter().find(|preset| preset.name() == needle) {
            return Ok(*preset);
        }

        let suggestion = Preset::ALL
            .iter()
            .map(|preset| (preset.name(), strsim::jaro_winkler(preset.name(), &needle)))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name.to_string());
        Err(StoryError::UnknownPreset {
            name: raw.trim().to_string(),
            suggestion,
        })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The what-if balance series shown next to the recorded one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "series", rename_all = "snake_case")]
pub enum Counterfactual {
    /// The event removed from the ledger.
    Excluded(Vec<BalancePoint>),
    /// The event paid in two halves.
    Split(Vec<BalancePoint>),
}

impl Counterfactual {
    pub fn series(&self) -> &[BalancePoint] {
        match self {
            Counterfactual::Excluded(series) | Counterfactual::Split(series) => series,
        }
    }
}

/// Where the scenario event sits on the series currently on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventAnnotation {
    pub category: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub lookup: EventLookup,
    pub on_counterfactual: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioWarning {
    /// The split was applied although no ledger entry matched it.
    SplitUnmatched {
        category: String,
        date: NaiveDate,
        amount: Decimal,
    },
}

impl fmt::Display for ScenarioWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioWarning::SplitUnmatched {
                category,
                date,
                amount,
            } => write!(
                f,
                "no {category} transaction of {amount} on {date}; split applied to synthetic data"
            ),
        }
    }
}

/// Read-only view of one recomputation pass.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSnapshot {
    /// Increments on every recomputation.
    pub revision: u64,
    pub parameters: ScenarioParameters,
    pub balance: Arc<[BalancePoint]>,
    pub counterfactual: Option<Counterfactual>,
    pub projection: Vec<SavingsPoint>,
    pub actual_savings: Arc<[SavingsPoint]>,
    pub spending: Arc<[MonthlySpending]>,
    pub annotation: Option<EventAnnotation>,
    pub warnings: Vec<ScenarioWarning>,
}

impl ScenarioSnapshot {
    /// Series the view should draw as "the" balance line.
    pub fn displayed_balance(&self) -> &[BalancePoint] {
        self.counterfactual
            .as_ref()
            .map(Counterfactual::series)
            .unwrap_or(&self.balance[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn preset_table_matches_documented_values() {
        let default = DEFAULT_SAVINGS_RATE;
        assert_eq!(default, dec!(0.15));
        assert_eq!(
            Preset::Aggressive.parameters(default),
            ScenarioParameters {
                savings_rate: dec!(0.25),
                travel_included: true,
                split_travel: false,
            }
        );
        assert_eq!(
            Preset::Conservative.parameters(default).savings_rate,
            dec!(0.10)
        );
        let remove = Preset::RemoveTravel.parameters(default);
        assert!(!remove.travel_included && !remove.split_travel);
        let split = Preset::SplitTravel.parameters(default);
        assert!(split.travel_included && split.split_travel);
        assert_eq!(Preset::Reset.parameters(default), ScenarioParameters::default());
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("Split-Travel".parse::<Preset>().unwrap(), Preset::SplitTravel);
        assert_eq!("remove_travel".parse::<Preset>().unwrap(), Preset::RemoveTravel);
        assert_eq!("default".parse::<Preset>().unwrap(), Preset::Reset);
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn unknown_preset_suggests_closest_name() {
        let err = "agressive".parse::<Preset>().unwrap_err();
        match err {
            StoryError::UnknownPreset { name, suggestion } => {
                assert_eq!(name, "agressive");
                assert_eq!(suggestion.as_deref(), Some("aggressive"));
            }
            other => panic!("unexpected error: {other}"),
        }
        let err = "zzz".parse::<Preset>().unwrap_err();
        assert!(matches!(
            err,
            StoryError::UnknownPreset {
                suggestion: None,
                ..
            }
        ));
    }

    #[test]
    fn normalization_never_excludes_and_splits() {
        let params = ScenarioParameters {
            savings_rate: dec!(0.15),
            travel_included: false,
            split_travel: true,
        }
        .normalized();
        assert!(!params.split_travel);
    }

    #[test]
    fn rate_bounds_are_inclusive() {
        assert!(validate_rate(Decimal::ZERO).is_ok());
        assert!(validate_rate(Decimal::ONE).is_ok());
        assert!(validate_rate(dec!(1.01)).is_err());
        assert!(validate_rate(dec!(-0.01)).is_err());
    }
}
