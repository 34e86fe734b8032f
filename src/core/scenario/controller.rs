use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::{
    config::StoryConfig,
    core::services::{
        CounterfactualService, EventLocator, ProjectionService, SeriesService, SpendingService,
    },
    domain::{BalancePoint, MonthlySpending, SavingsPoint, Transaction},
    errors::Result,
    ledger::Ledger,
};

use super::types::{
    validate_rate, Counterfactual, EventAnnotation, Preset, ScenarioParameters, ScenarioSnapshot,
    ScenarioWarning,
};

/// Composition root between the ledger and the view layer.
///
/// The base series are derived once from the ledger. Every transition
/// rebuilds the projection and the counterfactual from scratch and replaces
/// the snapshot; a failed transition leaves parameters and snapshot untouched.
pub struct ScenarioController {
    ledger: Ledger,
    config: StoryConfig,
    checking: Vec<Transaction>,
    balance: Arc<[BalancePoint]>,
    actual_savings: Arc<[SavingsPoint]>,
    spending: Arc<[MonthlySpending]>,
    snapshot: ScenarioSnapshot,
}

impl ScenarioController {
    pub fn new(ledger: Ledger, config: StoryConfig) -> Result<Self> {
        config.validate()?;

        let checking = ledger.for_account(&config.checking_account);
        let balance: Arc<[BalancePoint]> =
            SeriesService::balance_series(&checking, config.starting_balance)?.into();
        let deposits = ledger.savings_deposits(&config.savings_account, &config.savings_category);
        let actual_savings: Arc<[SavingsPoint]> =
            SeriesService::cumulative_series(&deposits)?.into();
        let spending: Arc<[MonthlySpending]> =
            SpendingService::monthly_breakdown(&checking)?.into();

        info!(
            transactions = ledger.transaction_count(),
            checking = checking.len(),
            deposits = deposits.len(),
            "scenario base series ready"
        );

        let parameters = ScenarioParameters::new(config.default_savings_rate);
        let snapshot = ScenarioSnapshot {
            revision: 0,
            parameters,
            balance: balance.clone(),
            counterfactual: None,
            projection: Vec::new(),
            actual_savings: actual_savings.clone(),
            spending: spending.clone(),
            annotation: None,
            warnings: Vec::new(),
        };
        let mut controller = Self {
            ledger,
            config,
            checking,
            balance,
            actual_savings,
            spending,
            snapshot,
        };
        controller.snapshot = controller.recompute(parameters, 0)?;
        Ok(controller)
    }

    pub fn parameters(&self) -> ScenarioParameters {
        self.snapshot.parameters
    }

    pub fn snapshot(&self) -> &ScenarioSnapshot {
        &self.snapshot
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    /// Changes only the savings rate; the travel flags keep their values.
    pub fn set_savings_rate(&mut self, rate: Decimal) -> Result<&ScenarioSnapshot> {
        let rate = validate_rate(rate)?;
        let next = ScenarioParameters {
            savings_rate: rate,
            ..self.parameters()
        };
        self.transition(next)
    }

    /// Looks up a preset by name and applies it.
    pub fn apply_preset(&mut self, name: &str) -> Result<&ScenarioSnapshot> {
        let preset: Preset = name.parse()?;
        self.apply(preset)
    }

    /// Replaces all three parameters with the preset's values.
    pub fn apply(&mut self, preset: Preset) -> Result<&ScenarioSnapshot> {
        info!(preset = preset.name(), "applying scenario preset");
        let next = preset.parameters(self.config.default_savings_rate);
        self.transition(next)
    }

    /// Flips whether the event is included. Always clears `split_travel`.
    pub fn toggle_travel_included(&mut self) -> Result<&ScenarioSnapshot> {
        let current = self.parameters();
        let next = ScenarioParameters {
            travel_included: !current.travel_included,
            split_travel: false,
            ..current
        };
        self.transition(next)
    }

    fn transition(&mut self, next: ScenarioParameters) -> Result<&ScenarioSnapshot> {
        let next = next.normalized();
        next.validate()?;
        let revision = self.snapshot.revision + 1;
        let snapshot = self.recompute(next, revision)?;
        info!(
            revision,
            savings_rate = %next.savings_rate,
            travel_included = next.travel_included,
            split_travel = next.split_travel,
            "scenario recomputed"
        );
        self.snapshot = snapshot;
        Ok(&self.snapshot)
    }

    fn recompute(&self, parameters: ScenarioParameters, revision: u64) -> Result<ScenarioSnapshot> {
        let config = &self.config;
        let event = &config.event;
        let start = config.starting_balance;

        let projection = ProjectionService::project_savings_on_day(
            parameters.savings_rate,
            config.monthly_income,
            config.projection_year,
            config.projection_day,
        )?;

        let mut warnings = Vec::new();
        let (counterfactual, displayed_transactions) = if !parameters.travel_included {
            let outcome = CounterfactualService::excluding_event(
                &self.checking,
                start,
                &event.category,
                event.date,
            )?;
            (
                Some(Counterfactual::Excluded(outcome.series)),
                outcome.transactions,
            )
        } else if parameters.split_travel {
            let outcome = CounterfactualService::split_event(
                &self.checking,
                start,
                &config.checking_account,
                &event.category,
                event.date,
                event.amount,
                event.split_dates,
            )?;
            if !outcome.matched {
                let warning = ScenarioWarning::SplitUnmatched {
                    category: event.category.clone(),
                    date: event.date,
                    amount: event.amount,
                };
                warn!(%warning, "scenario input has drifted from the ledger");
                warnings.push(warning);
            }
            (
                Some(Counterfactual::Split(outcome.series)),
                outcome.transactions,
            )
        } else {
            (None, self.checking.clone())
        };

        let displayed: &[BalancePoint] = counterfactual
            .as_ref()
            .map(Counterfactual::series)
            .unwrap_or(&self.balance[..]);
        let lookup = EventLocator::locate(
            &displayed_transactions,
            start,
            &event.category,
            event.date,
            displayed,
        )?;
        let annotation = lookup.point().is_some().then(|| EventAnnotation {
            category: event.category.clone(),
            date: event.date,
            amount: event.amount,
            lookup,
            on_counterfactual: counterfactual.is_some(),
        });

        Ok(ScenarioSnapshot {
            revision,
            parameters,
            balance: self.balance.clone(),
            counterfactual,
            projection,
            actual_savings: self.actual_savings.clone(),
            spending: self.spending.clone(),
            annotation,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::EventLookup;
    use crate::domain::Account;
    use crate::errors::StoryError;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn ledger() -> Ledger {
        Ledger::new(vec![
            Transaction::new(date(4, 1), Account::Checking, "Salary", dec!(4500)),
            Transaction::new(date(4, 15), Account::Checking, "Travel", dec!(-1200)),
            Transaction::new(date(4, 20), Account::Checking, "Groceries", dec!(-200)),
            Transaction::new(date(4, 2), Account::Savings, "Savings Balance", dec!(675)),
            Transaction::new(date(5, 2), Account::Savings, "Savings Balance", dec!(675)),
        ])
    }

    fn controller() -> ScenarioController {
        ScenarioController::new(ledger(), StoryConfig::default()).unwrap()
    }

    #[test]
    fn starts_from_default_parameters_with_exact_annotation() {
        let controller = controller();
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.revision, 0);
        assert_eq!(snapshot.parameters, ScenarioParameters::default());
        assert_eq!(snapshot.balance.len(), 3);
        assert_eq!(snapshot.actual_savings.len(), 2);
        assert!(snapshot.counterfactual.is_none());
        let annotation = snapshot.annotation.as_ref().unwrap();
        assert_eq!(
            annotation.lookup,
            EventLookup::Exact(BalancePoint {
                date: date(4, 15),
                balance: dec!(8300),
            })
        );
        assert!(!annotation.on_counterfactual);
    }

    #[test]
    fn rate_change_only_touches_projection() {
        let mut controller = controller();
        let before = controller.snapshot().clone();
        let after = controller.set_savings_rate(dec!(0.20)).unwrap();
        assert_eq!(after.revision, 1);
        assert_eq!(after.projection[0].savings, dec!(900));
        assert!(Arc::ptr_eq(&before.balance, &after.balance));
        assert_eq!(after.parameters.travel_included, before.parameters.travel_included);
    }

    #[test]
    fn invalid_rate_leaves_state_untouched() {
        let mut controller = controller();
        let err = controller.set_savings_rate(dec!(1.2)).unwrap_err();
        assert!(matches!(err, StoryError::InvalidParameter { .. }));
        assert_eq!(controller.snapshot().revision, 0);
        assert_eq!(controller.parameters().savings_rate, dec!(0.15));
    }

    #[test]
    fn unknown_preset_is_rejected_without_transition() {
        let mut controller = controller();
        assert!(controller.apply_preset("yolo").is_err());
        assert_eq!(controller.snapshot().revision, 0);
    }

    #[test]
    fn remove_travel_builds_excluded_series_and_falls_back() {
        let mut controller = controller();
        let snapshot = controller.apply(Preset::RemoveTravel).unwrap();
        match &snapshot.counterfactual {
            Some(Counterfactual::Excluded(series)) => assert_eq!(series.len(), 2),
            other => panic!("unexpected counterfactual: {other:?}"),
        }
        let annotation = snapshot.annotation.as_ref().unwrap();
        assert!(!annotation.lookup.is_exact());
        assert!(annotation.on_counterfactual);
    }

    #[test]
    fn split_travel_builds_split_series() {
        let mut controller = controller();
        let snapshot = controller.apply_preset("split-travel").unwrap();
        match &snapshot.counterfactual {
            Some(Counterfactual::Split(series)) => assert_eq!(series.len(), 4),
            other => panic!("unexpected counterfactual: {other:?}"),
        }
        assert!(snapshot.warnings.is_empty());
        let annotation = snapshot.annotation.as_ref().unwrap();
        // The first half lands on the original date.
        assert_eq!(
            annotation.lookup,
            EventLookup::Exact(BalancePoint {
                date: date(4, 15),
                balance: dec!(8900),
            })
        );
    }

    #[test]
    fn toggling_after_split_clears_split() {
        let mut controller = controller();
        controller.apply(Preset::SplitTravel).unwrap();
        let params = controller.toggle_travel_included().unwrap().parameters;
        assert!(!params.travel_included);
        assert!(!params.split_travel);
        let params = controller.toggle_travel_included().unwrap().parameters;
        assert!(params.travel_included);
        assert!(!params.split_travel);
    }

    #[test]
    fn unmatched_split_is_reported_as_warning() {
        let mut config = StoryConfig::default();
        config.event.amount = dec!(-999);
        let mut controller = ScenarioController::new(ledger(), config).unwrap();
        let snapshot = controller.apply(Preset::SplitTravel).unwrap();
        assert_eq!(snapshot.warnings.len(), 1);
        assert!(matches!(
            snapshot.warnings[0],
            ScenarioWarning::SplitUnmatched { .. }
        ));
    }

    #[test]
    fn presets_are_idempotent() {
        let mut controller = controller();
        let first = controller.apply(Preset::Aggressive).unwrap().clone();
        let second = controller.apply(Preset::Aggressive).unwrap().clone();
        assert_eq!(first.parameters, second.parameters);
        assert_eq!(first.projection, second.projection);
        assert_eq!(first.counterfactual, second.counterfactual);
        assert_eq!(second.revision, first.revision + 1);
    }

    #[test]
    fn empty_ledger_has_no_annotation() {
        let controller = ScenarioController::new(Ledger::default(), StoryConfig::default()).unwrap();
        let snapshot = controller.snapshot();
        assert!(snapshot.balance.is_empty());
        assert!(snapshot.annotation.is_none());
        assert_eq!(snapshot.projection.len(), 12);
    }
}
