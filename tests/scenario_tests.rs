mod common;

use common::{date, sample_transactions, SAMPLE_LEDGER};
use finance_story::{
    config::StoryConfig,
    core::scenario::ScenarioWarning,
    core::services::{
        CounterfactualService, EventLocator, EventLookup, ProjectionService, SeriesService,
    },
    domain::round2,
    storage::CsvLedgerSource,
    Account, Counterfactual, Preset, ScenarioController, StoryError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn controller() -> ScenarioController {
    ScenarioController::new(SAMPLE_LEDGER.clone(), StoryConfig::default()).expect("controller")
}

#[test]
fn balance_fold_matches_running_total() {
    let checking = SAMPLE_LEDGER.for_account(&Account::Checking);
    let series = SeriesService::balance_series(&checking, dec!(5000)).unwrap();
    assert_eq!(series.len(), checking.len());

    let mut previous = dec!(5000);
    for (point, txn) in series.iter().zip(checking.iter()) {
        assert_eq!(point.balance, round2(previous + txn.amount));
        previous = point.balance;
    }
}

#[test]
fn shuffled_ledger_produces_identical_series() {
    let original = sample_transactions();
    // Checking entries in the sample never share a date.
    let mut shuffled = Vec::with_capacity(original.len());
    let (mut lo, mut hi) = (0, original.len());
    while lo < hi {
        hi -= 1;
        shuffled.push(original[hi].clone());
        if lo < hi {
            shuffled.push(original[lo].clone());
            lo += 1;
        }
    }
    let only_checking = |txns: &[finance_story::Transaction]| {
        txns.iter()
            .filter(|txn| txn.account == Account::Checking)
            .cloned()
            .collect::<Vec<_>>()
    };
    assert_eq!(
        SeriesService::balance_series(&only_checking(&original), dec!(5000)).unwrap(),
        SeriesService::balance_series(&only_checking(&shuffled), dec!(5000)).unwrap()
    );
}

#[test]
fn excluding_missing_event_is_identity() {
    let checking = SAMPLE_LEDGER.for_account(&Account::Checking);
    let base = SeriesService::balance_series(&checking, dec!(5000)).unwrap();
    let excluded =
        CounterfactualService::excluding_event(&checking, dec!(5000), "Travel", date(7, 4))
            .unwrap();
    assert_eq!(base, excluded.series);
}

#[test]
fn split_of_travel_conserves_amount() {
    let checking = SAMPLE_LEDGER.for_account(&Account::Checking);
    let outcome = CounterfactualService::split_event(
        &checking,
        dec!(5000),
        &Account::Checking,
        "Travel",
        date(4, 15),
        dec!(-1200),
        [date(4, 15), date(5, 15)],
    )
    .unwrap();
    assert!(outcome.matched);
    let total: Decimal = outcome.synthetic.iter().map(|txn| txn.amount).sum();
    assert_eq!(total, dec!(-1200));
    assert!(outcome.synthetic.iter().all(|txn| txn.amount == dec!(-600)));
}

#[test]
fn projection_for_reference_household() {
    let series = ProjectionService::project_savings(dec!(0.15), dec!(4500), 2024).unwrap();
    assert_eq!(series.len(), 12);
    assert_eq!(
        series[11].savings,
        Decimal::from(12) * round2(dec!(4500) * dec!(0.15))
    );
    for (idx, point) in series.iter().enumerate() {
        assert_eq!(point.date, date(idx as u32 + 1, 2));
    }
}

#[test]
fn locator_is_exact_then_falls_back() {
    let checking = SAMPLE_LEDGER.for_account(&Account::Checking);
    let base = SeriesService::balance_series(&checking, dec!(5000)).unwrap();
    let lookup =
        EventLocator::locate(&checking, dec!(5000), "Travel", date(4, 15), &base).unwrap();
    let EventLookup::Exact(point) = lookup else {
        panic!("expected exact match, got {lookup:?}");
    };
    assert_eq!(point.date, date(4, 15));
    let manual = base
        .iter()
        .find(|p| p.date == date(4, 15))
        .expect("travel point");
    assert_eq!(point, *manual);

    let without: Vec<_> = checking
        .iter()
        .filter(|txn| txn.category != "Travel")
        .cloned()
        .collect();
    let series = SeriesService::balance_series(&without, dec!(5000)).unwrap();
    let lookup =
        EventLocator::locate(&without, dec!(5000), "Travel", date(4, 15), &series).unwrap();
    assert!(matches!(lookup, EventLookup::Approximate(p) if p.date == date(4, 8) || p.date == date(4, 22)));
}

#[test]
fn split_preset_then_toggle_never_leaves_both_flags_set() {
    let mut controller = controller();
    controller.apply_preset("split-travel").unwrap();
    assert!(controller.parameters().split_travel);
    let params = controller.toggle_travel_included().unwrap().parameters;
    assert!(!params.split_travel);
    assert!(!params.travel_included);
}

#[test]
fn every_preset_sets_all_three_fields() {
    let mut controller = controller();
    controller.set_savings_rate(dec!(0.4)).unwrap();
    controller.toggle_travel_included().unwrap();
    for preset in Preset::ALL {
        let params = controller.apply(preset).unwrap().parameters;
        assert_eq!(params, preset.parameters(dec!(0.15)));
    }
}

#[test]
fn counterfactual_follows_flags() {
    let mut controller = controller();
    assert!(controller.snapshot().counterfactual.is_none());

    let snapshot = controller.apply(Preset::RemoveTravel).unwrap();
    let Some(Counterfactual::Excluded(series)) = &snapshot.counterfactual else {
        panic!("expected exclusion");
    };
    assert_eq!(series.len(), snapshot.balance.len() - 1);
    let last_gap = series.last().unwrap().balance - snapshot.balance.last().unwrap().balance;
    assert_eq!(last_gap, dec!(1200));

    let snapshot = controller.apply(Preset::SplitTravel).unwrap();
    let Some(Counterfactual::Split(series)) = &snapshot.counterfactual else {
        panic!("expected split");
    };
    assert_eq!(series.len(), snapshot.balance.len() + 1);
    assert_eq!(series.last(), snapshot.balance.last());

    let snapshot = controller.apply(Preset::Reset).unwrap();
    assert!(snapshot.counterfactual.is_none());
}

#[test]
fn actual_savings_come_from_savings_deposits() {
    let controller = controller();
    let savings = &controller.snapshot().actual_savings;
    assert_eq!(savings.len(), 12);
    assert_eq!(savings[11].savings, dec!(7200));
}

#[test]
fn rate_validation_names_the_parameter() {
    let mut controller = controller();
    match controller.set_savings_rate(dec!(-0.1)) {
        Err(StoryError::InvalidParameter { parameter, .. }) => {
            assert_eq!(parameter, "savings_rate")
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn drifted_split_surfaces_warning() {
    let mut config = StoryConfig::default();
    config.event.date = date(4, 16);
    let mut controller = ScenarioController::new(SAMPLE_LEDGER.clone(), config).unwrap();
    let snapshot = controller.apply(Preset::SplitTravel).unwrap();
    assert_eq!(
        snapshot.warnings,
        vec![ScenarioWarning::SplitUnmatched {
            category: "Travel".into(),
            date: date(4, 16),
            amount: dec!(-1200),
        }]
    );
}

#[test]
fn ledger_beyond_decimal_range_is_rejected() {
    let huge = "79228162514264337593543950335";
    let csv = format!(
        "date,account,category,type,amount,description\n\
         2024-01-01,Checking,Windfall,Income,{huge},\n\
         2024-01-02,Checking,Windfall,Income,{huge},\n"
    );
    let ledger = CsvLedgerSource::parse_reader(csv.as_bytes()).unwrap();
    match ScenarioController::new(ledger, StoryConfig::default()) {
        Err(StoryError::Overflow { component, date: at }) => {
            assert_eq!(component, "balance series");
            assert_eq!(at, date(1, 1));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("overflowing ledger was accepted"),
    }
}
