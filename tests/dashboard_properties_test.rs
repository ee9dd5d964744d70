use car_ratings::core::controls::{apply_event, model_options};
use car_ratings::core::dashboard::Dashboard;
use car_ratings::core::stats::selection_mean;
use car_ratings::core::{Choice, ControlEvent, Rating, Record, SelectionState};
use car_ratings::{ChartSettings, Dataset};
use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;

const MAKES: [&str; 4] = ["Toyota", "Honda", "Ford", "All Road"];
const MODELS: [&str; 5] = ["Corolla", "Civic", "Focus", "Camry", "Accord"];

fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    proptest::collection::vec(
        (
            0..MAKES.len(),
            0..MODELS.len(),
            1990i32..2030,
            proptest::option::of(0.0f64..10.0),
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(make, model, year, rating)| {
                Record::new(
                    MAKES[make],
                    MODELS[model],
                    NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
                    Rating::from(rating),
                )
            })
            .collect()
    })
}

fn choice_strategy() -> impl Strategy<Value = Choice> {
    prop_oneof![
        Just(Choice::All),
        (0..MAKES.len()).prop_map(|i| Choice::only(MAKES[i])),
        (0..MODELS.len()).prop_map(|i| Choice::only(MODELS[i])),
    ]
}

proptest! {
    #[test]
    fn model_options_are_sorted_unique_and_prefixed(
        records in records_strategy(),
        make in choice_strategy(),
    ) {
        let expected: Vec<String> = records
            .iter()
            .filter(|r| make.matches(&r.make))
            .map(|r| r.model.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let dataset = Dataset::from_records(records);
        let options = model_options(&dataset, &make);

        prop_assert_eq!(options[0].as_str(), "All");
        let rest = &options[1..];
        for pair in rest.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert_eq!(rest, expected.as_slice());
    }

    #[test]
    fn make_change_resets_model(
        make in choice_strategy(),
        model in choice_strategy(),
        next_make in choice_strategy(),
    ) {
        let state = SelectionState { make, model };
        let next = apply_event(&state, ControlEvent::MakeChanged(next_make.clone()));
        prop_assert_eq!(next.make, next_make);
        prop_assert!(next.model.is_all());
    }

    #[test]
    fn mean_matches_non_missing_ratings(
        records in records_strategy(),
        make in choice_strategy(),
        model in choice_strategy(),
    ) {
        let selection = SelectionState { make, model };
        let expected: Vec<f64> = records
            .iter()
            .filter(|r| selection.matches(&r.make, &r.model))
            .filter_map(|r| r.rating.value())
            .collect();

        let dataset = Dataset::from_records(records);
        let mean = selection_mean(&dataset, &selection);

        if expected.is_empty() {
            prop_assert!(mean.is_none());
        } else {
            let want = expected.iter().sum::<f64>() / expected.len() as f64;
            prop_assert!((mean.unwrap() - want).abs() < 1e-9);
        }
    }

    #[test]
    fn series_count_ignores_filter(
        records in records_strategy(),
        make in choice_strategy(),
        model in choice_strategy(),
    ) {
        let pairs: BTreeSet<(String, String)> = records
            .iter()
            .map(|r| (r.make.clone(), r.model.clone()))
            .collect();

        let dashboard = Dashboard::new(Arc::new(Dataset::from_records(records)), ChartSettings::default());
        let figure = dashboard.figure(&SelectionState { make, model });

        prop_assert_eq!(figure.data.len(), pairs.len());
    }
}
