use crate::core::dataset::Dataset;
use crate::domain::model::{Choice, ControlEvent, SelectionState, ALL};

fn with_all_prefix<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    std::iter::once(ALL)
        .chain(values)
        .map(str::to_string)
        .collect()
}

/// `All` followed by the sorted, deduplicated makes.
pub fn make_options(dataset: &Dataset) -> Vec<String> {
    with_all_prefix(dataset.makes())
}

/// `All` followed by the sorted, deduplicated models of `make`, or of every
/// make when `make` is `All`.
pub fn model_options(dataset: &Dataset, make: &Choice) -> Vec<String> {
    with_all_prefix(dataset.models(make))
}

/// 套用控制項事件；切換品牌時車型一律重設為 `All`
pub fn apply_event(state: &SelectionState, event: ControlEvent) -> SelectionState {
    match event {
        ControlEvent::MakeChanged(make) => SelectionState {
            make,
            model: Choice::All,
        },
        ControlEvent::ModelChanged(model) => SelectionState {
            make: state.make.clone(),
            model,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Rating, Record};
    use chrono::NaiveDate;

    fn dataset() -> Dataset {
        let year = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        Dataset::from_records(vec![
            Record::new("Toyota", "Corolla", year, Rating::Value(8.0)),
            Record::new("Toyota", "Camry", year, Rating::Value(8.5)),
            Record::new("Honda", "Civic", year, Rating::Missing),
            Record::new("Toyota", "Corolla", year, Rating::Value(7.0)),
        ])
    }

    #[test]
    fn test_make_options() {
        assert_eq!(make_options(&dataset()), vec!["All", "Honda", "Toyota"]);
        assert_eq!(make_options(&Dataset::default()), vec!["All"]);
    }

    #[test]
    fn test_model_options_for_make() {
        assert_eq!(
            model_options(&dataset(), &Choice::only("Toyota")),
            vec!["All", "Camry", "Corolla"]
        );
        assert_eq!(
            model_options(&dataset(), &Choice::All),
            vec!["All", "Camry", "Civic", "Corolla"]
        );
        assert_eq!(model_options(&dataset(), &Choice::only("Ford")), vec!["All"]);
    }

    #[test]
    fn test_make_change_resets_model() {
        let state = SelectionState::new("Toyota", "Camry");
        let next = apply_event(&state, ControlEvent::MakeChanged(Choice::only("Honda")));
        assert_eq!(next, SelectionState::new("Honda", ALL));

        // 重新選同一個品牌也會重設
        let next = apply_event(&state, ControlEvent::MakeChanged(Choice::only("Toyota")));
        assert!(next.model.is_all());
    }

    #[test]
    fn test_model_change_keeps_make() {
        let state = SelectionState::new("Toyota", ALL);
        let next = apply_event(&state, ControlEvent::ModelChanged(Choice::only("Corolla")));
        assert_eq!(next, SelectionState::new("Toyota", "Corolla"));
    }
}
