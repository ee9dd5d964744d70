use crate::core::chart::{build_figure, ChartSettings};
use crate::core::controls::{apply_event, make_options, model_options};
use crate::core::dataset::Dataset;
use crate::domain::figure::ChartFigure;
use crate::domain::model::{ControlEvent, SelectionState};
use serde::Serialize;
use std::sync::Arc;

/// Everything the browser needs to redraw: both controls and the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub state: SelectionState,
    pub make_options: Vec<String>,
    pub model_options: Vec<String>,
    pub figure: ChartFigure,
}

/// 每次控制項變更都同步重算整個畫面，不做部分更新
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    settings: ChartSettings,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, settings: ChartSettings) -> Self {
        Self { dataset, settings }
    }

    pub fn figure(&self, selection: &SelectionState) -> ChartFigure {
        build_figure(&self.dataset, selection, &self.settings)
    }

    pub fn render(&self, state: SelectionState) -> DashboardView {
        let figure = self.figure(&state);
        DashboardView {
            make_options: make_options(&self.dataset),
            model_options: model_options(&self.dataset, &state.make),
            figure,
            state,
        }
    }

    pub fn initial_view(&self) -> DashboardView {
        self.render(SelectionState::default())
    }

    pub fn handle(&self, state: &SelectionState, event: ControlEvent) -> DashboardView {
        tracing::debug!("Control event {:?} on state {:?}", event, state);
        let next = apply_event(state, event);
        self.render(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Choice, Rating, Record, ALL};
    use chrono::NaiveDate;

    fn dashboard() -> Dashboard {
        let year = |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap();
        let dataset = Dataset::from_records(vec![
            Record::new("Toyota", "Corolla", year(2020), Rating::Value(8.0)),
            Record::new("Toyota", "Corolla", year(2021), Rating::Missing),
            Record::new("Toyota", "Camry", year(2020), Rating::Value(9.0)),
            Record::new("Honda", "Civic", year(2020), Rating::Value(7.0)),
        ]);
        Dashboard::new(Arc::new(dataset), ChartSettings::default())
    }

    #[test]
    fn test_initial_view() {
        let view = dashboard().initial_view();
        assert_eq!(view.state, SelectionState::default());
        assert_eq!(view.make_options, vec!["All", "Honda", "Toyota"]);
        assert_eq!(view.model_options, vec!["All", "Camry", "Civic", "Corolla"]);
        assert_eq!(view.figure.data.len(), 3);
    }

    #[test]
    fn test_make_then_model_flow() {
        let dashboard = dashboard();
        let view = dashboard.initial_view();

        let view = dashboard.handle(&view.state, ControlEvent::MakeChanged(Choice::only("Toyota")));
        assert_eq!(view.state, SelectionState::new("Toyota", ALL));
        assert_eq!(view.model_options, vec!["All", "Camry", "Corolla"]);
        assert!(view.figure.title().starts_with("Toyota Ratings Evolution"));

        let view = dashboard.handle(&view.state, ControlEvent::ModelChanged(Choice::only("Corolla")));
        assert_eq!(view.state, SelectionState::new("Toyota", "Corolla"));
        assert_eq!(
            view.figure.title(),
            "Toyota Corolla Ratings Evolution<br>Average Rating: 8.00"
        );

        let view = dashboard.handle(&view.state, ControlEvent::MakeChanged(Choice::All));
        assert_eq!(view.state, SelectionState::default());
        assert_eq!(view.figure.data.len(), 3);
    }
}
