use crate::core::dataset::{Dataset, Group};
use crate::core::stats::{best_and_worst, model_averages, selection_mean};
use crate::domain::figure::{
    Axis, AxisTitle, ChartFigure, Font, HoverLabel, Layout, Legend, LineStyle, MarkerStyle, Series,
    Title, Visibility,
};
use crate::domain::model::{Choice, SelectionState};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Car Ratings Evolution Over Time";

/// 缺值評分在縮放前以此值填補
const MISSING_RATING_FILL: f64 = 5.0;
const MARKER_SCALE: f64 = 3.0;

pub const DEFAULT_PALETTE: [&str; 15] = [
    "#003e8a", "#0049a3", "#0060d6", "#006cf0", "#0a78ff", "#3d94ff", "#70b0ff", "#a3cdff",
    "#6e6e6e", "#7a7a7a", "#878787", "#949494", "#c7c7c7", "#d4d4d4", "#e0e0e0",
];

/// Presentation knobs that can be overridden from the `[chart]` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub palette: Vec<String>,
    pub y_range: [f64; 2],
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            y_range: [5.0, 10.0],
            width: 1400,
            height: 700,
        }
    }
}

impl ChartSettings {
    /// 依分組索引循環取色
    pub fn color_for(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
        }
        &self.palette[index % self.palette.len()]
    }
}

pub fn marker_size(rating: Option<f64>) -> f64 {
    rating.unwrap_or(MISSING_RATING_FILL) * MARKER_SCALE
}

fn format_mean(mean: Option<f64>, precision: usize) -> String {
    match mean {
        Some(value) => format!("{:.*}", precision, value),
        None => "n/a".to_string(),
    }
}

/// Groups outside the selected make or model stay in the chart but are only
/// shown in the legend.
pub fn visibility_for(group: &Group, selection: &SelectionState) -> Visibility {
    if selection.matches(&group.make, &group.model) {
        Visibility::Visible
    } else {
        Visibility::LegendOnly
    }
}

pub fn chart_title(dataset: &Dataset, selection: &SelectionState) -> String {
    let make = match &selection.make {
        Choice::All => return DEFAULT_TITLE.to_string(),
        Choice::Only(make) => make,
    };

    if let Choice::Only(model) = &selection.model {
        let mean = selection_mean(dataset, selection);
        return format!(
            "{} {} Ratings Evolution<br>Average Rating: {}",
            make,
            model,
            format_mean(mean, 2)
        );
    }

    let make_mean = selection_mean(dataset, &SelectionState::new(make.as_str(), Choice::All));
    let averages = model_averages(dataset, make);

    match best_and_worst(&averages) {
        Some(extremes) if averages.len() > 1 => format!(
            "{} Ratings Evolution<br>Average: {} | Best: {} ({:.1}) | Worst: {} ({:.1})",
            make,
            format_mean(make_mean, 2),
            extremes.best.model,
            extremes.best.mean,
            extremes.worst.model,
            extremes.worst.mean
        ),
        _ => format!(
            "{} Ratings Evolution<br>Average Rating: {}",
            make,
            format_mean(make_mean, 2)
        ),
    }
}

fn build_series(
    dataset: &Dataset,
    group: &Group,
    index: usize,
    selection: &SelectionState,
    settings: &ChartSettings,
) -> Series {
    let color = settings.color_for(index).to_string();
    let label = group.label();

    let mut x = Vec::with_capacity(group.len());
    let mut y = Vec::with_capacity(group.len());
    let mut sizes = Vec::with_capacity(group.len());
    let mut text = Vec::with_capacity(group.len());

    for record in dataset.group_records(group) {
        let rating = record.rating.value();
        x.push(record.year);
        y.push(rating);
        sizes.push(marker_size(rating));
        text.push(format!("{}: {}", label, format_mean(rating, 1)));
    }

    Series {
        kind: "scatter",
        mode: "lines+markers",
        name: label,
        x,
        y,
        line: LineStyle {
            color: color.clone(),
            width: 2.0,
        },
        marker: MarkerStyle {
            size: sizes,
            color,
            line: LineStyle {
                color: "white".to_string(),
                width: 1.0,
            },
        },
        hovertemplate: "%{text}<extra></extra>",
        text,
        visible: visibility_for(group, selection),
        showlegend: true,
    }
}

fn build_layout(title: String, settings: &ChartSettings) -> Layout {
    Layout {
        title: Title {
            text: title,
            font: Font {
                family: None,
                size: Some(24),
            },
            x: 0.5,
            y: 0.95,
            xanchor: "center",
            yanchor: "top",
        },
        xaxis: Axis {
            title: AxisTitle { text: "Year" },
            range: None,
            showgrid: true,
            gridcolor: Some("#eee"),
            zeroline: false,
            dtick: Some("M12"),
            tickformat: Some("%Y"),
        },
        yaxis: Axis {
            title: AxisTitle { text: "Rating" },
            range: Some(settings.y_range),
            showgrid: false,
            gridcolor: None,
            zeroline: false,
            dtick: None,
            tickformat: None,
        },
        hovermode: "x unified",
        legend: Legend {
            title: AxisTitle {
                text: "Make - Model",
            },
        },
        plot_bgcolor: "white",
        paper_bgcolor: "white",
        font: Font {
            family: Some("Arial, sans-serif"),
            size: None,
        },
        hoverlabel: HoverLabel {
            bgcolor: "white",
            font_size: 12,
            font_family: "Arial",
        },
        height: settings.height,
        width: settings.width,
    }
}

/// Builds the full chart description for a selection. Every (make, model)
/// group produces exactly one series whatever the selection is.
pub fn build_figure(
    dataset: &Dataset,
    selection: &SelectionState,
    settings: &ChartSettings,
) -> ChartFigure {
    let data = dataset
        .groups()
        .iter()
        .enumerate()
        .map(|(index, group)| build_series(dataset, group, index, selection, settings))
        .collect();

    ChartFigure {
        data,
        layout: build_layout(chart_title(dataset, selection), settings),
    }
}
