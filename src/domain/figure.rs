//! Typed chart description.
//!
//! The field names follow the Plotly.js figure schema so the browser can pass
//! `figure.data` and `figure.layout` straight to `Plotly.react`.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFigure {
    pub data: Vec<Series>,
    pub layout: Layout,
}

impl ChartFigure {
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.data.iter().find(|s| s.name == name)
    }
}

/// 軌跡可見度；淡化的系列仍留在圖例中
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    LegendOnly,
}

impl Serialize for Visibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Visibility::Visible => serializer.serialize_bool(true),
            Visibility::LegendOnly => serializer.serialize_str("legendonly"),
        }
    }
}

/// One line+marker trace for a single (make, model) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: String,
    pub x: Vec<NaiveDate>,
    pub y: Vec<Option<f64>>,
    pub line: LineStyle,
    pub marker: MarkerStyle,
    pub hovertemplate: &'static str,
    pub text: Vec<String>,
    pub visible: Visibility,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub size: Vec<f64>,
    pub color: String,
    pub line: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub hovermode: &'static str,
    pub legend: Legend,
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
    pub font: Font,
    pub hoverlabel: HoverLabel,
    pub height: u32,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    pub showgrid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<&'static str>,
    pub zeroline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtick: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverLabel {
    pub bgcolor: &'static str,
    pub font_size: u32,
    pub font_family: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_serializes_like_plotly() {
        assert_eq!(serde_json::to_value(Visibility::Visible).unwrap(), serde_json::json!(true));
        assert_eq!(
            serde_json::to_value(Visibility::LegendOnly).unwrap(),
            serde_json::json!("legendonly")
        );
    }

    #[test]
    fn test_axis_skips_unset_fields() {
        let axis = Axis {
            title: AxisTitle { text: "Rating" },
            range: None,
            showgrid: false,
            gridcolor: None,
            zeroline: false,
            dtick: None,
            tickformat: None,
        };
        let json = serde_json::to_value(&axis).unwrap();
        assert!(json.get("range").is_none());
        assert_eq!(json["title"]["text"], "Rating");
    }
}
