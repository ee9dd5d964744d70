use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 通配選項的顯示值
pub const ALL: &str = "All";

/// 單筆評分；非數值在載入時會被轉成 `Missing`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Value(f64),
    Missing,
}

impl Rating {
    /// 寬鬆解析：空白、非數字或非有限值都視為缺值
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Rating::Value(value),
            _ => Rating::Missing,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Rating::Value(v) => Some(*v),
            Rating::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Rating::Missing)
    }
}

impl From<Option<f64>> for Rating {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => Rating::Value(v),
            _ => Rating::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub make: String,
    pub model: String,
    pub year: NaiveDate,
    pub rating: Rating,
}

impl Record {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: NaiveDate, rating: Rating) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            rating,
        }
    }
}

/// 一個下拉選單的值：`All` 或具體的品牌/車型
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    pub fn only(value: impl Into<String>) -> Self {
        Choice::from(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    pub fn as_option(&self) -> Option<&str> {
        match self {
            Choice::All => None,
            Choice::Only(value) => Some(value),
        }
    }

    /// `All` 匹配任何值
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(selected) => selected == value,
        }
    }
}

impl From<String> for Choice {
    fn from(value: String) -> Self {
        if value == ALL {
            Choice::All
        } else {
            Choice::Only(value)
        }
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Choice::from(value.to_string())
    }
}

impl From<Choice> for String {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::All => ALL.to_string(),
            Choice::Only(value) => value,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_option().unwrap_or(ALL))
    }
}

/// 使用者目前的篩選狀態，只由控制項事件改變，不做持久化
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    #[serde(default)]
    pub make: Choice,
    #[serde(default)]
    pub model: Choice,
}

impl SelectionState {
    pub fn new(make: impl Into<Choice>, model: impl Into<Choice>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
        }
    }

    pub fn matches(&self, make: &str, model: &str) -> bool {
        self.make.matches(make) && self.model.matches(model)
    }
}

/// 控制項變更事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ControlEvent {
    MakeChanged(Choice),
    ModelChanged(Choice),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_parse_coerces_non_numeric() {
        assert_eq!(Rating::parse("8.5"), Rating::Value(8.5));
        assert_eq!(Rating::parse(" 7 "), Rating::Value(7.0));
        assert_eq!(Rating::parse(""), Rating::Missing);
        assert_eq!(Rating::parse("n/a"), Rating::Missing);
        assert_eq!(Rating::parse("NaN"), Rating::Missing);
        assert_eq!(Rating::parse("inf"), Rating::Missing);
    }

    #[test]
    fn test_choice_serde_uses_plain_strings() {
        let state = SelectionState::new("Toyota", ALL);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({"make": "Toyota", "model": "All"}));

        let parsed: SelectionState = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.make, Choice::only("Toyota"));
        assert!(parsed.model.is_all());
    }

    #[test]
    fn test_control_event_wire_format() {
        let event: ControlEvent =
            serde_json::from_str(r#"{"type": "make_changed", "value": "Honda"}"#).unwrap();
        assert_eq!(event, ControlEvent::MakeChanged(Choice::only("Honda")));

        let event: ControlEvent =
            serde_json::from_str(r#"{"type": "model_changed", "value": "All"}"#).unwrap();
        assert_eq!(event, ControlEvent::ModelChanged(Choice::All));
    }

    #[test]
    fn test_selection_matches() {
        let state = SelectionState::new("Toyota", "Corolla");
        assert!(state.matches("Toyota", "Corolla"));
        assert!(!state.matches("Toyota", "Camry"));
        assert!(SelectionState::default().matches("Honda", "Civic"));
    }
}
