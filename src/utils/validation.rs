use crate::utils::error::{DashboardError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> DashboardError {
    DashboardError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_positive_number<T>(field_name: &str, value: T, min_value: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

/// 區間必須是有限值且下界嚴格小於上界
pub fn validate_range(field_name: &str, range: [f64; 2]) -> Result<()> {
    let [min, max] = range;
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(invalid(
            field_name,
            format!("[{}, {}]", min, max),
            "Range must be two finite numbers with min < max",
        ));
    }
    Ok(())
}

pub fn validate_hex_color(field_name: &str, color: &str) -> Result<()> {
    static HEX: OnceLock<Regex> = OnceLock::new();
    let re = HEX.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex colour regex"));

    if !re.is_match(color) {
        return Err(invalid(field_name, color, "Colour must look like #rrggbb"));
    }
    Ok(())
}

pub fn validate_palette(field_name: &str, palette: &[String]) -> Result<()> {
    if palette.is_empty() {
        return Err(invalid(field_name, "[]", "Palette needs at least one colour"));
    }
    for color in palette {
        validate_hex_color(field_name, color)?;
    }
    Ok(())
}
