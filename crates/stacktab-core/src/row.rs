use crate::breakdown::Breakdown;
use serde::Serialize;
use std::fmt;

/// A single CSV cell after numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Coerce a raw cell: cells that parse as a number (and are non-empty
    /// after trimming) become numbers, everything else stays text.
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Text(raw.to_string());
        }
        match trimmed.parse::<f64>() {
            Ok(n) => CellValue::Number(n),
            Err(_) => CellValue::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One parsed input row: the recognized fields plus pass-through extras
/// in their original column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub item: Option<String>,
    pub total: Option<f64>,
    pub extras: Vec<(String, CellValue)>,
}

/// A row ready for display, with the raw total replaced by its breakdown.
///
/// A missing item renders as `N/A` and a missing breakdown as zeros; both
/// decisions belong to the view layer, so the fields stay optional here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(flatten)]
    pub breakdown: Option<Breakdown>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<(String, CellValue)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells_coerce_to_numbers() {
        assert_eq!(CellValue::coerce("128"), CellValue::Number(128.0));
        assert_eq!(CellValue::coerce(" 3.5 "), CellValue::Number(3.5));
        assert_eq!(CellValue::coerce("-2"), CellValue::Number(-2.0));
    }

    #[test]
    fn non_numeric_cells_stay_text() {
        assert_eq!(
            CellValue::coerce("Oak Planks"),
            CellValue::Text("Oak Planks".to_string())
        );
        assert_eq!(CellValue::coerce(""), CellValue::Text(String::new()));
        assert_eq!(CellValue::coerce("  "), CellValue::Text("  ".to_string()));
    }

    #[test]
    fn whole_numbers_display_without_fraction() {
        assert_eq!(CellValue::Number(64.0).to_string(), "64");
        assert_eq!(CellValue::Number(3.5).to_string(), "3.5");
    }
}
