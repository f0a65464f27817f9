//! Field validators for incoming task requests.
//!
//! Each function takes a raw JSON value exactly as it arrived and either
//! produces a typed value or the matching [`IntakeError`]. None of them panic
//! on unexpected shapes.

use crate::domain::model::{Category, ExecMonth};
use crate::utils::error::{IntakeError, Result};
use serde_json::Value;

/// Literal sent by the shortcut menu when the user closes it without choosing.
pub const MENU_CANCELLED: &str = "メニューの終了";

/// Known spellings produced by upstream automations, mapped to canonical labels.
///
/// Lookups happen after trimming, so the trailing-space entries only document
/// variants that have been observed upstream.
pub const CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("Private W", "Private"),
    ("Work", "Works"),
    ("Works ", "Works"),
    ("買い物 ", "買い物"),
    ("処理済(待ち) ", "処理済(待ち)"),
    // full-width brackets
    ("処理済（待ち）", "処理済(待ち)"),
];

/// Whitespace trim that also strips the byte-order mark U+FEFF.
fn trim_input(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub fn validate_title(value: &Value) -> Result<String> {
    match value.as_str().map(trim_input) {
        Some(title) if !title.is_empty() => Ok(title.to_string()),
        _ => Err(IntakeError::InvalidTitle),
    }
}

/// Trims the raw label and resolves it through [`CATEGORY_ALIASES`].
/// Unknown labels pass through unchanged.
pub fn normalize_category_label(raw: &str) -> &str {
    let trimmed = trim_input(raw);
    CATEGORY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == trimmed)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(trimmed)
}

pub fn normalize_category(value: &Value) -> Result<Category> {
    value
        .as_str()
        .map(normalize_category_label)
        .and_then(Category::from_label)
        .ok_or(IntakeError::InvalidCategory)
}

/// Reads a whole number out of a JSON number or numeric string.
///
/// Empty strings, the menu-cancelled sentinel, fractional values and any
/// other JSON type all yield `None`.
pub fn parse_month_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        Value::String(s) => {
            let s = trim_input(s);
            if s.is_empty() || s == MENU_CANCELLED {
                return None;
            }
            s.parse::<f64>().ok().and_then(whole_number)
        }
        _ => None,
    }
}

pub fn parse_exec_month(value: &Value) -> Result<ExecMonth> {
    parse_month_number(value)
        .and_then(ExecMonth::new)
        .ok_or(IntakeError::InvalidExecMonth)
}

fn whole_number(n: f64) -> Option<i64> {
    // i64::MAX is not exactly representable, so bound below 2^63.
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9.0e18 {
        Some(n as i64)
    } else {
        None
    }
}
