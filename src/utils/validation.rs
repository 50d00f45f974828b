use crate::utils::error::{GenError, Result};
use regex::Regex;
use std::sync::LazyLock;

static RX_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]+$").expect("digit pattern is a valid regex"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn is_digits_only(value: &str) -> bool {
    RX_DIGITS.is_match(value)
}

/// Fails unless `value` is a non-empty run of ASCII digits.
pub fn expect_digits_only(value: &str, field_name: &str, row_number: usize) -> Result<()> {
    if !is_digits_only(value) {
        return Err(GenError::FieldValidation {
            field: field_name.to_string(),
            row: row_number,
            value: value.to_string(),
            expectation: "be just digits",
        });
    }
    Ok(())
}

/// Fails when `value` is nothing but digits, which usually means the
/// spreadsheet columns have shifted.
pub fn expect_not_digits_only(value: &str, field_name: &str, row_number: usize) -> Result<()> {
    if is_digits_only(value) {
        return Err(GenError::FieldValidation {
            field: field_name.to_string(),
            row: row_number,
            value: value.to_string(),
            expectation: "have text not just digits",
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GenError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(GenError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GenError::ConfigError {
            message: format!("{}: value cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}
