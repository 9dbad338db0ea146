//! Field-presence and numeric-range checks shared by every CRUD group.

use crate::error::CoreError;

/// Whether an optional string carries a usable value.
///
/// `None`, empty strings and whitespace-only strings all count as missing.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Whether an optional JSON value carries a usable value (`null` is missing).
pub fn is_present_json(value: Option<&serde_json::Value>) -> bool {
    value.is_some_and(|v| !v.is_null())
}

/// Fail with a single validation error naming every missing field.
///
/// Each entry pairs a wire field name with whether it was supplied.
pub fn require_fields(fields: &[(&str, bool)]) -> Result<(), CoreError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// A supplied value for a required text field must not be blank.
///
/// Used on partial updates, where `None` means "leave unchanged".
pub fn reject_blank(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(CoreError::Validation(format!(
            "{field} must not be empty"
        ))),
        _ => Ok(()),
    }
}

/// Trim optional free text, turning blank input into `None`.
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reject negative integer quantities (capacity, occupancy, minutes...).
pub fn validate_non_negative(field: &str, value: Option<i32>) -> Result<(), CoreError> {
    match value {
        Some(v) if v < 0 => Err(CoreError::Validation(format!(
            "{field} must not be negative, got {v}"
        ))),
        _ => Ok(()),
    }
}

/// Reject negative or non-finite real quantities.
pub fn validate_non_negative_f64(field: &str, value: Option<f64>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.is_finite() => Err(CoreError::Validation(format!(
            "{field} must be a finite number"
        ))),
        Some(v) if v < 0.0 => Err(CoreError::Validation(format!(
            "{field} must not be negative, got {v}"
        ))),
        _ => Ok(()),
    }
}
