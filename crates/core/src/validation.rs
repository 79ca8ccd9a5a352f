//! Field validation for incoming records.
//!
//! Each function returns [`CoreError::Validation`] with a message suitable
//! for the HTTP response body.

use crate::error::CoreError;

/// Validate a gear `type` on update: it must not contain any digit.
///
/// Only decimal digits are rejected; letters, spaces and punctuation pass.
pub fn validate_gear_type(gear_type: &str) -> Result<(), CoreError> {
    if gear_type.chars().any(|c| c.is_ascii_digit()) {
        return Err(CoreError::Validation(format!(
            "Gear type must not contain digits (got '{gear_type}')"
        )));
    }
    Ok(())
}

/// Validate that a gear weight is not negative.
pub fn validate_weight(weight_in_grams: i32) -> Result<(), CoreError> {
    if weight_in_grams < 0 {
        return Err(CoreError::Validation(format!(
            "weightInGrams must not be negative (got {weight_in_grams})"
        )));
    }
    Ok(())
}

/// Parse a `birthYear` query value into an integer year.
pub fn parse_birth_year(raw: &str) -> Result<i32, CoreError> {
    raw.trim().parse::<i32>().map_err(|_| {
        CoreError::Validation(format!("birthYear must be an integer (got '{raw}')"))
    })
}
