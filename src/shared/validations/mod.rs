//! Field rules the `validator` derive cannot express on its own.
//!
//! Each rule returns the parsed value or a [`ValidationError`] carrying a
//! caller-facing message, so application services can fold the failures
//! into the same [`ValidationErrors`] set produced by `Validate::validate`.

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

/// 24-hour `HH:MM`.
static HHMM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("static regex"));

/// Build a [`ValidationError`] with a fixed message.
pub fn field_error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Start from the derive's result and keep collecting.
///
/// `mistyped` holds fields whose JSON value had the wrong type. Their
/// type error replaces whatever the derive reported for the same field,
/// since the value never reached it.
pub fn collect(
    result: Result<(), ValidationErrors>,
    mistyped: &ValidationErrors,
) -> ValidationErrors {
    let mut errors = result.err().unwrap_or_else(ValidationErrors::new);
    for (field, kind) in mistyped.errors() {
        errors.errors_mut().insert(*field, kind.clone());
    }
    errors
}

/// `YYYY-MM-DD`, strictly after `today`.
pub fn booking_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        field_error(
            "date",
            "The appointment date field must be a valid date.",
        )
    })?;

    if date <= today {
        return Err(field_error(
            "after_today",
            "The appointment date field must be a date after today.",
        ));
    }
    Ok(date)
}

/// 24-hour `HH:MM` with a leading zero.
pub fn booking_time(raw: &str) -> Result<NaiveTime, ValidationError> {
    let invalid = || {
        field_error(
            "date_format",
            "The appointment time field must match the format H:i.",
        )
    };

    if !HHMM.is_match(raw) {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| invalid())
}

/// Non-negative, rounded to cents.
pub fn price(value: Decimal) -> Result<Decimal, ValidationError> {
    if value < Decimal::ZERO {
        return Err(field_error(
            "min",
            "The price field must be at least 0.",
        ));
    }
    Ok(value.round_dp(2))
}

/// Positive number of minutes.
pub fn duration(value: i32) -> Result<i32, ValidationError> {
    if value < 1 {
        return Err(field_error(
            "min",
            "The duration field must be at least 1.",
        ));
    }
    Ok(value)
}

/// At most `max` characters (not bytes).
pub fn max_chars(value: &str, max: usize, message: &'static str) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(field_error("max", message));
    }
    Ok(())
}

/// Push `error` under `field` and yield `None`, or pass the value through.
pub fn record<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    result: Result<T, ValidationError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.add(field, error);
            None
        }
    }
}
