// ✅ Input Validator - field-level validation for the birth date form
//
// Takes the three raw strings exactly as typed and returns a per-field
// error report. Always returns normally: malformed text is a field error,
// never a fault. "Today" is threaded in explicitly so the rules are
// deterministic and testable without touching the wall clock.

use crate::date::CalendarDate;
use serde::Serialize;

// ============================================================================
// ERROR MESSAGES
// ============================================================================

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_INVALID_DAY: &str = "Must be a valid day";
pub const MSG_INVALID_MONTH: &str = "Must be a valid month";
pub const MSG_INVALID_DATE: &str = "Must be a valid date";
pub const MSG_FUTURE_YEAR: &str = "Must be in the past";

// ============================================================================
// RAW INPUT
// ============================================================================

/// The three form fields exactly as typed. Each may be empty or malformed.
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl RawInput {
    pub fn new(day: &str, month: &str, year: &str) -> Self {
        RawInput {
            day: day.to_string(),
            month: month.to_string(),
            year: year.to_string(),
        }
    }
}

// ============================================================================
// FIELD ERRORS
// ============================================================================

/// Per-field validation report. A field carries at most one message, and
/// fields fail independently. All `None` means the inputs form a valid,
/// past calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<&'static str>,
}

impl FieldErrors {
    /// True when no field produced a message.
    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Outcome of parsing one field's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parsed {
    Empty,
    /// Non-empty text that is not a decimal integer.
    Invalid,
    Value(i64),
}

/// Explicit parse step: empty, a decimal integer, or invalid. No implicit
/// coercion fallthrough.
fn parse_field(text: &str) -> Parsed {
    let text = text.trim();
    if text.is_empty() {
        return Parsed::Empty;
    }
    match text.parse::<i64>() {
        Ok(value) => Parsed::Value(value),
        Err(_) => Parsed::Invalid,
    }
}

/// Consolidated calendar-validity predicate: the triple must construct a
/// real date without overflowing into a neighboring month.
fn is_real_date(day: i64, month: i64, year: i64) -> bool {
    match (
        u32::try_from(day),
        u32::try_from(month),
        i32::try_from(year),
    ) {
        (Ok(d), Ok(m), Ok(y)) => CalendarDate::new(y, m, d).is_some(),
        _ => false,
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validate the three raw fields against `today`.
///
/// Rules per field, first applicable message wins:
/// - day:   required → 1..=31 → (with month and year present) real date
/// - month: required → 1..=12
/// - year:  required → not after today's year (no lower bound)
///
/// Non-numeric text gets the field's own invalid-value message.
pub fn validate(input: &RawInput, today: CalendarDate) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let day = parse_field(&input.day);
    let month = parse_field(&input.month);
    let year = parse_field(&input.year);

    // Day: required, in range, and - when the other fields are usable -
    // part of a real calendar date.
    errors.day = match day {
        Parsed::Empty => Some(MSG_REQUIRED),
        Parsed::Invalid => Some(MSG_INVALID_DAY),
        Parsed::Value(d) if !(1..=31).contains(&d) => Some(MSG_INVALID_DAY),
        Parsed::Value(d) => match (month, year) {
            (Parsed::Value(m), Parsed::Value(y)) if !is_real_date(d, m, y) => {
                Some(MSG_INVALID_DATE)
            }
            _ => None,
        },
    };

    // Month: required and in range.
    errors.month = match month {
        Parsed::Empty => Some(MSG_REQUIRED),
        Parsed::Invalid => Some(MSG_INVALID_MONTH),
        Parsed::Value(m) if !(1..=12).contains(&m) => Some(MSG_INVALID_MONTH),
        Parsed::Value(_) => None,
    };

    // Year: required and not in the future. Arbitrarily old years pass.
    errors.year = match year {
        Parsed::Empty => Some(MSG_REQUIRED),
        Parsed::Invalid => Some(MSG_FUTURE_YEAR),
        Parsed::Value(y) if y > i64::from(today.year) => Some(MSG_FUTURE_YEAR),
        Parsed::Value(_) => None,
    };

    errors
}

/// Build the validated birth date from fields that already passed
/// `validate`. Returns None if any field fails to re-parse, which cannot
/// happen for inputs with an empty error report.
pub fn to_calendar_date(input: &RawInput) -> Option<CalendarDate> {
    match (
        parse_field(&input.day),
        parse_field(&input.month),
        parse_field(&input.year),
    ) {
        (Parsed::Value(d), Parsed::Value(m), Parsed::Value(y)) => CalendarDate::new(
            i32::try_from(y).ok()?,
            u32::try_from(m).ok()?,
            u32::try_from(d).ok()?,
        ),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
