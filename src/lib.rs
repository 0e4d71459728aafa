// Age Calculator - Core Library
// Exposes the validator and age arithmetic for use in the CLI, the
// interactive form, and tests

pub mod age;
pub mod date;
#[cfg(feature = "tui")]
pub mod ui;
pub mod validator;

// Re-export commonly used types
pub use age::{calculate_age, AgeResult};
pub use date::{days_in_month, is_leap_year, CalendarDate};
pub use validator::{
    to_calendar_date, validate, FieldErrors, RawInput, MSG_FUTURE_YEAR, MSG_INVALID_DATE,
    MSG_INVALID_DAY, MSG_INVALID_MONTH, MSG_REQUIRED,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
