use thiserror::Error;

/// Failures a single command can run into. The display text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContactError {
    #[error("Invalid phone number '{0}'. Use exactly 10 digits without separators.")]
    InvalidPhone(String),

    #[error("Invalid date '{0}'. Use DD.MM.YYYY.")]
    InvalidBirthday(String),

    #[error("Invalid number of days '{0}'. Use a whole number, e.g. 7.")]
    InvalidDays(String),

    #[error("Invalid weekday '{0}'. Use a number from 0 (Monday) to 6 (Sunday).")]
    InvalidWeekday(String),

    #[error("Contact '{0}' not found.")]
    NotFound(String),

    #[error("Phone '{phone}' not found for contact '{name}'.")]
    PhoneNotFound { name: String, phone: String },

    #[error("Wrong number of arguments. Usage: {0}")]
    ArgumentCount(&'static str),
}
