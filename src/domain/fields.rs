use chrono::{Datelike, NaiveDate};
use std::{fmt, str::FromStr};

use crate::domain::error::ContactError;

const PHONE_DIGITS: usize = 10;
const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Name(String);

impl Name {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number made of exactly ten ASCII digits, stored as typed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Phone(String);

impl Phone {
    pub(crate) fn parse(raw: &str) -> Result<Self, ContactError> {
        if raw.len() == PHONE_DIGITS && raw.bytes().all(|byte| byte.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ContactError::InvalidPhone(raw.to_string()))
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = ContactError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birth date entered as `DD.MM.YYYY`.
///
/// Only the parsed date is kept, so rendering is always zero padded even
/// if the stored value came from somewhere other than user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Birthday(NaiveDate);

impl Birthday {
    pub(crate) fn parse(raw: &str) -> Result<Self, ContactError> {
        if !has_birthday_shape(raw) {
            return Err(ContactError::InvalidBirthday(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ContactError::InvalidBirthday(raw.to_string()))
    }

    /// The day this birthday is celebrated in `year`.
    ///
    /// 29 February moves to 28 February outside leap years.
    pub(crate) fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if month == 2 && day == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl FromStr for Birthday {
    type Err = ContactError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

// chrono accepts unpadded fields, so the layout is checked by hand first.
fn has_birthday_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            2 | 5 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        })
}
