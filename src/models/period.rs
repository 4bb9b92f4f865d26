//! Calendar-month period keys
//!
//! A [`Period`] identifies one calendar month ("01".."12") and is the key the
//! budget table and the monthly reports group by. It is always derived from a
//! real date or parsed with validation, so the zero-padded 2-digit invariant
//! holds by construction rather than by string convention.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month, rendered as a zero-padded 2-digit key
///
/// Ordering is numeric, which coincides with lexicographic order of the
/// rendered keys for "01" through "12".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(u8);

impl Period {
    /// Create a period from a month number (1-12)
    pub fn new(month: u32) -> Result<Self, PeriodParseError> {
        if (1..=12).contains(&month) {
            Ok(Self(month as u8))
        } else {
            Err(PeriodParseError::InvalidMonth(month))
        }
    }

    /// Derive the period from a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        // NaiveDate months are always 1-12
        Self(date.month() as u8)
    }

    /// Get the month number (1-12)
    pub const fn month(&self) -> u32 {
        self.0 as u32
    }

    /// Get the zero-padded 2-digit key ("01".."12")
    pub fn key(&self) -> String {
        format!("{:02}", self.0)
    }

    /// Parse a period from a string
    ///
    /// Accepts both zero-padded ("05") and bare ("5") month numbers.
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let month: u32 = s
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        Self::new(month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serialized as the 2-digit string key so periods work as JSON map keys.

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

impl From<PeriodParseError> for crate::error::LedgerError {
    fn from(err: PeriodParseError) -> Self {
        Self::Validation(err.to_string())
    }
}
