//! Domain models that mirror the SQLite schema and get passed between the
//! persistence layer, the formatter, and the command loop. These types stay
//! light-weight data holders so the other layers can focus on querying and
//! presentation.

use std::fmt;
use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;

use crate::error::Error;

/// A 24-hour wall-clock time with minute precision. Departures carry no date
/// component, so a dedicated hour/minute pair is all the schedule needs. The
/// derived ordering (hour first, then minute) agrees with lexicographic
/// comparison of the zero-padded `HH:MM` text we store in SQLite, which keeps
/// SQL-side filtering and Rust-side comparison interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Build a time from raw components, rejecting out-of-range values with
    /// the same validation error the string parser produces.
    pub fn new(hour: u8, minute: u8) -> Result<Self, Error> {
        if hour > 23 || minute > 59 {
            return Err(Error::validation(format!(
                "{hour:02}:{minute:02} is not a valid time of day"
            )));
        }
        Ok(Self { hour, minute })
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    /// Parse `HH:MM`. One- or two-digit hour and minute fields are both
    /// tolerated and normalized to the zero-padded form on output, so `9:5`,
    /// `9:05`, and `09:05` name the same time.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::validation(format!("'{input}' is not a time in HH:MM format"));

        let (hour, minute) = input.trim().split_once(':').ok_or_else(invalid)?;
        if hour.is_empty() || hour.len() > 2 || minute.is_empty() || minute.len() > 2 {
            return Err(invalid());
        }

        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    /// Render zero-padded `HH:MM`. This exact form is what gets persisted, so
    /// parsing and display round-trip byte-for-byte.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl ToSql for TimeOfDay {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for TimeOfDay {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|err: Error| FromSqlError::Other(Box::new(err)))
    }
}

/// One departure joined with its train type name, exactly as the `list` and
/// `select` views consume it. The database identifiers stay out of this struct
/// because no command ever edits or deletes a stored departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureRecord {
    /// Train number as announced on the platform.
    pub number: i64,
    /// Name of the train's type, resolved through the `types` join.
    pub train_type: String,
    /// Destination station.
    pub destination: String,
    /// Scheduled departure time.
    pub time: TimeOfDay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zero_padded_time() {
        let time: TimeOfDay = "09:05".parse().unwrap();
        assert_eq!(time, TimeOfDay::new(9, 5).unwrap());
    }

    #[test]
    fn tolerates_single_digit_fields() {
        for (input, normalized) in [("9:05", "09:05"), ("14:5", "14:05"), ("9:5", "09:05")] {
            let time: TimeOfDay = input.parse().unwrap();
            assert_eq!(time.to_string(), normalized);
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "14", "14:", ":30", "14:60", "24:00", "ab:cd", "14-30", "1430", "14:305"] {
            assert!(input.parse::<TimeOfDay>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let time: TimeOfDay = "14:30".parse().unwrap();
        let again: TimeOfDay = time.to_string().parse().unwrap();
        assert_eq!(time, again);
    }

    #[test]
    fn ordering_matches_lexicographic_text_form() {
        let earlier: TimeOfDay = "09:59".parse().unwrap();
        let later: TimeOfDay = "10:00".parse().unwrap();
        assert!(earlier < later);
        assert!(earlier.to_string() < later.to_string());
    }
}
