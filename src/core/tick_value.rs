use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::DomainType;
use crate::error::{AxisError, AxisResult};

/// Default input pattern for string dates on time-series axes.
pub const DEFAULT_TIME_INPUT_FORMAT: &str = "%Y-%m-%d";

/// A single domain value designated for display as a labeled tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickValue {
    /// Linear value or category index.
    Number(f64),
    Time(DateTime<Utc>),
    /// Opaque category key.
    Key(String),
}

/// Ordered ticks selected for one axis.
pub type TickSet = Vec<TickValue>;

impl TickValue {
    /// Numeric projection used for interpolation; instants map to epoch millis.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Time(time) => Some(time.timestamp_millis() as f64),
            Self::Key(_) => None,
        }
    }

    /// Builds an instant from epoch milliseconds.
    pub fn time_from_millis(millis: f64) -> AxisResult<Self> {
        if !millis.is_finite() {
            return Err(AxisError::DomainTypeMismatch {
                value: millis.to_string(),
                domain_type: DomainType::TimeSeries,
            });
        }
        DateTime::<Utc>::from_timestamp_millis(millis.round() as i64)
            .map(Self::Time)
            .ok_or_else(|| AxisError::DomainTypeMismatch {
                value: millis.to_string(),
                domain_type: DomainType::TimeSeries,
            })
    }

    /// Natural ordering: numbers and instants numerically, keys lexically,
    /// numeric values before keys.
    #[must_use]
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self.as_f64(), other.as_f64()) {
            (Some(lhs), Some(rhs)) => lhs.total_cmp(&rhs),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => match (self, other) {
                (Self::Key(lhs), Self::Key(rhs)) => lhs.cmp(rhs),
                _ => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for TickValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Time(time) => write!(f, "{}", time.to_rfc3339()),
            Self::Key(key) => f.write_str(key),
        }
    }
}

impl From<f64> for TickValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<DateTime<Utc>> for TickValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

/// Coerces a tick value into an instant for a time-series axis.
///
/// Numbers are epoch milliseconds; keys are parsed as RFC 3339 first, then
/// with `input_format` (date-time, then date-only).
pub fn parse_date(value: &TickValue, input_format: &str) -> AxisResult<TickValue> {
    match value {
        TickValue::Time(_) => Ok(value.clone()),
        TickValue::Number(millis) => TickValue::time_from_millis(*millis),
        TickValue::Key(text) => parse_date_text(text, input_format)
            .map(TickValue::Time)
            .ok_or_else(|| AxisError::DomainTypeMismatch {
                value: text.clone(),
                domain_type: DomainType::TimeSeries,
            }),
    }
}

fn parse_date_text(text: &str, input_format: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, input_format) {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(text, input_format)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|parsed| parsed.and_utc())
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{DEFAULT_TIME_INPUT_FORMAT, TickValue, parse_date};
    use crate::error::AxisError;

    #[test]
    fn natural_ordering_places_numbers_before_keys() {
        let number = TickValue::Number(3.0);
        let key = TickValue::Key("a".to_owned());
        assert_eq!(number.natural_cmp(&key), Ordering::Less);
        assert_eq!(
            TickValue::Key("b".to_owned()).natural_cmp(&key),
            Ordering::Greater
        );
    }

    #[test]
    fn parse_date_accepts_configured_pattern_and_epoch_millis() {
        let from_key =
            parse_date(&TickValue::Key("2024-03-01".to_owned()), DEFAULT_TIME_INPUT_FORMAT)
                .expect("date key");
        let from_millis = parse_date(
            &TickValue::Number(1_709_251_200_000.0),
            DEFAULT_TIME_INPUT_FORMAT,
        )
        .expect("epoch millis");
        assert_eq!(from_key, from_millis);
    }

    #[test]
    fn parse_date_rejects_unresolvable_keys() {
        let err = parse_date(&TickValue::Key("apples".to_owned()), DEFAULT_TIME_INPUT_FORMAT)
            .expect_err("not a date");
        assert!(matches!(err, AxisError::DomainTypeMismatch { .. }));
    }

    #[test]
    fn display_keeps_shortest_numeric_form() {
        assert_eq!(TickValue::Number(2.25).to_string(), "2.25");
        assert_eq!(TickValue::Number(5.0).to_string(), "5");
    }
}
