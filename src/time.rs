//! Timestamp wrappers for the textual layouts used by the RetroAchievements API.
//!
//! The service is inconsistent about how it renders points in time, so every layout gets its
//! own type. Each type parses and renders exactly one layout and the two operations are inverses
//! for any value the layout can represent:
//!
//! | type | layout |
//! |------|--------|
//! | [`DateTime`] | `2024-03-02 17:27:03` |
//! | [`LongMonthDate`] | `March 2, 2024` |
//! | [`OffsetDateTime`] | `2024-03-02T17:27:03+00:00` |
//!
//! An empty string decodes to the [zero value](DateTime::is_zero) of the type, which is the
//! Unix epoch.
//!
//! # Example
//!
//! ```
//! use retroachievements_client::time::DateTime;
//!
//! let member_since: DateTime = "2024-03-02 17:27:03".parse().unwrap();
//! assert_eq!(member_since.to_string(), "2024-03-02 17:27:03");
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::TimeFormat;

/// A layout-bound wrapper around a `chrono` value.
trait TextLayout: Sized + Default {
    /// Human-readable rendering of the layout, reported when parsing fails
    const REFERENCE: &'static str;

    fn parse_layout(text: &str) -> Result<Self, chrono::ParseError>;

    fn write_layout(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

fn decode<T: TextLayout>(text: &str) -> Result<T, TimeFormat> {
    if text.is_empty() {
        return Ok(T::default());
    }

    T::parse_layout(text).map_err(|source| TimeFormat {
        input: text.to_owned(),
        layout: T::REFERENCE,
        source,
    })
}

/// Date and time rendered as `YYYY-MM-DD HH:MM:SS`, interpreted as UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(chrono::DateTime<Utc>);

impl DateTime {
    /// Reference rendering of the layout.
    pub const LAYOUT: &'static str = "2006-01-02 15:04:05";
    const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    #[must_use]
    pub fn new(value: chrono::DateTime<Utc>) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn into_inner(self) -> chrono::DateTime<Utc> {
        self.0
    }

    /// Whether this is the value an empty string decodes to.
    ///
    /// A genuine Unix epoch value reports `true` as well; the two cannot be told apart.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl TextLayout for DateTime {
    const REFERENCE: &'static str = Self::LAYOUT;

    fn parse_layout(text: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(text, Self::FORMAT).map(|value| Self(value.and_utc()))
    }

    fn write_layout(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

/// Calendar date rendered with the full month name, as in `March 2, 2024`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LongMonthDate(NaiveDate);

impl LongMonthDate {
    /// Reference rendering of the layout.
    pub const LAYOUT: &'static str = "January 2, 2006";
    const FORMAT: &'static str = "%B %-d, %Y";

    #[must_use]
    pub fn new(value: NaiveDate) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Whether this is the value an empty string decodes to.
    ///
    /// A genuine Unix epoch value reports `true` as well; the two cannot be told apart.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl TextLayout for LongMonthDate {
    const REFERENCE: &'static str = Self::LAYOUT;

    fn parse_layout(text: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(text, Self::FORMAT).map(Self)
    }

    fn write_layout(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

/// Date and time with an explicit UTC offset, as in `2024-03-02T17:27:03+00:00`.
///
/// The offset is kept as received; no normalization to UTC takes place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetDateTime(chrono::DateTime<FixedOffset>);

impl OffsetDateTime {
    /// Reference rendering of the layout.
    pub const LAYOUT: &'static str = "2006-01-02T15:04:05-07:00";
    const FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S%:z";

    #[must_use]
    pub fn new(value: chrono::DateTime<FixedOffset>) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn into_inner(self) -> chrono::DateTime<FixedOffset> {
        self.0
    }

    /// Whether this is the value an empty string decodes to.
    ///
    /// A genuine Unix epoch value reports `true` as well; the two cannot be told apart.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl TextLayout for OffsetDateTime {
    const REFERENCE: &'static str = Self::LAYOUT;

    fn parse_layout(text: &str) -> Result<Self, chrono::ParseError> {
        chrono::DateTime::parse_from_str(text, Self::FORMAT).map(Self)
    }

    fn write_layout(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

macro_rules! text_layout_impls {
    ($($ty:ident => $inner:ty),+ $(,)?) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.write_layout(f)
            }
        }

        impl FromStr for $ty {
            type Err = TimeFormat;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                decode(s)
            }
        }

        impl From<$inner> for $ty {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$ty> for $inner {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                decode(&text).map_err(de::Error::custom)
            }
        }
    )+};
}

text_layout_impls! {
    DateTime => chrono::DateTime<Utc>,
    LongMonthDate => NaiveDate,
    OffsetDateTime => chrono::DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveTime, TimeZone as _};

    use super::*;

    fn quoted(text: &str) -> String {
        format!("\"{text}\"")
    }

    #[test]
    fn date_time_literal_round_trips() {
        let literal = "2024-03-02 17:27:03";
        let value: DateTime = serde_json::from_str(&quoted(literal)).expect("valid literal");

        assert_eq!(
            value.into_inner(),
            Utc.with_ymd_and_hms(2024, 3, 2, 17, 27, 3).unwrap()
        );
        assert_eq!(serde_json::to_string(&value).unwrap(), quoted(literal));
    }

    #[test]
    fn date_time_value_round_trips() {
        let value = DateTime::new(Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap());
        let encoded = serde_json::to_string(&value).unwrap();

        assert_eq!(serde_json::from_str::<DateTime>(&encoded).unwrap(), value);
    }

    #[test]
    fn long_month_date_literal_round_trips() {
        for literal in ["March 2, 2024", "December 25, 1991", "June 23, 1991"] {
            let value: LongMonthDate = literal.parse().expect("valid literal");
            assert_eq!(value.to_string(), literal);
        }

        let value: LongMonthDate = serde_json::from_str("\"March 2, 2024\"").unwrap();
        assert_eq!(
            value.into_inner(),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
        );
    }

    #[test]
    fn long_month_date_value_round_trips() {
        let value = LongMonthDate::new(NaiveDate::from_ymd_opt(1988, 10, 29).unwrap());
        let encoded = serde_json::to_string(&value).unwrap();

        assert_eq!(encoded, quoted("October 29, 1988"));
        assert_eq!(serde_json::from_str::<LongMonthDate>(&encoded).unwrap(), value);
    }

    #[test]
    fn offset_date_time_keeps_offset() {
        let literal = "2024-03-02T17:27:03-05:00";
        let value: OffsetDateTime = literal.parse().expect("valid literal");

        assert_eq!(value.into_inner().offset().local_minus_utc(), -5 * 3600);
        assert_eq!(
            value.into_inner().time(),
            NaiveTime::from_hms_opt(17, 27, 3).unwrap()
        );
        assert_eq!(value.to_string(), literal);
    }

    #[test]
    fn offset_date_time_value_round_trips() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let value = OffsetDateTime::new(offset.with_ymd_and_hms(2024, 4, 19, 15, 39, 45).unwrap());
        let encoded = serde_json::to_string(&value).unwrap();

        assert_eq!(encoded, quoted("2024-04-19T15:39:45+00:00"));
        assert_eq!(serde_json::from_str::<OffsetDateTime>(&encoded).unwrap(), value);
    }

    #[test]
    fn empty_string_decodes_to_zero() {
        let date_time: DateTime = serde_json::from_str("\"\"").unwrap();
        let long_month: LongMonthDate = serde_json::from_str("\"\"").unwrap();
        let offset: OffsetDateTime = serde_json::from_str("\"\"").unwrap();

        assert!(date_time.is_zero(), "expected zero value, got {date_time}");
        assert!(long_month.is_zero(), "expected zero value, got {long_month}");
        assert!(offset.is_zero(), "expected zero value, got {offset}");
    }

    #[test]
    fn epoch_text_also_reports_zero() {
        let date_time: DateTime = "1970-01-01 00:00:00".parse().unwrap();
        let long_month: LongMonthDate = "January 1, 1970".parse().unwrap();
        let offset: OffsetDateTime = "1970-01-01T00:00:00+00:00".parse().unwrap();

        assert!(date_time.is_zero());
        assert!(long_month.is_zero());
        assert!(offset.is_zero());
    }

    #[test]
    fn unparsable_date_time_names_input_and_layout() {
        let err = "?>?>>L:".parse::<DateTime>().unwrap_err();

        assert_eq!(err.input, "?>?>>L:");
        assert_eq!(err.layout, "2006-01-02 15:04:05");
        let message = err.to_string();
        assert!(message.contains("?>?>>L:"), "missing input: {message}");
        assert!(
            message.contains("2006-01-02 15:04:05"),
            "missing layout: {message}"
        );
    }

    #[test]
    fn unparsable_json_string_fails_deserialization() {
        let err = serde_json::from_str::<DateTime>("\"?>?>>L:\"").unwrap_err();
        let message = err.to_string();

        assert!(message.contains("?>?>>L:"), "missing input: {message}");
        assert!(
            message.contains(DateTime::LAYOUT),
            "missing layout: {message}"
        );
    }

    #[test]
    fn layouts_are_not_interchangeable() {
        "2024-03-02 17:27:03".parse::<OffsetDateTime>().unwrap_err();
        "2024-03-02T17:27:03+00:00".parse::<DateTime>().unwrap_err();
        "2024-03-02".parse::<LongMonthDate>().unwrap_err();
    }
}
