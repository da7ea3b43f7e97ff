// Copyright 2025 OnSched client library authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Dates and times accepted by the OnSched APIs.
//!
//! The OnSched APIs exchange dates and times as ISO-8601 strings. Some fields
//! only accept dates, others only accept date-times. Applications can pass
//! [chrono] values, which are formatted by the client library, or strings,
//! which are forwarded verbatim.
//!
//! Passing a value of the wrong kind, for example a date-time where only a
//! date is accepted, fails with a [validation][gax::error::Error::is_validation]
//! error before any request is sent.
//!
//! # Example
//! ```
//! # use onsched::temporal::Temporal;
//! use chrono::NaiveDate;
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! assert_eq!(Temporal::from(date).to_string(), "2024-01-15");
//! assert_eq!(Temporal::from("2024-01-15").to_string(), "2024-01-15");
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

/// A date, a date-time, or a pre-formatted string.
#[derive(Clone, Debug, PartialEq)]
pub enum Temporal {
    /// A calendar date, formatted as `2024-01-15`.
    Date(NaiveDate),
    /// A date-time without offset, formatted as `2024-01-15T09:00:00`.
    DateTime(NaiveDateTime),
    /// A date-time with an UTC offset, formatted as `2024-01-15T09:00:00-05:00`.
    Zoned(DateTime<FixedOffset>),
    /// A value formatted by the application, sent as-is.
    Text(String),
}

/// The kinds of [Temporal] values accepted by a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    Date,
    // Both naive and zoned date-times.
    DateTime,
    Text,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Date => "date",
            Kind::DateTime => "date-time",
            Kind::Text => "text",
        };
        f.write_str(name)
    }
}

pub(crate) const DATE: &[Kind] = &[Kind::Date, Kind::Text];
pub(crate) const DATE_TIME: &[Kind] = &[Kind::DateTime, Kind::Text];
pub(crate) const ANY: &[Kind] = &[Kind::Date, Kind::DateTime, Kind::Text];

/// A temporal value of a kind the field does not accept.
#[derive(Debug, thiserror::Error)]
#[error("`{field}` does not accept a {kind} value, expected one of {expected}")]
pub struct KindMismatch {
    field: &'static str,
    kind: Kind,
    expected: String,
}

impl Temporal {
    pub(crate) fn kind(&self) -> Kind {
        match self {
            Self::Date(_) => Kind::Date,
            Self::DateTime(_) | Self::Zoned(_) => Kind::DateTime,
            Self::Text(_) => Kind::Text,
        }
    }

    /// Formats the value for `field`, which only accepts the `accepts` kinds.
    pub(crate) fn format_for(&self, field: &'static str, accepts: &[Kind]) -> gax::Result<String> {
        self.check(field, accepts)?;
        Ok(self.to_string())
    }

    /// Verifies the value is of a kind accepted by `field`.
    pub(crate) fn check(&self, field: &'static str, accepts: &[Kind]) -> gax::Result<()> {
        let kind = self.kind();
        if accepts.contains(&kind) {
            return Ok(());
        }
        let expected = accepts
            .iter()
            .map(Kind::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Err(gax::error::Error::validation(KindMismatch {
            field,
            kind,
            expected,
        }))
    }
}

impl std::fmt::Display for Temporal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::DateTime(d) => write!(f, "{}", d.format("%Y-%m-%dT%H:%M:%S%.f")),
            Self::Zoned(d) => write!(f, "{}", d.format("%Y-%m-%dT%H:%M:%S%.f%:z")),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl serde::Serialize for Temporal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl From<NaiveDate> for Temporal {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for Temporal {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Temporal {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Zoned(value.fixed_offset())
    }
}

impl From<String> for Temporal {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Temporal {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
