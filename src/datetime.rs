//! Epoch/timestamp conversion.
//!
//! Timestamps use the fixed layout `YYYY-MM-DDTHH:MM:SS+0000`. The `+0000`
//! is a literal: values are rendered and parsed in the *local* timezone, so a
//! consumer that needs real UTC has to convert. The `_in` variants take the
//! timezone explicitly.

use std::fmt::Display;

use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// `strftime` layout shared by rendering and parsing.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S+0000";

#[derive(Debug, Error, PartialEq)]
pub enum DateTimeError {
    #[error("timestamp `{text}` does not match `{}`: {source}", TIMESTAMP_FORMAT)]
    Format {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("epoch {0} is out of range for a timestamp")]
    OutOfRange(i64),

    /// The wall-clock time falls in a DST gap.
    #[error("timestamp `{0}` does not exist in the local timezone")]
    NonexistentLocalTime(String),
}

/// Seconds since the Unix epoch.
pub fn now_epoch() -> i64 {
    Utc::now().timestamp()
}

pub fn now_timestamp() -> String {
    // The current instant is always representable.
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub fn epoch_to_timestamp(epoch: i64) -> Result<String, DateTimeError> {
    epoch_to_timestamp_in(epoch, &Local)
}

pub fn timestamp_to_epoch(text: &str) -> Result<i64, DateTimeError> {
    timestamp_to_epoch_in(text, &Local)
}

pub fn epoch_to_timestamp_in<Tz>(epoch: i64, tz: &Tz) -> Result<String, DateTimeError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let dt = tz
        .timestamp_opt(epoch, 0)
        .single()
        .ok_or(DateTimeError::OutOfRange(epoch))?;
    Ok(dt.format(TIMESTAMP_FORMAT).to_string())
}

/// Parse `text` as a wall-clock time in `tz`.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant.
pub fn timestamp_to_epoch_in<Tz: TimeZone>(text: &str, tz: &Tz) -> Result<i64, DateTimeError> {
    let naive = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|source| {
        DateTimeError::Format {
            text: text.to_string(),
            source,
        }
    })?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| DateTimeError::NonexistentLocalTime(text.to_string()))
}
