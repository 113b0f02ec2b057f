// ABOUTME: Date and timestamp wire formats used by the backend API
// ABOUTME: Parse/format helpers and serde `with` modules for YYYY-MM-DD and YYYY-MM-DD HH:mm:ss
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use meatmetrics_core::constants::wire::{DATE_FORMAT, TIMESTAMP_FORMAT};

/// Parse a `YYYY-MM-DD` calendar date
///
/// # Errors
///
/// Returns `InvalidFormat` if the value is not a valid date in that format
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        AppError::invalid_format(format!("Invalid date '{value}', expected YYYY-MM-DD"))
            .with_source(e)
    })
}

/// Format a calendar date as `YYYY-MM-DD`
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD HH:mm:ss` local timestamp
///
/// # Errors
///
/// Returns `InvalidFormat` if the value is not a valid timestamp in that format
pub fn parse_timestamp(value: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| {
        AppError::invalid_format(format!(
            "Invalid timestamp '{value}', expected YYYY-MM-DD HH:mm:ss"
        ))
        .with_source(e)
    })
}

/// Format a local timestamp as `YYYY-MM-DD HH:mm:ss`
#[must_use]
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Format a UTC instant as `YYYY-MM-DD HH:mm:ss` (UTC, whole seconds)
#[must_use]
pub fn format_utc_timestamp(instant: DateTime<Utc>) -> String {
    format_timestamp(instant.naive_utc())
}

/// Serde adapter for `NaiveDate` fields
pub mod date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize as `YYYY-MM-DD`
    ///
    /// # Errors
    ///
    /// Propagates serializer errors
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    /// Deserialize from `YYYY-MM-DD`
    ///
    /// # Errors
    ///
    /// Fails on any other format
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(de::Error::custom)
    }
}

/// Serde adapter for `Option<NaiveDate>` fields
pub mod optional_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize as `YYYY-MM-DD` or null
    ///
    /// # Errors
    ///
    /// Propagates serializer errors
    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_some(&super::format_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from `YYYY-MM-DD` or null
    ///
    /// # Errors
    ///
    /// Fails on any other format
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_date(&raw).map_err(de::Error::custom))
            .transpose()
    }
}

/// Serde adapter for `NaiveDateTime` fields
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize as `YYYY-MM-DD HH:mm:ss`
    ///
    /// # Errors
    ///
    /// Propagates serializer errors
    pub fn serialize<S: Serializer>(
        timestamp: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(*timestamp))
    }

    /// Deserialize from `YYYY-MM-DD HH:mm:ss`
    ///
    /// # Errors
    ///
    /// Fails on any other format
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(de::Error::custom)
    }
}

/// Serde adapter for `Option<NaiveDateTime>` fields
pub mod optional_timestamp {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize as `YYYY-MM-DD HH:mm:ss` or null
    ///
    /// # Errors
    ///
    /// Propagates serializer errors
    pub fn serialize<S: Serializer>(
        timestamp: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match timestamp {
            Some(timestamp) => serializer.serialize_some(&super::format_timestamp(*timestamp)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from `YYYY-MM-DD HH:mm:ss` or null
    ///
    /// # Errors
    ///
    /// Fails on any other format
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_timestamp(&raw).map_err(de::Error::custom))
            .transpose()
    }
}

/// Serializer for `DateTime<Utc>` fields, written in the timestamp wire format
pub mod utc_timestamp {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    /// Serialize as `YYYY-MM-DD HH:mm:ss` in UTC
    ///
    /// # Errors
    ///
    /// Propagates serializer errors
    pub fn serialize<S: Serializer>(
        instant: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_utc_timestamp(*instant))
    }
}
