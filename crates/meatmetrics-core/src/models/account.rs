// ABOUTME: Validated account value objects
// ABOUTME: Email (normalized to lowercase) and Username (3-30 chars of [A-Za-z0-9_-])
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use crate::constants::account::{EMAIL_MAX_LENGTH, USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH};
use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9]([A-Za-z0-9.-]*[A-Za-z0-9])?\.[A-Za-z]{2,}$").ok()
});

/// Email address, trimmed and lower-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse and normalize an email address
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the address is empty, malformed, or too long
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input("Email cannot be empty"));
        }
        if !Self::is_valid(trimmed) {
            return Err(AppError::invalid_input(format!(
                "Invalid email format: {trimmed}"
            )));
        }
        if trimmed.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::invalid_input(format!(
                "Email is too long. Maximum length is {EMAIL_MAX_LENGTH} characters"
            )));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Whether `raw` (after trimming) looks like an email address
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        EMAIL_PATTERN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(raw.trim()))
    }

    /// Normalized address
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name chosen at registration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Parse a username
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the name is empty, has the wrong length, or
    /// contains characters outside `[A-Za-z0-9_-]`
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input("Username cannot be empty"));
        }
        if !Self::is_valid(trimmed) {
            return Err(AppError::invalid_input(format!(
                "Invalid username: {trimmed}"
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Whether `raw` (after trimming) is an acceptable username
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        (USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&len)
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    /// Username as entered (trimmed)
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
