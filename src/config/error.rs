// ABOUTME: Configuration error types for environment loading and validation
// ABOUTME: Defines error variants for missing variables, parse failures, and invalid ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

//! Configuration error types.

use crate::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Limit bounds are inverted, negative, or not finite
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required environment variable is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::MissingField(_) => ErrorCode::ConfigMissing,
            ConfigError::InvalidRange(_) | ConfigError::Parse(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
