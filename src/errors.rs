// ABOUTME: Re-exports the unified error system from the core crate
// ABOUTME: AppError, ErrorCode, ErrorResponse, and AppResult for the client library
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

pub use meatmetrics_core::errors::*;
