// ABOUTME: Health check response of the backend API
// ABOUTME: Status literal and server time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use serde::{Deserialize, Serialize};

/// Status reported by a healthy backend
pub const STATUS_OK: &str = "ok";

/// `GET /api/health` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Server time as reported by the backend
    pub time: String,
}

impl HealthResponse {
    /// Whether the backend reports itself healthy
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_OK)
    }
}
