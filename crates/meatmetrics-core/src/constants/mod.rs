// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Wire formats, nutrition reference values, goal limit defaults, and account rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

//! Constants grouped by domain.

/// Wire formats used by the backend API
pub mod wire {
    /// Calendar date format (`YYYY-MM-DD`)
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
    /// Timestamp format (`YYYY-MM-DD HH:mm:ss`)
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Nutrition reference values
pub mod nutrition {
    /// Food nutrition is stored per this many grams
    pub const REFERENCE_PORTION_G: f64 = 100.0;
}

/// Default nutrition goal limits applied by the goal-update operation
pub mod goal_limits {
    /// Minimum daily calorie goal (kcal)
    pub const CALORIE_MIN: f64 = 800.0;
    /// Maximum daily calorie goal (kcal)
    pub const CALORIE_MAX: f64 = 5000.0;
    /// Minimum daily protein goal (g)
    pub const PROTEIN_MIN_G: f64 = 50.0;
    /// Maximum daily protein goal (g)
    pub const PROTEIN_MAX_G: f64 = 500.0;
    /// Minimum daily fat goal (g)
    pub const FAT_MIN_G: f64 = 30.0;
    /// Maximum daily fat goal (g)
    pub const FAT_MAX_G: f64 = 400.0;
    /// Minimum daily net carbs goal (g)
    pub const NET_CARBS_MIN_G: f64 = 0.0;
    /// Maximum daily net carbs goal (g)
    pub const NET_CARBS_MAX_G: f64 = 150.0;
}

/// Account value object rules
pub mod account {
    /// Maximum email length after trimming
    pub const EMAIL_MAX_LENGTH: usize = 255;
    /// Minimum username length
    pub const USERNAME_MIN_LENGTH: usize = 3;
    /// Maximum username length
    pub const USERNAME_MAX_LENGTH: usize = 30;
}
