// ABOUTME: Command implementations for meatmetrics-cli
// ABOUTME: Nutrition calculations and daily summary rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

pub mod nutrition;
pub mod summary;
