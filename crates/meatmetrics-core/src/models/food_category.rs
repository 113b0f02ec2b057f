// ABOUTME: Closed classification of catalog foods
// ABOUTME: FoodCategory with strict parsing of the wire literals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog category of a food
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    /// Beef, pork, poultry, and other meats
    Meat,
    /// Fish and seafood
    Fish,
    /// Milk, cheese, butter
    Dairy,
    /// Eggs
    Eggs,
    /// Vegetables
    Vegetables,
    /// Seasonings and condiments
    Seasoning,
    /// Anything else
    Other,
}

impl FoodCategory {
    /// Wire literal for this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meat => "meat",
            Self::Fish => "fish",
            Self::Dairy => "dairy",
            Self::Eggs => "eggs",
            Self::Vegetables => "vegetables",
            Self::Seasoning => "seasoning",
            Self::Other => "other",
        }
    }
}

impl FromStr for FoodCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meat" => Ok(Self::Meat),
            "fish" => Ok(Self::Fish),
            "dairy" => Ok(Self::Dairy),
            "eggs" => Ok(Self::Eggs),
            "vegetables" => Ok(Self::Vegetables),
            "seasoning" => Ok(Self::Seasoning),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized food category: {other}"
            ))),
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
