// ABOUTME: MeatMetrics CLI - offline nutrition calculations over the client domain layer
// ABOUTME: Computes portion nutrition, net carbs, and daily summaries from stored meal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics
//!
//! Usage:
//! ```bash
//! # Nutrition of 150 g of a food (values per 100 g)
//! meatmetrics-cli portion --calories 250 --protein 26 --fat 17 --carbs 0 --amount 150
//!
//! # Net carbs of a food
//! meatmetrics-cli net-carbs --carbs 12.5 --fiber 4
//!
//! # Daily summary from a stored GET /api/meals response
//! meatmetrics-cli summary --records meals.json --user-id 1 --date 2025-01-15 \
//!     --calorie-goal 2000 --protein-goal 150 --fat-goal 120 --net-carbs-goal 20
//! ```

mod commands;

use clap::{Parser, Subcommand};
use meatmetrics::errors::{AppError, AppResult};
use meatmetrics::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "meatmetrics-cli",
    about = "MeatMetrics nutrition CLI",
    long_about = "Offline nutrition calculations: portion nutrition, net carbs, and daily summaries built from stored meal records."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Nutrition of a portion of food
    Portion {
        /// Energy per 100 g (kcal)
        #[arg(long)]
        calories: f64,

        /// Protein per 100 g (g)
        #[arg(long)]
        protein: f64,

        /// Fat per 100 g (g)
        #[arg(long)]
        fat: f64,

        /// Total carbohydrates per 100 g (g)
        #[arg(long)]
        carbs: f64,

        /// Dietary fiber per 100 g (g)
        #[arg(long)]
        fiber: Option<f64>,

        /// Portion size (g)
        #[arg(long)]
        amount: f64,
    },

    /// Net carbohydrates (carbs minus fiber, never negative)
    NetCarbs {
        /// Total carbohydrates (g)
        #[arg(long)]
        carbs: f64,

        /// Dietary fiber (g)
        #[arg(long)]
        fiber: Option<f64>,
    },

    /// Daily summary from a JSON file of meal record responses
    Summary {
        /// Path to a stored GET /api/meals response
        #[arg(long)]
        records: PathBuf,

        /// User to summarize
        #[arg(long)]
        user_id: i64,

        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Daily calorie goal (kcal)
        #[arg(long)]
        calorie_goal: f64,

        /// Daily protein goal (g)
        #[arg(long)]
        protein_goal: f64,

        /// Daily fat goal (g)
        #[arg(long)]
        fat_goal: f64,

        /// Daily net carbs goal (g)
        #[arg(long)]
        net_carbs_goal: f64,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;
    debug!("MeatMetrics CLI");

    let output = match cli.command {
        Command::Portion {
            calories,
            protein,
            fat,
            carbs,
            fiber,
            amount,
        } => commands::nutrition::portion(calories, protein, fat, carbs, fiber, amount)?,
        Command::NetCarbs { carbs, fiber } => commands::nutrition::net_carbs(carbs, fiber)?,
        Command::Summary {
            records,
            user_id,
            date,
            calorie_goal,
            protein_goal,
            fat_goal,
            net_carbs_goal,
        } => commands::summary::daily(
            &records,
            user_id,
            &date,
            [calorie_goal, protein_goal, fat_goal, net_carbs_goal],
        )?,
    };

    println!("{output}");
    Ok(())
}
