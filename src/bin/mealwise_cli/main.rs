// ABOUTME: Mealwise CLI - command-line front end for the nutrition planner
// ABOUTME: Computes energy targets, lists foods, generates meal plans, explains exclusions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Energy and macro targets from body metrics
//! mealwise-cli targets --weight-lbs 154.32 --height-inches 68.9 --age 24 --sex female \
//!     --activity moderately_active --goal maintain
//!
//! # List or search the seed catalog
//! mealwise-cli foods --search rice
//!
//! # Three-day plan with grocery list, as JSON
//! mealwise-cli plan --user user.json --days 3 --start-date 2025-01-06
//!
//! # Why a food is excluded for a user
//! mealwise-cli explain --user user.json --food "Greek Yogurt (plain, non-fat)"
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mealwise::config::PlannerConfig;
use mealwise::errors::AppError;
use mealwise::logging::{AppLogger, LoggingConfig};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

use commands::targets::TargetsArgs;

#[derive(Parser)]
#[command(
    name = "mealwise-cli",
    about = "Mealwise Nutrition Planner CLI",
    long_about = "Compute calorie targets, generate constraint-aware meal plans, and build grocery lists."
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
    /// Compute BMR, TDEE, calorie target and macro targets
    Targets {
        /// Body weight in pounds
        #[arg(long)]
        weight_lbs: Decimal,

        /// Height in inches
        #[arg(long)]
        height_inches: Decimal,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// BMR formula branch (male, female)
        #[arg(long, default_value = "male")]
        sex: String,

        /// Activity level (sedentary, lightly_active, moderately_active, very_active, extra_active)
        #[arg(long, default_value = "sedentary")]
        activity: String,

        /// Weight goal (lose, maintain, gain)
        #[arg(long, default_value = "maintain")]
        goal: String,

        /// Pounds to lose or gain per week
        #[arg(long, default_value = "0.5")]
        change_per_week: Decimal,
    },

    /// List catalog foods
    Foods {
        /// Case-insensitive name filter
        #[arg(long, short = 's')]
        search: Option<String>,

        /// JSON catalog file (defaults to the built-in seed catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Generate a meal plan and its grocery list as JSON
    Plan {
        /// JSON user record
        #[arg(long)]
        user: PathBuf,

        /// JSON catalog file (defaults to the built-in seed catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Number of days to plan
        #[arg(long, default_value = "7")]
        days: u32,

        /// First day of the plan (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },

    /// Explain why a food is or is not allowed for a user
    Explain {
        /// JSON user record
        #[arg(long)]
        user: PathBuf,

        /// Food name (case-insensitive)
        #[arg(long)]
        food: String,

        /// JSON catalog file (defaults to the built-in seed catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Targets { .. } => "targets",
            Self::Foods { .. } => "foods",
            Self::Plan { .. } => "plan",
            Self::Explain { .. } => "explain",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    info!("Mealwise CLI");

    // Bad MEALWISE_* overrides fail the command instead of silently using defaults
    let planner_config = PlannerConfig::load().map_err(AppError::from)?;
    let config = &planner_config;
    let command_name = cli.command.name();
    let started = Instant::now();

    let result = match cli.command {
        Command::Targets {
            weight_lbs,
            height_inches,
            age,
            sex,
            activity,
            goal,
            change_per_week,
        } => commands::targets::run(
            &TargetsArgs {
                weight_lbs,
                height_inches,
                age,
                sex,
                activity,
                goal,
                change_per_week,
            },
            config,
        ),
        Command::Foods { search, catalog } => {
            commands::foods::list(catalog.as_deref(), search.as_deref())
        }
        Command::Plan {
            user,
            catalog,
            days,
            start_date,
        } => commands::plan::generate(&user, catalog.as_deref(), days, start_date, config),
        Command::Explain {
            user,
            food,
            catalog,
        } => commands::explain::run(&user, &food, catalog.as_deref(), config),
    };

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_command(command_name, result.is_ok(), duration_ms);

    if let Err(e) = &result {
        error!("Command failed: {}", e);
    }

    Ok(result?)
}
