// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for mealwise-cli
// ABOUTME: Provides access to targets, foods, plan, and explain commands

pub mod explain;
pub mod foods;
pub mod plan;
pub mod targets;
