// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for mealwise-cli
// ABOUTME: Provides access to JSON input loading and display formatting utilities

pub mod display;
pub mod input;
