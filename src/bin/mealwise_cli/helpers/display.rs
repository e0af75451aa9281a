// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for mealwise-cli
// ABOUTME: Provides consistent display functions for targets, foods, and exclusion reports

use mealwise::constraint_resolver::ConstraintsSummary;
use mealwise::models::{BodyProfile, EnergyTargets, FoodItem};

/// Display energy and macro targets for a body profile
pub fn display_energy_targets(body: &BodyProfile, targets: &EnergyTargets) {
    println!("\nEnergy Targets");
    println!("{}", "=".repeat(50));
    println!(
        "   Profile: {} lbs, {} in, {} years, {:?}",
        body.weight_lbs, body.height_inches, body.age, body.sex
    );
    println!(
        "   Activity: {:?}   Goal: {:?} ({} lbs/week)",
        body.activity_level, body.weight_goal, body.weight_change_per_week
    );
    println!("{}", "-".repeat(50));
    println!("   BMR:            {:>10} kcal", targets.bmr);
    println!("   TDEE:           {:>10} kcal", targets.tdee);
    println!("   Daily target:   {:>10} kcal", targets.calorie_target);
    println!("{}", "-".repeat(50));
    println!("   Protein:        {:>10} g", targets.macros.protein_g);
    println!("   Carbohydrates:  {:>10} g", targets.macros.carbs_g);
    println!("   Fat:            {:>10} g", targets.macros.fat_g);
}

/// Display catalog foods as a table of per-100g facts
pub fn display_foods(foods: &[&FoodItem]) {
    if foods.is_empty() {
        println!("No foods found.");
        return;
    }

    println!(
        "\n{:<5} {:<32} {:>8} {:>8} {:>8} {:>8}",
        "ID", "Name", "kcal", "Protein", "Carbs", "Fat"
    );
    println!("{}", "=".repeat(74));
    for food in foods {
        println!(
            "{:<5} {:<32} {:>8} {:>8} {:>8} {:>8}",
            food.id,
            food.name,
            food.calories_per_100g,
            food.protein_per_100g,
            food.carbs_per_100g,
            food.fat_per_100g
        );
    }
    println!("\n{} food(s), values per 100 g", foods.len());
}

/// Display why a food is or is not allowed, followed by the constraint rollup
pub fn display_exclusion_report(food: &FoodItem, reasons: &[String], summary: &ConstraintsSummary) {
    println!("\n{}", food.name);
    println!("{}", "=".repeat(50));
    if reasons.is_empty() {
        println!("   Allowed");
    } else {
        println!("   Excluded:");
        for reason in reasons {
            println!("   - {reason}");
        }
    }

    println!("\nConstraints");
    println!("{}", "-".repeat(50));
    for pattern in &summary.dietary_patterns {
        match &pattern.custom_notes {
            Some(notes) => println!("   Diet: {} ({notes})", pattern.pattern),
            None => println!("   Diet: {}", pattern.pattern),
        }
    }
    for allergy in &summary.allergies {
        let subject = allergy
            .food
            .as_deref()
            .or(allergy.allergen_name.as_deref())
            .unwrap_or("unknown food");
        println!("   Allergy: {subject} ({})", allergy.severity);
    }
    for dislike in &summary.dislikes {
        println!(
            "   Dislike: {}",
            dislike.food.as_deref().unwrap_or("unknown food")
        );
    }
    println!(
        "\n   {} allowed, {} excluded",
        summary.total_allowed_foods, summary.total_excluded_foods
    );
}
