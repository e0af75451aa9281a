// ABOUTME: Criterion benchmarks for the meal planning pipeline
// ABOUTME: Measures constraint resolution, meal composition, and full plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the meal planning pipeline.
//!
//! Runs against the seed catalog and against larger synthetic catalogs so
//! resolver and composer scaling is visible.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mealwise::catalog::FoodCatalog;
use mealwise::config::PlannerConfig;
use mealwise::constraint_resolver::ConstraintResolver;
use mealwise::energy_calculator::{calculate_all_targets, resolve_user_profile};
use mealwise::meal_composer::compose_meal;
use mealwise::models::{
    ActivityLevel, AllergySeverity, BodyProfile, CategoryTag, DietaryPattern, DietaryPatternKind,
    FoodId, FoodItem, MealType, SexFormula, UserAllergy, UserConstraints, UserDietaryPreference,
    UserRecord, WeightGoal,
};
use mealwise::plan_aggregator::PlanAggregator;
use mealwise::seed::seed_catalog;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn bench_body() -> BodyProfile {
    BodyProfile {
        weight_lbs: dec!(154.32),
        height_inches: dec!(68.9),
        age: 24,
        sex: SexFormula::Female,
        activity_level: ActivityLevel::ModeratelyActive,
        weight_goal: WeightGoal::Maintain,
        weight_change_per_week: dec!(0.5),
    }
}

fn bench_constraints() -> UserConstraints {
    let mut constraints = UserConstraints::default();
    constraints.add_preference(UserDietaryPreference::new(
        DietaryPattern::preset(&DietaryPatternKind::Vegetarian).unwrap(),
    ));
    constraints.add_allergy(UserAllergy::for_allergen("nut", AllergySeverity::Severe));
    constraints
}

/// Synthetic catalog cycling through protein, carb, and vegetable profiles
#[allow(clippy::cast_possible_truncation)]
fn synthetic_catalog(count: usize) -> FoodCatalog {
    let foods = (0..count).map(|index| {
        let id = FoodId(index as u32 + 1);
        let name = format!("Bench Food {index:04}");
        let food = match index % 3 {
            0 => FoodItem::new(id, name, dec!(180), dec!(24), dec!(2), dec!(8))
                .with_tags([CategoryTag::IsMeat]),
            1 => FoodItem::new(id, name, dec!(130), dec!(3), dec!(28), dec!(1))
                .with_tags([CategoryTag::IsGrain, CategoryTag::IsVegan]),
            _ => FoodItem::new(id, name, dec!(35), dec!(2), dec!(6), dec!(0))
                .with_tags([CategoryTag::IsVegan, CategoryTag::IsVegetarian]),
        };
        food.with_fiber(Decimal::from(index % 7))
    });

    FoodCatalog::new(foods).unwrap()
}

fn bench_energy_targets(c: &mut Criterion) {
    let config = PlannerConfig::default();
    let body = bench_body();

    c.bench_function("calculate_all_targets", |b| {
        b.iter(|| calculate_all_targets(black_box(&body), black_box(&config.energy)));
    });
}

fn bench_constraint_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("constraint_resolution");
    let constraints = bench_constraints();

    for count in [20_usize, 200, 2000] {
        let catalog = if count == 20 {
            seed_catalog().unwrap()
        } else {
            synthetic_catalog(count)
        };
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("get_allowed_foods", count),
            &catalog,
            |b, catalog| {
                let resolver = ConstraintResolver::new(catalog);
                b.iter(|| resolver.get_allowed_foods(black_box(&constraints)));
            },
        );
    }

    group.finish();
}

fn bench_meal_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("meal_composition");
    let config = PlannerConfig::default();

    for count in [20_usize, 200, 2000] {
        let catalog = synthetic_catalog(count);
        let eligible: Vec<&FoodItem> = catalog.foods().iter().collect();
        group.bench_with_input(
            BenchmarkId::new("compose_meal", count),
            &eligible,
            |b, eligible| {
                b.iter(|| {
                    compose_meal(
                        "Lunch Day 1",
                        MealType::Lunch,
                        black_box(dec!(820.75)),
                        black_box(eligible),
                        &config.composition,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_plan_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_generation");
    let config = PlannerConfig::default();
    let catalog = seed_catalog().unwrap();
    let aggregator = PlanAggregator::new(&catalog, &config);
    let user = UserRecord::new("bench_user")
        .with_profile(resolve_user_profile(bench_body(), &config.energy))
        .with_constraints(bench_constraints());

    for days in [1_u32, 7, 28] {
        group.bench_with_input(
            BenchmarkId::new("generate_meal_plan", days),
            &days,
            |b, &days| {
                b.iter(|| aggregator.generate_meal_plan(black_box(&user), days, None));
            },
        );
    }

    let plan = aggregator.generate_meal_plan(&user, 28, None).unwrap();
    group.bench_function("generate_grocery_list", |b| {
        b.iter(|| aggregator.generate_grocery_list(black_box(&plan)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_energy_targets,
    bench_constraint_resolution,
    bench_meal_composition,
    bench_plan_generation,
);
criterion_main!(benches);
