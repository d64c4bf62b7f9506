// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use nestegg::metrics::{
    days_remaining, format_days_remaining, monthly_savings_recommendation, motivational_message,
    needs_attention, next_milestone, progress_percent,
};
use nestegg::models::{Goal, GoalCategory};
use nestegg::store::milestone_ladder;
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn goal(target: i64, current: i64, created_at: NaiveDate, deadline: NaiveDate) -> Goal {
    Goal {
        id: "g1".to_string(),
        name: "Test Goal".to_string(),
        description: None,
        category: GoalCategory::Custom,
        icon: None,
        target_amount: Decimal::from(target),
        current_amount: Decimal::from(current),
        deadline,
        created_at,
        updated_at: created_at,
        milestones: milestone_ladder("g1", "Test Goal"),
        nudges: Vec::new(),
        contributions: Vec::new(),
    }
}

#[test]
fn progress_quarter_is_exact() {
    assert_eq!(
        progress_percent(Decimal::from(250_000), Decimal::from(1_000_000)),
        25.0
    );
}

#[test]
fn progress_zero_target_reads_zero() {
    assert_eq!(progress_percent(Decimal::from(500), Decimal::ZERO), 0.0);
}

#[test]
fn progress_caps_at_hundred() {
    assert_eq!(
        progress_percent(Decimal::from(150), Decimal::from(100)),
        100.0
    );
    assert_eq!(
        progress_percent(Decimal::from(100), Decimal::from(100)),
        100.0
    );
}

#[test]
fn progress_negative_current_clamps_to_zero() {
    assert_eq!(progress_percent(Decimal::from(-50), Decimal::from(100)), 0.0);
}

#[test]
fn days_remaining_tomorrow_is_one() {
    let today = date(2025, 8, 5);
    assert_eq!(days_remaining(date(2025, 8, 6), today), 1);
}

#[test]
fn days_remaining_never_negative() {
    let today = date(2025, 8, 5);
    assert_eq!(days_remaining(date(2025, 8, 5), today), 0);
    assert_eq!(days_remaining(date(2024, 1, 1), today), 0);
}

#[test]
fn countdown_formatting_bands() {
    assert_eq!(format_days_remaining(0), "Due today");
    assert_eq!(format_days_remaining(1), "1 day remaining");
    assert_eq!(format_days_remaining(15), "15 days remaining");
    assert_eq!(format_days_remaining(29), "29 days remaining");
    // 30-day months, not calendar months
    assert_eq!(format_days_remaining(45), "1 month remaining");
    assert_eq!(format_days_remaining(60), "2 months remaining");
    assert_eq!(format_days_remaining(360), "1 year remaining");
    assert_eq!(format_days_remaining(400), "1 year 1 month remaining");
    assert_eq!(format_days_remaining(730), "2 years remaining");
    assert_eq!(format_days_remaining(800), "2 years 2 months remaining");
}

#[test]
fn motivational_band_boundaries_are_exclusive() {
    assert_eq!(
        motivational_message(25.0),
        "Making great progress! You're on your way!"
    );
    assert_eq!(
        motivational_message(100.0),
        "Congratulations! You've reached your goal!"
    );
    assert_eq!(
        motivational_message(0.0),
        "Every journey begins with a single step. You've started!"
    );
    assert_eq!(
        motivational_message(99.9),
        "So close! Just one final push to reach your goal!"
    );
}

#[test]
fn recommendation_matches_nine_month_horizon() {
    let today = date(2025, 1, 1);
    // 270 days = 9 fixed months
    let g = goal(300_000, 120_000, date(2024, 1, 1), date(2025, 9, 28));
    assert_eq!(
        monthly_savings_recommendation(&g, today),
        Decimal::from(20_000)
    );
}

#[test]
fn recommendation_floors_horizon_at_one_month() {
    let today = date(2025, 8, 5);
    let g = goal(10_000, 0, date(2025, 1, 1), date(2025, 8, 5));
    assert_eq!(
        monthly_savings_recommendation(&g, today),
        Decimal::from(10_000)
    );
}

#[test]
fn recommendation_is_zero_when_overfunded() {
    let today = date(2025, 1, 1);
    let g = goal(10_000, 12_000, date(2024, 1, 1), date(2025, 12, 31));
    assert_eq!(monthly_savings_recommendation(&g, today), Decimal::ZERO);
}

#[test]
fn attention_flags_goal_behind_pace() {
    let today = date(2025, 8, 5);
    // 80% of the window gone, 40% funded
    let g = goal(
        100_000,
        40_000,
        today - chrono::Days::new(80),
        today + chrono::Days::new(20),
    );
    assert!(needs_attention(&g, today));
}

#[test]
fn attention_skips_goal_on_pace() {
    let today = date(2025, 8, 5);
    // 20% of the window gone, 40% funded
    let g = goal(
        100_000,
        40_000,
        today - chrono::Days::new(20),
        today + chrono::Days::new(80),
    );
    assert!(!needs_attention(&g, today));
}

#[test]
fn attention_guards_zero_length_window() {
    let today = date(2025, 8, 5);
    let g = goal(100_000, 0, today, today);
    assert!(!needs_attention(&g, today));
}

#[test]
fn next_milestone_is_first_unachieved() {
    let today = date(2025, 8, 5);
    let mut g = goal(100_000, 30_000, today - chrono::Days::new(10), today + chrono::Days::new(90));
    g.milestones[0].achieved = true;
    g.milestones[0].achieved_at = Some(today);
    let next = next_milestone(&g).unwrap();
    assert_eq!(next.percentage, 50);
}
