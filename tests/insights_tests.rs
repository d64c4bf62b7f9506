// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Days, NaiveDate};
use nestegg::config::Config;
use nestegg::insights::{generate_achievements, generate_reminders};
use nestegg::models::{AchievementKind, Goal, GoalCategory, ReminderKind};
use nestegg::store::milestone_ladder;
use rand::rngs::mock::StepRng;
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn goal(id: &str, target: i64, current: i64, created_at: NaiveDate, deadline: NaiveDate) -> Goal {
    Goal {
        id: id.to_string(),
        name: format!("Goal {}", id),
        description: None,
        category: GoalCategory::Custom,
        icon: None,
        target_amount: Decimal::from(target),
        current_amount: Decimal::from(current),
        deadline,
        created_at,
        updated_at: created_at,
        milestones: milestone_ladder(id, "Test"),
        nudges: Vec::new(),
        contributions: Vec::new(),
    }
}

// StepRng(0, 0) samples 0.0 forever: the tip rule never fires.
fn no_tips() -> StepRng {
    StepRng::new(0, 0)
}

// StepRng(u64::MAX, 0) samples just under 1.0 forever: always fires.
fn all_tips() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

#[test]
fn achievements_empty_for_empty_list() {
    let cfg = Config::default();
    let out = generate_achievements(&[], date(2025, 8, 5), &cfg);
    assert!(out.is_empty());
}

#[test]
fn achievements_for_single_funded_goal() {
    let cfg = Config::default();
    let today = date(2025, 8, 5);
    // Completed 90 days (3 fixed months) after creation
    let g = goal("a", 90_000, 90_000, today - Days::new(90), today + Days::new(30));
    let out = generate_achievements(&[g], today, &cfg);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].kind, AchievementKind::Completed);
    assert_eq!(out[0].amount, Some(Decimal::from(90_000)));
    assert_eq!(out[0].months_taken, Some(3));
    assert_eq!(out[0].monthly_average, Some(Decimal::from(30_000)));
    assert_eq!(out[1].kind, AchievementKind::SavingsMilestone);
    assert_eq!(out[1].amount, Some(Decimal::from(90_000)));
}

#[test]
fn achievements_order_is_completed_total_then_approaching() {
    let cfg = Config::default();
    let today = date(2025, 8, 5);
    let done = goal("done", 50_000, 50_000, today - Days::new(40), today + Days::new(10));
    let close = goal("close", 100_000, 85_000, today - Days::new(40), today + Days::new(100));
    let out = generate_achievements(&[close.clone(), done], today, &cfg);

    let kinds: Vec<AchievementKind> = out.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![
            AchievementKind::Completed,
            AchievementKind::SavingsMilestone,
            AchievementKind::AlmostThere,
        ]
    );
    assert_eq!(out[2].id, format!("approaching-{}", close.id));
}

#[test]
fn almost_there_band_excludes_completed() {
    let cfg = Config::default();
    let today = date(2025, 8, 5);
    let exactly_done = goal("d", 100_000, 100_000, today - Days::new(10), today + Days::new(10));
    let out = generate_achievements(&[exactly_done], today, &cfg);
    assert!(out.iter().all(|a| a.kind != AchievementKind::AlmostThere));
}

#[test]
fn no_savings_milestone_when_nothing_saved() {
    let cfg = Config::default();
    let today = date(2025, 8, 5);
    let g = goal("z", 100_000, 0, today - Days::new(10), today + Days::new(100));
    let out = generate_achievements(&[g], today, &cfg);
    assert!(out.is_empty());
}

#[test]
fn behind_schedule_warning_with_rounded_sip_increase() {
    let cfg = Config::default();
    let today = date(2025, 8, 5);
    // 80% of the window gone, 10% funded
    let g = goal("b", 300_000, 30_000, today - Days::new(80), today + Days::new(20));
    let out = generate_reminders(&[g], today, &cfg, &mut no_tips());

    let warnings: Vec<_> = out
        .iter()
        .filter(|r| r.kind == ReminderKind::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].id, "behind-b");
    assert!(warnings[0].message.contains("behind schedule"));
    // 20% of 300000 rounded up to the nearest 100
    assert!(warnings[0].message.contains("₹60,000"));
    assert_eq!(warnings[0].action_text.as_deref(), Some("Adjust SIP"));
}

#[test]
fn behind_schedule_skips_nearly_done_goals() {
    let cfg = Config::default();
    let today = date(2025, 8, 5);
    // 96% funded: never flagged even with the window nearly spent
    let g = goal("n", 100_000, 96_000, today - Days::new(95), today + Days::new(5));
    let out = generate_reminders(&[g], today, &cfg, &mut no_tips());
    assert!(out.iter().all(|r| r.kind != ReminderKind::Warning));
}

#[test]
fn deadline_countdown_within_sixty_days() {
    let cfg = Config::default();
    let today = date(2025, 8, 5);
    // On pace (50% through window, 50% funded) so only the countdown fires
    let g = goal("d", 100_000, 50_000, today - Days::new(30), today + Days::new(30));
    let out = generate_reminders(&[g], today, &cfg, &mut no_tips());

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind, ReminderKind::Action);
    assert_eq!(out[0].id, "deadline-d");
    assert!(out[0].message.contains("Only 30 days remaining"));
}

#[test]
fn deadline_countdown_excludes_sixty_and_due_today() {
    let cfg = Config::default();
    let today = date(2025, 8, 5);
    let at_sixty = goal("s", 100_000, 50_000, today - Days::new(60), today + Days::new(60));
    let due_today = goal("t", 100_000, 90_000, today - Days::new(60), today);
    let out = generate_reminders(&[at_sixty, due_today], today, &cfg, &mut no_tips());
    assert!(out.iter().all(|r| r.kind != ReminderKind::Action));
}

#[test]
fn deadline_countdown_excludes_completed_goals() {
    let cfg = Config::default();
    let today = date(2025, 8, 5);
    let g = goal("c", 100_000, 100_000, today - Days::new(30), today + Days::new(30));
    let out = generate_reminders(&[g], today, &cfg, &mut no_tips());
    assert!(out.is_empty());
}

#[test]
fn tip_sampler_is_deterministic_under_injected_rng() {
    let cfg = Config::default();
    let today = date(2025, 8, 5);
    let goals = vec![
        goal("x", 100_000, 50_000, today - Days::new(30), today + Days::new(300)),
        goal("y", 100_000, 50_000, today - Days::new(30), today + Days::new(300)),
    ];

    let none = generate_reminders(&goals, today, &cfg, &mut no_tips());
    assert!(none.iter().all(|r| r.kind != ReminderKind::Suggestion));

    let all = generate_reminders(&goals, today, &cfg, &mut all_tips());
    let tips: Vec<_> = all
        .iter()
        .filter(|r| r.kind == ReminderKind::Suggestion)
        .collect();
    assert_eq!(tips.len(), 2);
    assert_eq!(tips[0].id, "tip-x");
    assert_eq!(tips[1].id, "tip-y");
}

#[test]
fn reminder_groups_keep_input_goal_order() {
    let cfg = Config::default();
    let today = date(2025, 8, 5);
    // Both behind schedule and inside the deadline window
    let g1 = goal("g1", 100_000, 5_000, today - Days::new(80), today + Days::new(20));
    let g2 = goal("g2", 100_000, 5_000, today - Days::new(80), today + Days::new(20));
    let out = generate_reminders(&[g1, g2], today, &cfg, &mut no_tips());

    let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["behind-g1", "behind-g2", "deadline-g1", "deadline-g2"]);
}
