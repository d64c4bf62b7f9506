// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::metrics::{days_remaining, progress_percent};
use crate::models::{
    Achievement, AchievementKind, Goal, Reminder, ReminderKind,
};
use crate::utils::fmt_money;
use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;

/// Rebuilt from the live goal list on every call; nothing is cached.
/// Completions come first, then the aggregate savings milestone, then
/// near-completions, each group in input goal order.
pub fn generate_achievements(goals: &[Goal], today: NaiveDate, cfg: &Config) -> Vec<Achievement> {
    let mut achievements = Vec::new();

    for goal in goals.iter().filter(|g| g.is_complete()) {
        let elapsed_months = ((today - goal.created_at).num_days() / 30).max(1);
        let monthly_average = goal.target_amount / Decimal::from(elapsed_months);
        let span = if elapsed_months == 1 {
            "1 month".to_string()
        } else {
            format!("{} months", elapsed_months)
        };
        achievements.push(Achievement {
            id: format!("completed-{}", goal.id),
            kind: AchievementKind::Completed,
            title: format!("{} goal completed!", goal.name),
            description: format!(
                "You successfully reached your target of {} in {}, averaging {} a month",
                fmt_money(&goal.target_amount, cfg),
                span,
                fmt_money(&monthly_average, cfg),
            ),
            amount: Some(goal.target_amount),
            months_taken: Some(elapsed_months),
            monthly_average: Some(monthly_average),
            date: today,
        });
    }

    let total_saved: Decimal = goals.iter().map(|g| g.current_amount).sum();
    if total_saved > Decimal::ZERO {
        achievements.push(Achievement {
            id: "savings-milestone".to_string(),
            kind: AchievementKind::SavingsMilestone,
            title: "Savings Milestone".to_string(),
            description: format!(
                "You've successfully saved {} across all goals!",
                fmt_money(&total_saved, cfg),
            ),
            amount: Some(total_saved),
            months_taken: None,
            monthly_average: None,
            date: today,
        });
    }

    for goal in goals {
        let pct = progress_percent(goal.current_amount, goal.target_amount);
        if (80.0..100.0).contains(&pct) && !goal.is_complete() {
            achievements.push(Achievement {
                id: format!("approaching-{}", goal.id),
                kind: AchievementKind::AlmostThere,
                title: "Almost There!".to_string(),
                description: format!("You're about to complete your {} goal!", goal.name),
                amount: None,
                months_taken: None,
                monthly_average: None,
                date: today,
            });
        }
    }

    achievements
}

/// Behind-schedule warnings, randomly sampled tips, and deadline
/// countdowns, in that group order. The tip sampler draws from the
/// caller's rng so output can be pinned in tests.
pub fn generate_reminders<R: Rng>(
    goals: &[Goal],
    today: NaiveDate,
    cfg: &Config,
    rng: &mut R,
) -> Vec<Reminder> {
    let mut reminders = Vec::new();

    for goal in goals {
        if !is_behind_schedule(goal, today) {
            continue;
        }
        // Flat heuristic: a fifth of the target, rounded up to the
        // next 100 units.
        let shortfall = goal.target_amount * Decimal::new(2, 1);
        let suggested = (shortfall / Decimal::from(100)).ceil() * Decimal::from(100);
        reminders.push(Reminder {
            id: format!("behind-{}", goal.id),
            goal_id: goal.id.clone(),
            goal_name: goal.name.clone(),
            message: format!(
                "Your \"{}\" goal is behind schedule. Consider increasing your SIP by {}.",
                goal.name,
                fmt_money(&suggested, cfg),
            ),
            action_text: Some("Adjust SIP".to_string()),
            kind: ReminderKind::Warning,
        });
    }

    for goal in goals {
        if rng.gen_range(0.0..1.0) > 0.7 {
            reminders.push(Reminder {
                id: format!("tip-{}", goal.id),
                goal_id: goal.id.clone(),
                goal_name: goal.name.clone(),
                message: format!(
                    "Tip: Adding a bonus deposit this month to your {} goal can help you stay on track.",
                    goal.name,
                ),
                action_text: None,
                kind: ReminderKind::Suggestion,
            });
        }
    }

    for goal in goals {
        if goal.is_complete() {
            continue;
        }
        let days = days_remaining(goal.deadline, today);
        if days > 0 && days < 60 {
            reminders.push(Reminder {
                id: format!("deadline-{}", goal.id),
                goal_id: goal.id.clone(),
                goal_name: goal.name.clone(),
                message: format!(
                    "Only {} days remaining to reach your {} target.",
                    days, goal.name,
                ),
                action_text: Some("Review Goal".to_string()),
                kind: ReminderKind::Action,
            });
        }
    }

    reminders
}

/// Time-based pacing: expected progress is the elapsed share of the
/// goal window. A goal counts as behind when it has less than 80% of
/// that and is not already nearly done. Zero-length windows never
/// qualify.
fn is_behind_schedule(goal: &Goal, today: NaiveDate) -> bool {
    if goal.is_complete() {
        return false;
    }
    let total_days = (goal.deadline - goal.created_at).num_days();
    if total_days <= 0 {
        return false;
    }
    let days_elapsed = (today - goal.created_at).num_days();
    let expected = days_elapsed as f64 / total_days as f64;
    let actual = progress_percent(goal.current_amount, goal.target_amount) / 100.0;
    actual < expected * 0.8 && actual < 0.95
}
