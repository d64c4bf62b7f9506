// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Goal, GoalCategory, GoalTemplate, Milestone};
use crate::templates;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Percentage of target reached, always within [0, 100].
/// A zero target reads as 0% rather than dividing by zero.
pub fn progress_percent(current: Decimal, target: Decimal) -> f64 {
    if target.is_zero() {
        return 0.0;
    }
    let pct = (current / target * Decimal::from(100))
        .to_f64()
        .unwrap_or(0.0);
    pct.clamp(0.0, 100.0)
}

/// Whole days from `today` until `deadline`, floored at 0. An overdue
/// goal reads the same as one due today.
pub fn days_remaining(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days().max(0)
}

/// Human countdown. Months are a fixed 30 days, not calendar months.
pub fn format_days_remaining(days: i64) -> String {
    if days == 0 {
        return "Due today".to_string();
    }
    if days == 1 {
        return "1 day remaining".to_string();
    }
    if days < 30 {
        return format!("{} days remaining", days);
    }

    let months = days / 30;
    if months == 1 {
        return "1 month remaining".to_string();
    }
    if months < 12 {
        return format!("{} months remaining", months);
    }

    let years = months / 12;
    let remaining_months = months % 12;
    let year_part = if years == 1 {
        "1 year".to_string()
    } else {
        format!("{} years", years)
    };
    if remaining_months == 0 {
        return format!("{} remaining", year_part);
    }
    let month_part = if remaining_months == 1 {
        "1 month".to_string()
    } else {
        format!("{} months", remaining_months)
    };
    format!("{} {} remaining", year_part, month_part)
}

/// Amount to put aside each month to land on target by the deadline.
/// The horizon floors at one month so a goal due tomorrow does not ask
/// for an absurd figure, and an over-funded goal recommends zero.
pub fn monthly_savings_recommendation(goal: &Goal, today: NaiveDate) -> Decimal {
    let remaining = goal.remaining_amount();
    if remaining <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let days = days_remaining(goal.deadline, today);
    let mut months = Decimal::from(days) / Decimal::from(30);
    if months < Decimal::ONE {
        months = Decimal::ONE;
    }
    (remaining / months).ceil()
}

/// Fixed encouragement copy per progress band. Upper bounds are
/// exclusive: exactly 25% lands in the "<50" band.
pub fn motivational_message(progress: f64) -> &'static str {
    if progress < 10.0 {
        "Every journey begins with a single step. You've started!"
    } else if progress < 25.0 {
        "You're building momentum! Keep it going!"
    } else if progress < 50.0 {
        "Making great progress! You're on your way!"
    } else if progress < 75.0 {
        "You're more than halfway there! Keep pushing!"
    } else if progress < 90.0 {
        "The finish line is in sight! You're doing amazing!"
    } else if progress < 100.0 {
        "So close! Just one final push to reach your goal!"
    } else {
        "Congratulations! You've reached your goal!"
    }
}

/// A goal needs attention when the share of its time window already
/// spent exceeds the share of money saved by more than ten points.
/// A zero-length window (deadline on or before creation) is never
/// flagged; `doctor` reports those instead.
pub fn needs_attention(goal: &Goal, today: NaiveDate) -> bool {
    let days_total = (goal.deadline - goal.created_at).num_days();
    if days_total <= 0 {
        return false;
    }
    let progress = progress_percent(goal.current_amount, goal.target_amount);
    let remaining = days_remaining(goal.deadline, today);
    let elapsed_pct = (days_total - remaining) as f64 / days_total as f64 * 100.0;
    elapsed_pct > progress + 10.0
}

/// First unachieved checkpoint in ladder order.
pub fn next_milestone(goal: &Goal) -> Option<&Milestone> {
    goal.milestones.iter().find(|m| !m.achieved)
}

pub fn category_icon(tpls: &[GoalTemplate], category: GoalCategory) -> &'static str {
    templates::find_by_category(tpls, category)
        .map(|t| t.icon)
        .unwrap_or("target")
}
