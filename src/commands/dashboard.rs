// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::insights::{generate_achievements, generate_reminders};
use crate::metrics::{
    days_remaining, format_days_remaining, needs_attention, next_milestone, progress_percent,
};
use crate::store::GoalStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn handle(store: &GoalStore, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let today = chrono::Utc::now().date_naive();
    let goals = store.goals();

    let nudges = store.active_nudges();
    let achievements = generate_achievements(goals, today, cfg);
    let mut rng = StdRng::from_entropy();
    let reminders = generate_reminders(goals, today, cfg, &mut rng);

    if json_flag || jsonl_flag {
        let payload = serde_json::json!({
            "nudges": nudges.iter().map(|(_, n)| n).collect::<Vec<_>>(),
            "achievements": achievements,
            "reminders": reminders,
            "goals": goals,
        });
        maybe_print_json(json_flag, jsonl_flag, &payload)?;
        return Ok(());
    }

    if !nudges.is_empty() {
        println!("🔔 Nudges");
        let rows = nudges
            .iter()
            .map(|(goal_name, n)| {
                vec![
                    goal_name.clone(),
                    n.kind.to_string(),
                    n.message.clone(),
                    n.id.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Goal", "Kind", "Message", "Id"], rows));
    }

    if !achievements.is_empty() {
        println!("🎉 Achievements");
        let rows = achievements
            .iter()
            .map(|a| vec![a.title.clone(), a.description.clone()])
            .collect();
        println!("{}", pretty_table(&["Title", "Description"], rows));
    }

    if !reminders.is_empty() {
        println!("⏰ Reminders");
        let rows = reminders
            .iter()
            .map(|r| {
                vec![r.goal_name.clone(), r.kind.to_string(), r.message.clone()]
            })
            .collect();
        println!("{}", pretty_table(&["Goal", "Kind", "Message"], rows));
    }

    if goals.is_empty() {
        println!("No goals yet — start by creating your first financial goal.");
        return Ok(());
    }

    println!("Your Financial Goals");
    let mut rows = Vec::new();
    for goal in goals {
        let progress = progress_percent(goal.current_amount, goal.target_amount);
        let days = days_remaining(goal.deadline, today);
        let status = if goal.is_complete() {
            "Goal Reached! 🎉".to_string()
        } else if needs_attention(goal, today) {
            "Needs Attention".to_string()
        } else {
            "On Track".to_string()
        };
        let next = next_milestone(goal)
            .map(|ms| format!("{}%", ms.percentage))
            .unwrap_or_else(|| "—".to_string());
        rows.push(vec![
            goal.id.clone(),
            goal.name.clone(),
            goal.category.to_string(),
            format!("{:.0}%", progress),
            fmt_money(&goal.current_amount, cfg),
            fmt_money(&goal.target_amount, cfg),
            format_days_remaining(days),
            status,
            next,
        ]);
    }
    println!(
        "{}",
        pretty_table(
            &[
                "Id",
                "Name",
                "Category",
                "Progress",
                "Saved",
                "Target",
                "Time Left",
                "Status",
                "Next Milestone",
            ],
            rows
        )
    );
    Ok(())
}
