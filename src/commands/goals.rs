// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::metrics::{
    category_icon, days_remaining, format_days_remaining, monthly_savings_recommendation,
    motivational_message, needs_attention, progress_percent,
};
use crate::models::GoalCategory;
use crate::store::{GoalDraft, GoalStore};
use crate::templates;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Result, anyhow};

pub fn handle(store: &mut GoalStore, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, cfg, sub)?,
        Some(("list", sub)) => list(store, cfg, sub)?,
        Some(("show", sub)) => show(store, cfg, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut GoalStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let tpls = templates::builtin();
    let template = match sub.get_one::<String>("template") {
        Some(name) => Some(
            templates::find_by_name(tpls, name)
                .ok_or_else(|| anyhow!("Unknown template '{}' (see `nestegg templates`)", name))?,
        ),
        None => None,
    };

    let name = sub
        .get_one::<String>("name")
        .map(|s| s.to_string())
        .or_else(|| template.map(|t| t.name.to_string()))
        .unwrap_or_default();
    let description = sub
        .get_one::<String>("description")
        .map(|s| s.to_string())
        .or_else(|| template.map(|t| t.description.to_string()));
    let category = match sub.get_one::<String>("category") {
        Some(raw) => raw.parse::<GoalCategory>().map_err(|e| anyhow!(e))?,
        None => template.map(|t| t.category).unwrap_or(GoalCategory::Custom),
    };
    let icon = template
        .map(|t| t.icon.to_string())
        .unwrap_or_else(|| category_icon(tpls, category).to_string());
    let target_amount = parse_decimal(sub.get_one::<String>("target").unwrap())?;
    let deadline = parse_date(sub.get_one::<String>("deadline").unwrap())?;

    let today = chrono::Utc::now().date_naive();
    let goal = store.create_goal(
        GoalDraft {
            name,
            description,
            category,
            icon: Some(icon),
            target_amount,
            deadline,
        },
        today,
    )?;

    println!(
        "Goal Created! Your {} goal has been created successfully (id {}, target {}).",
        goal.name,
        goal.id,
        fmt_money(&goal.target_amount, cfg)
    );
    Ok(())
}

fn list(store: &GoalStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &store.goals())? {
        return Ok(());
    }

    let today = chrono::Utc::now().date_naive();
    let mut rows = Vec::new();
    for goal in store.goals() {
        let progress = progress_percent(goal.current_amount, goal.target_amount);
        rows.push(vec![
            goal.id.clone(),
            goal.name.clone(),
            goal.category.to_string(),
            format!("{:.0}%", progress),
            fmt_money(&goal.current_amount, cfg),
            fmt_money(&goal.target_amount, cfg),
            goal.deadline.to_string(),
            format_days_remaining(days_remaining(goal.deadline, today)),
        ]);
    }
    println!(
        "{}",
        pretty_table(
            &[
                "Id", "Name", "Category", "Progress", "Saved", "Target", "Deadline", "Time Left",
            ],
            rows
        )
    );
    Ok(())
}

fn show(store: &GoalStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let goal = store.get(id)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, goal)? {
        return Ok(());
    }

    let today = chrono::Utc::now().date_naive();
    let progress = progress_percent(goal.current_amount, goal.target_amount);
    let days = days_remaining(goal.deadline, today);

    println!("{} ({})", goal.name, goal.category);
    if let Some(desc) = &goal.description {
        println!("{}", desc);
    }
    if needs_attention(goal, today) {
        println!("⚠ Needs Attention: you're falling behind schedule. Consider increasing your savings.");
    }
    println!();

    println!(
        "{}",
        pretty_table(
            &["Target Amount", "Current Savings", "Remaining", "Progress"],
            vec![vec![
                fmt_money(&goal.target_amount, cfg),
                fmt_money(&goal.current_amount, cfg),
                fmt_money(&goal.remaining_amount(), cfg),
                format!("{:.0}%", progress),
            ]]
        )
    );

    println!(
        "{}",
        pretty_table(
            &[
                "Target Date",
                "Started On",
                "Recommended Monthly SIP",
                "Last Updated",
            ],
            vec![vec![
                format!("{} ({})", goal.deadline, format_days_remaining(days)),
                goal.created_at.to_string(),
                format!(
                    "{}/month",
                    fmt_money(&monthly_savings_recommendation(goal, today), cfg)
                ),
                goal.updated_at.to_string(),
            ]]
        )
    );

    let milestone_rows = goal
        .milestones
        .iter()
        .map(|ms| {
            vec![
                format!("{}%", ms.percentage),
                if ms.achieved { "✓".to_string() } else { "·".to_string() },
                ms.achieved_at
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "—".to_string()),
                ms.message.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Milestone", "Achieved", "When", "Message"], milestone_rows)
    );

    if !goal.contributions.is_empty() {
        let rows = goal
            .contributions
            .iter()
            .map(|c| {
                vec![
                    fmt_money(&c.amount, cfg),
                    c.date.to_string(),
                    c.method.clone().unwrap_or_else(|| "—".to_string()),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Amount", "Date", "Method"], rows));
    }

    println!("\"{}\"", motivational_message(progress));
    Ok(())
}

fn rm(store: &mut GoalStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let removed = store.remove_goal(id)?;
    println!("Goal removed: '{}' ({})", removed.name, removed.id);
    Ok(())
}
