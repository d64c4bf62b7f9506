// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::metrics::{monthly_savings_recommendation, motivational_message, progress_percent};
use crate::store::GoalStore;
use crate::utils::{fmt_money, parse_date, parse_decimal};
use anyhow::Result;

pub fn handle(store: &mut GoalStore, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    let goal_id = m.get_one::<String>("goal").unwrap();
    let amount = parse_decimal(m.get_one::<String>("amount").unwrap())?;
    let method = m.get_one::<String>("method").map(|s| s.to_string());
    let today = match m.get_one::<String>("date") {
        Some(raw) => parse_date(raw)?,
        None => chrono::Utc::now().date_naive(),
    };

    let outcome = store.contribute(goal_id, amount, method, today)?;
    let goal = &outcome.goal;

    if outcome.crossed.is_empty() {
        println!(
            "Contribution Added! You've added {} to your {} goal.",
            fmt_money(&amount, cfg),
            goal.name
        );
    } else {
        println!("Milestone Achieved! 🎉");
        for milestone in &outcome.crossed {
            println!("  {}", milestone.message);
        }
    }

    let progress = progress_percent(goal.current_amount, goal.target_amount);
    println!(
        "Progress: {:.0}% ({} of {})",
        progress,
        fmt_money(&goal.current_amount, cfg),
        fmt_money(&goal.target_amount, cfg)
    );
    if !goal.is_complete() {
        println!(
            "Recommended monthly contribution: {}",
            fmt_money(&monthly_savings_recommendation(goal, today), cfg)
        );
    }
    println!("\"{}\"", motivational_message(progress));
    Ok(())
}
