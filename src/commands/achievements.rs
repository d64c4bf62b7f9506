// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::insights::generate_achievements;
use crate::store::GoalStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &GoalStore, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let today = chrono::Utc::now().date_naive();

    let achievements = generate_achievements(store.goals(), today, cfg);
    if maybe_print_json(json_flag, jsonl_flag, &achievements)? {
        return Ok(());
    }

    if achievements.is_empty() {
        println!("No achievements yet — keep saving!");
        return Ok(());
    }
    println!("🎉 Achievements");
    let rows = achievements
        .into_iter()
        .map(|a| vec![a.title, a.description, a.kind.icon().to_string()])
        .collect();
    println!("{}", pretty_table(&["Title", "Description", "Icon"], rows));
    Ok(())
}
