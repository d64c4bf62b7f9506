// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::insights::generate_reminders;
use crate::store::GoalStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn handle(store: &GoalStore, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let today = chrono::Utc::now().date_naive();

    // --seed pins the tip sampler so output is reproducible.
    let mut rng = match m.get_one::<u64>("seed") {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };

    let reminders = generate_reminders(store.goals(), today, cfg, &mut rng);
    if maybe_print_json(json_flag, jsonl_flag, &reminders)? {
        return Ok(());
    }

    if reminders.is_empty() {
        println!("✅ all goals on track — no reminders");
        return Ok(());
    }
    println!("⏰ Reminders");
    let rows = reminders
        .into_iter()
        .map(|r| {
            vec![
                r.goal_name,
                r.kind.to_string(),
                r.message,
                r.action_text.unwrap_or_else(|| "—".to_string()),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Goal", "Kind", "Message", "Action"], rows)
    );
    Ok(())
}
