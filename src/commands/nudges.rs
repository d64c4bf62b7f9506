// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::GoalStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &mut GoalStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, sub)?,
        Some(("dismiss", sub)) => dismiss(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(store: &GoalStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let include_dismissed = sub.get_flag("all");

    let nudges: Vec<(String, crate::models::Nudge)> = if include_dismissed {
        store
            .goals()
            .iter()
            .flat_map(|g| g.nudges.iter().map(|n| (g.name.clone(), n.clone())))
            .collect()
    } else {
        store.active_nudges()
    };

    if maybe_print_json(
        json_flag,
        jsonl_flag,
        &nudges.iter().map(|(_, n)| n).collect::<Vec<_>>(),
    )? {
        return Ok(());
    }

    if nudges.is_empty() {
        println!("No nudges right now.");
        return Ok(());
    }
    let rows = nudges
        .iter()
        .map(|(goal_name, n)| {
            vec![
                goal_name.clone(),
                n.kind.to_string(),
                n.message.clone(),
                n.created_at.to_string(),
                if n.dismissed { "yes".to_string() } else { "no".to_string() },
                n.id.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Goal", "Kind", "Message", "Created", "Dismissed", "Id"],
            rows
        )
    );
    Ok(())
}

fn dismiss(store: &mut GoalStore, sub: &clap::ArgMatches) -> Result<()> {
    let goal_id = sub.get_one::<String>("goal").unwrap();
    let nudge_id = sub.get_one::<String>("nudge").unwrap();
    store.dismiss_nudge(goal_id, nudge_id)?;
    println!("Nudge dismissed");
    Ok(())
}
