// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use nestegg::{cli, commands, config::Config, store::GoalStore};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let cfg = Config::load();
    // Goals live in memory for the duration of one invocation, seeded
    // from the built-in sample dataset.
    let mut store = GoalStore::seeded();
    debug!(goals = store.goals().len(), "store seeded");

    match matches.subcommand() {
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, &cfg, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&mut store, &cfg, sub)?,
        Some(("contribute", sub)) => commands::contribute::handle(&mut store, &cfg, sub)?,
        Some(("nudge", sub)) => commands::nudges::handle(&mut store, sub)?,
        Some(("achievements", sub)) => commands::achievements::handle(&store, &cfg, sub)?,
        Some(("reminders", sub)) => commands::reminders::handle(&store, &cfg, sub)?,
        Some(("templates", sub)) => commands::templates::handle(sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
