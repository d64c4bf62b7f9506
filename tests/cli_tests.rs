// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use nestegg::models::GoalCategory;
use nestegg::{cli, commands, config::Config, store::GoalStore};
use rust_decimal::Decimal;

#[test]
fn contribute_command_trims_inputs_and_applies() {
    let mut store = GoalStore::seeded();
    let cfg = Config::default();

    let matches = cli::build_cli().get_matches_from([
        "nestegg",
        "contribute",
        "--goal",
        "1",
        "--amount",
        " 40000 ",
        "--method",
        "UPI Payment",
        "--date",
        " 2025-08-05 ",
    ]);
    if let Some(("contribute", sub)) = matches.subcommand() {
        commands::contribute::handle(&mut store, &cfg, sub).unwrap();
    } else {
        panic!("contribute command not parsed");
    }

    let goal = store.get("1").unwrap();
    assert_eq!(goal.current_amount, Decimal::from(160_000));
    assert!(goal.milestones[1].achieved);
}

#[test]
fn goal_add_prefills_from_template() {
    let mut store = GoalStore::empty();
    let cfg = Config::default();

    let matches = cli::build_cli().get_matches_from([
        "nestegg",
        "goal",
        "add",
        "--template",
        "Travel Fund",
        "--target",
        "60000",
        "--deadline",
        "2099-12-31",
    ]);
    if let Some(("goal", goal_m)) = matches.subcommand() {
        commands::goals::handle(&mut store, &cfg, goal_m).unwrap();
    } else {
        panic!("goal command not parsed");
    }

    let goals = store.goals();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].name, "Travel Fund");
    assert_eq!(goals[0].category, GoalCategory::Travel);
    assert_eq!(goals[0].icon.as_deref(), Some("plane"));
    assert_eq!(goals[0].target_amount, Decimal::from(60_000));
}

#[test]
fn goal_add_rejects_unknown_template() {
    let mut store = GoalStore::empty();
    let cfg = Config::default();

    let matches = cli::build_cli().get_matches_from([
        "nestegg",
        "goal",
        "add",
        "--template",
        "Yacht Fund",
        "--target",
        "60000",
        "--deadline",
        "2099-12-31",
    ]);
    if let Some(("goal", goal_m)) = matches.subcommand() {
        assert!(commands::goals::handle(&mut store, &cfg, goal_m).is_err());
    } else {
        panic!("goal command not parsed");
    }
    assert!(store.goals().is_empty());
}

#[test]
fn nudge_dismiss_command_updates_store() {
    let mut store = GoalStore::seeded();

    let matches = cli::build_cli().get_matches_from([
        "nestegg", "nudge", "dismiss", "--goal", "1", "--nudge", "n1",
    ]);
    if let Some(("nudge", nudge_m)) = matches.subcommand() {
        commands::nudges::handle(&mut store, nudge_m).unwrap();
    } else {
        panic!("nudge command not parsed");
    }

    let goal = store.get("1").unwrap();
    assert!(goal.nudges.iter().find(|n| n.id == "n1").unwrap().dismissed);
}
