// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn with_json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("nestegg")
        .about("Savings goal tracking with milestones, nudges, and progress insights")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(with_json_flags(
            Command::new("dashboard")
                .about("Nudges, achievements, reminders, and the goal overview"),
        ))
        .subcommand(
            Command::new("goal")
                .about("Create, inspect, and remove savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Create a goal, optionally from a template")
                        .arg(
                            Arg::new("template")
                                .long("template")
                                .help("Template name to prefill from (see `nestegg templates`)"),
                        )
                        .arg(Arg::new("name").long("name").help("Goal name"))
                        .arg(
                            Arg::new("target")
                                .long("target")
                                .required(true)
                                .help("Target amount"),
                        )
                        .arg(
                            Arg::new("deadline")
                                .long("deadline")
                                .required(true)
                                .help("Deadline (YYYY-MM-DD)"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Goal category (retirement, emergency, debt, education, travel, home, car, wedding, custom)"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .help("Optional description"),
                        ),
                )
                .subcommand(with_json_flags(
                    Command::new("list").about("List all goals"),
                ))
                .subcommand(with_json_flags(
                    Command::new("show")
                        .about("Goal details: summary, timeline, milestones, contributions")
                        .arg(Arg::new("id").required(true).help("Goal id")),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a goal")
                        .arg(Arg::new("id").required(true).help("Goal id")),
                ),
        )
        .subcommand(
            Command::new("contribute")
                .about("Record a deposit toward a goal")
                .arg(
                    Arg::new("goal")
                        .long("goal")
                        .required(true)
                        .help("Goal id"),
                )
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .help("Contribution amount"),
                )
                .arg(
                    Arg::new("method")
                        .long("method")
                        .help("How the money was put aside (free text)"),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("Contribution date (YYYY-MM-DD, default today)"),
                ),
        )
        .subcommand(
            Command::new("nudge")
                .about("List and dismiss goal nudges")
                .subcommand(with_json_flags(
                    Command::new("list").about("Active nudges across all goals").arg(
                        Arg::new("all")
                            .long("all")
                            .action(ArgAction::SetTrue)
                            .help("Include dismissed nudges"),
                    ),
                ))
                .subcommand(
                    Command::new("dismiss")
                        .about("Dismiss one nudge")
                        .arg(Arg::new("goal").long("goal").required(true).help("Goal id"))
                        .arg(
                            Arg::new("nudge")
                                .long("nudge")
                                .required(true)
                                .help("Nudge id"),
                        ),
                ),
        )
        .subcommand(with_json_flags(
            Command::new("achievements").about("Derived achievements for the current goals"),
        ))
        .subcommand(with_json_flags(
            Command::new("reminders")
                .about("Schedule warnings, tips, and deadline countdowns")
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Seed for the tip sampler (deterministic output)"),
                ),
        ))
        .subcommand(with_json_flags(
            Command::new("templates").about("Built-in goal templates"),
        ))
        .subcommand(Command::new("doctor").about("Scan the goal list for inconsistent state"))
}
