// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::GoalStore;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;

const LADDER: [u32; 4] = [25, 50, 75, 100];

pub fn handle(store: &GoalStore) -> Result<()> {
    let mut rows = Vec::new();

    for goal in store.goals() {
        let label = format!("{} '{}'", goal.id, goal.name);

        if goal.target_amount <= Decimal::ZERO {
            rows.push(vec!["non_positive_target".into(), label.clone()]);
        }
        if goal.current_amount < Decimal::ZERO {
            rows.push(vec!["negative_balance".into(), label.clone()]);
        }
        // A window of zero or negative length makes pacing undefined;
        // the metrics guard it, but it is still bad data.
        if goal.deadline <= goal.created_at {
            rows.push(vec!["degenerate_window".into(), label.clone()]);
        }

        let ladder: Vec<u32> = goal.milestones.iter().map(|ms| ms.percentage).collect();
        if ladder != LADDER {
            rows.push(vec![
                "bad_milestone_ladder".into(),
                format!("{} has {:?}", label, ladder),
            ]);
        }
        for ms in &goal.milestones {
            if ms.goal_id != goal.id {
                rows.push(vec![
                    "milestone_goal_mismatch".into(),
                    format!("{} owns milestone {}", label, ms.id),
                ]);
            }
            if ms.achieved && ms.achieved_at.is_none() {
                rows.push(vec![
                    "achieved_missing_date".into(),
                    format!("{} milestone {}", label, ms.id),
                ]);
            }
        }
        for nudge in &goal.nudges {
            if nudge.goal_id != goal.id {
                rows.push(vec![
                    "nudge_goal_mismatch".into(),
                    format!("{} owns nudge {}", label, nudge.id),
                ]);
            }
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
