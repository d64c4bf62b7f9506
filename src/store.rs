// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::progress_percent;
use crate::models::{
    Contribution, Goal, GoalCategory, Milestone, Nudge, NudgeKind,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Goal '{0}' not found")]
    GoalNotFound(String),
    #[error("Nudge '{nudge_id}' not found on goal '{goal_id}'")]
    NudgeNotFound { goal_id: String, nudge_id: String },
    #[error("Please enter a valid contribution amount")]
    InvalidContribution,
    #[error("Please enter a name for your goal")]
    MissingName,
    #[error("Please enter a valid target amount")]
    InvalidTarget,
    #[error("Please select a deadline after today")]
    InvalidDeadline,
}

/// Input for goal creation; the command layer resolves templates into
/// these fields before calling the store.
#[derive(Debug, Clone)]
pub struct GoalDraft {
    pub name: String,
    pub description: Option<String>,
    pub category: GoalCategory,
    pub icon: Option<String>,
    pub target_amount: Decimal,
    pub deadline: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct ContributionOutcome {
    pub goal: Goal,
    /// Milestones this contribution pushed over their threshold.
    pub crossed: Vec<Milestone>,
}

/// Process-lifetime goal collection. Updates replace the stored goal
/// value wholesale; nothing is written to disk.
#[derive(Debug, Default)]
pub struct GoalStore {
    goals: Vec<Goal>,
}

impl GoalStore {
    pub fn empty() -> GoalStore {
        GoalStore { goals: Vec::new() }
    }

    /// The built-in sample dataset the dashboard starts from.
    pub fn seeded() -> GoalStore {
        GoalStore {
            goals: sample_goals(),
        }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, goal_id: &str) -> Result<&Goal, StoreError> {
        self.goals
            .iter()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| StoreError::GoalNotFound(goal_id.to_string()))
    }

    /// All undismissed nudges across the list, paired with the owning
    /// goal's name for display.
    pub fn active_nudges(&self) -> Vec<(String, Nudge)> {
        self.goals
            .iter()
            .flat_map(|g| {
                g.nudges
                    .iter()
                    .filter(|n| !n.dismissed)
                    .map(|n| (g.name.clone(), n.clone()))
            })
            .collect()
    }

    pub fn create_goal(&mut self, draft: GoalDraft, today: NaiveDate) -> Result<Goal, StoreError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(StoreError::MissingName);
        }
        if draft.target_amount <= Decimal::ZERO {
            return Err(StoreError::InvalidTarget);
        }
        if draft.deadline <= today {
            return Err(StoreError::InvalidDeadline);
        }

        let goal_id = Uuid::new_v4().to_string();
        let milestones = milestone_ladder(&goal_id, &name);
        let goal = Goal {
            id: goal_id,
            name,
            description: draft.description,
            category: draft.category,
            icon: draft.icon,
            target_amount: draft.target_amount,
            current_amount: Decimal::ZERO,
            deadline: draft.deadline,
            created_at: today,
            updated_at: today,
            milestones,
            nudges: Vec::new(),
            contributions: Vec::new(),
        };
        debug!(goal = %goal.id, "created goal '{}'", goal.name);
        self.goals.push(goal.clone());
        Ok(goal)
    }

    pub fn remove_goal(&mut self, goal_id: &str) -> Result<Goal, StoreError> {
        let idx = self
            .goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or_else(|| StoreError::GoalNotFound(goal_id.to_string()))?;
        let removed = self.goals.remove(idx);
        debug!(goal = %removed.id, "removed goal '{}'", removed.name);
        Ok(removed)
    }

    /// Applies a deposit: bumps the saved amount, latches any milestone
    /// whose threshold the jump crossed (old < pct <= new, once only),
    /// appends a celebration nudge per crossed milestone, and records
    /// the contribution in the ledger.
    pub fn contribute(
        &mut self,
        goal_id: &str,
        amount: Decimal,
        method: Option<String>,
        today: NaiveDate,
    ) -> Result<ContributionOutcome, StoreError> {
        if amount <= Decimal::ZERO {
            return Err(StoreError::InvalidContribution);
        }
        let idx = self
            .goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or_else(|| StoreError::GoalNotFound(goal_id.to_string()))?;

        let mut updated = self.goals[idx].clone();
        let old_pct = progress_percent(updated.current_amount, updated.target_amount);
        let new_amount = updated.current_amount + amount;
        let new_pct = progress_percent(new_amount, updated.target_amount);

        let mut crossed = Vec::new();
        for milestone in updated.milestones.iter_mut() {
            let threshold = f64::from(milestone.percentage);
            if !milestone.achieved && old_pct < threshold && new_pct >= threshold {
                milestone.achieved = true;
                milestone.achieved_at = Some(today);
                crossed.push(milestone.clone());
            }
        }

        updated.current_amount = new_amount;
        updated.updated_at = today;
        updated.contributions.push(Contribution {
            id: Uuid::new_v4().to_string(),
            amount,
            date: today,
            method,
        });
        for milestone in &crossed {
            updated.nudges.push(Nudge {
                id: Uuid::new_v4().to_string(),
                goal_id: updated.id.clone(),
                message: milestone.message.clone(),
                kind: NudgeKind::Celebration,
                dismissed: false,
                created_at: today,
            });
        }

        debug!(
            goal = %updated.id,
            %amount,
            crossed = crossed.len(),
            "applied contribution"
        );
        self.goals[idx] = updated.clone();
        Ok(ContributionOutcome {
            goal: updated,
            crossed,
        })
    }

    /// Flips exactly the addressed nudge to dismissed; every other
    /// nudge is left untouched. Dismissed nudges stay in the list.
    pub fn dismiss_nudge(&mut self, goal_id: &str, nudge_id: &str) -> Result<(), StoreError> {
        let idx = self
            .goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or_else(|| StoreError::GoalNotFound(goal_id.to_string()))?;

        let mut updated = self.goals[idx].clone();
        let nudge = updated
            .nudges
            .iter_mut()
            .find(|n| n.id == nudge_id)
            .ok_or_else(|| StoreError::NudgeNotFound {
                goal_id: goal_id.to_string(),
                nudge_id: nudge_id.to_string(),
            })?;
        nudge.dismissed = true;
        self.goals[idx] = updated;
        debug!(goal = %goal_id, nudge = %nudge_id, "dismissed nudge");
        Ok(())
    }
}

/// The fixed 25/50/75/100 checkpoint ladder every goal starts with.
pub fn milestone_ladder(goal_id: &str, goal_name: &str) -> Vec<Milestone> {
    let steps: [(u32, String); 4] = [
        (25, format!("You've saved 25% of your {} goal!", goal_name)),
        (50, format!("Halfway to your {} goal!", goal_name)),
        (
            75,
            format!("Almost there! 75% of your {} goal saved.", goal_name),
        ),
        (
            100,
            format!("Congratulations! You've fully funded your {} goal!", goal_name),
        ),
    ];
    steps
        .into_iter()
        .enumerate()
        .map(|(i, (percentage, message))| Milestone {
            id: format!("{}-m{}", goal_id, i + 1),
            goal_id: goal_id.to_string(),
            percentage,
            achieved: false,
            message,
            achieved_at: None,
        })
        .collect()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid fixture date")
}

fn sample_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "1".to_string(),
            name: "Emergency Fund".to_string(),
            description: Some("Building a safety net for unexpected expenses".to_string()),
            category: GoalCategory::Emergency,
            icon: Some("shield".to_string()),
            target_amount: Decimal::from(300_000),
            current_amount: Decimal::from(120_000),
            deadline: d(2025, 12, 31),
            created_at: d(2024, 1, 1),
            updated_at: d(2024, 3, 15),
            milestones: vec![
                Milestone {
                    id: "m1".to_string(),
                    goal_id: "1".to_string(),
                    percentage: 25,
                    achieved: true,
                    message: "You've saved 25% of your emergency fund!".to_string(),
                    achieved_at: Some(d(2024, 2, 15)),
                },
                Milestone {
                    id: "m2".to_string(),
                    goal_id: "1".to_string(),
                    percentage: 50,
                    achieved: false,
                    message: "Halfway to your emergency fund goal!".to_string(),
                    achieved_at: None,
                },
                Milestone {
                    id: "m3".to_string(),
                    goal_id: "1".to_string(),
                    percentage: 75,
                    achieved: false,
                    message: "Almost there! 75% of your emergency fund saved.".to_string(),
                    achieved_at: None,
                },
                Milestone {
                    id: "m4".to_string(),
                    goal_id: "1".to_string(),
                    percentage: 100,
                    achieved: false,
                    message: "Congratulations! You've fully funded your emergency fund!"
                        .to_string(),
                    achieved_at: None,
                },
            ],
            nudges: vec![
                Nudge {
                    id: "n1".to_string(),
                    goal_id: "1".to_string(),
                    message:
                        "Try saving an extra ₹5,000 this month to reach your next milestone faster!"
                            .to_string(),
                    kind: NudgeKind::Suggestion,
                    dismissed: false,
                    created_at: d(2024, 3, 1),
                },
                Nudge {
                    id: "n2".to_string(),
                    goal_id: "1".to_string(),
                    message: "Great progress! You're doing better than 70% of savers.".to_string(),
                    kind: NudgeKind::Encouragement,
                    dismissed: false,
                    created_at: d(2024, 3, 10),
                },
            ],
            contributions: vec![
                Contribution {
                    id: "c1".to_string(),
                    amount: Decimal::from(15_000),
                    date: d(2024, 2, 15),
                    method: Some("Bank Transfer".to_string()),
                },
                Contribution {
                    id: "c2".to_string(),
                    amount: Decimal::from(20_000),
                    date: d(2024, 3, 10),
                    method: Some("UPI Payment".to_string()),
                },
                Contribution {
                    id: "c3".to_string(),
                    amount: Decimal::from(18_000),
                    date: d(2024, 4, 5),
                    method: Some("Auto-debit".to_string()),
                },
            ],
        },
        Goal {
            id: "2".to_string(),
            name: "New Laptop".to_string(),
            description: Some("Saving for a new work laptop".to_string()),
            category: GoalCategory::Custom,
            icon: Some("laptop".to_string()),
            target_amount: Decimal::from(85_000),
            current_amount: Decimal::from(65_000),
            deadline: d(2024, 8, 15),
            created_at: d(2024, 1, 15),
            updated_at: d(2024, 4, 1),
            milestones: vec![
                Milestone {
                    id: "m5".to_string(),
                    goal_id: "2".to_string(),
                    percentage: 25,
                    achieved: true,
                    message: "You've saved 25% for your new laptop!".to_string(),
                    achieved_at: Some(d(2024, 2, 1)),
                },
                Milestone {
                    id: "m6".to_string(),
                    goal_id: "2".to_string(),
                    percentage: 50,
                    achieved: true,
                    message: "Halfway to your new laptop!".to_string(),
                    achieved_at: Some(d(2024, 3, 5)),
                },
                Milestone {
                    id: "m7".to_string(),
                    goal_id: "2".to_string(),
                    percentage: 75,
                    achieved: false,
                    message: "Almost there! 75% saved for your new laptop.".to_string(),
                    achieved_at: None,
                },
                Milestone {
                    id: "m8".to_string(),
                    goal_id: "2".to_string(),
                    percentage: 100,
                    achieved: false,
                    message: "Congratulations! You can now buy your new laptop!".to_string(),
                    achieved_at: None,
                },
            ],
            nudges: vec![Nudge {
                id: "n3".to_string(),
                goal_id: "2".to_string(),
                message: "You're so close! Just ₹20,000 more to go for your new laptop."
                    .to_string(),
                kind: NudgeKind::Encouragement,
                dismissed: false,
                created_at: d(2024, 4, 1),
            }],
            contributions: Vec::new(),
        },
        Goal {
            id: "3".to_string(),
            name: "Goa Vacation".to_string(),
            description: Some("End of year family vacation to Goa".to_string()),
            category: GoalCategory::Travel,
            icon: Some("plane".to_string()),
            target_amount: Decimal::from(60_000),
            current_amount: Decimal::from(15_000),
            deadline: d(2024, 12, 20),
            created_at: d(2024, 2, 1),
            updated_at: d(2024, 3, 20),
            milestones: vec![
                Milestone {
                    id: "m9".to_string(),
                    goal_id: "3".to_string(),
                    percentage: 25,
                    achieved: true,
                    message: "You've saved 25% for your Goa vacation!".to_string(),
                    achieved_at: Some(d(2024, 3, 15)),
                },
                Milestone {
                    id: "m10".to_string(),
                    goal_id: "3".to_string(),
                    percentage: 50,
                    achieved: false,
                    message: "Halfway to your Goa vacation savings!".to_string(),
                    achieved_at: None,
                },
                Milestone {
                    id: "m11".to_string(),
                    goal_id: "3".to_string(),
                    percentage: 75,
                    achieved: false,
                    message: "Almost there! 75% saved for your Goa vacation.".to_string(),
                    achieved_at: None,
                },
                Milestone {
                    id: "m12".to_string(),
                    goal_id: "3".to_string(),
                    percentage: 100,
                    achieved: false,
                    message: "Congratulations! Your Goa vacation is fully funded!".to_string(),
                    achieved_at: None,
                },
            ],
            nudges: vec![Nudge {
                id: "n4".to_string(),
                goal_id: "3".to_string(),
                message:
                    "If you save an extra ₹5,000 monthly, you'll reach your goal 2 months earlier!"
                        .to_string(),
                kind: NudgeKind::Suggestion,
                dismissed: false,
                created_at: d(2024, 3, 20),
            }],
            contributions: Vec::new(),
        },
    ]
}
