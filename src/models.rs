// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Retirement,
    Emergency,
    Debt,
    Education,
    Travel,
    Home,
    Car,
    Wedding,
    Custom,
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GoalCategory::Retirement => "retirement",
            GoalCategory::Emergency => "emergency",
            GoalCategory::Debt => "debt",
            GoalCategory::Education => "education",
            GoalCategory::Travel => "travel",
            GoalCategory::Home => "home",
            GoalCategory::Car => "car",
            GoalCategory::Wedding => "wedding",
            GoalCategory::Custom => "custom",
        };
        f.write_str(s)
    }
}

impl FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "retirement" => Ok(GoalCategory::Retirement),
            "emergency" => Ok(GoalCategory::Emergency),
            "debt" => Ok(GoalCategory::Debt),
            "education" => Ok(GoalCategory::Education),
            "travel" => Ok(GoalCategory::Travel),
            "home" => Ok(GoalCategory::Home),
            "car" => Ok(GoalCategory::Car),
            "wedding" => Ok(GoalCategory::Wedding),
            "custom" => Ok(GoalCategory::Custom),
            other => Err(format!("Unknown goal category '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: GoalCategory,
    pub icon: Option<String>,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub milestones: Vec<Milestone>,
    pub nudges: Vec<Nudge>,
    pub contributions: Vec<Contribution>,
}

impl Goal {
    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    pub fn remaining_amount(&self) -> Decimal {
        self.target_amount - self.current_amount
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub goal_id: String,
    pub percentage: u32,
    pub achieved: bool,
    pub message: String,
    pub achieved_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NudgeKind {
    Encouragement,
    Suggestion,
    Warning,
    Celebration,
}

impl fmt::Display for NudgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NudgeKind::Encouragement => "Encouragement",
            NudgeKind::Suggestion => "Suggestion",
            NudgeKind::Warning => "Warning",
            NudgeKind::Celebration => "Celebration",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nudge {
    pub id: String,
    pub goal_id: String,
    pub message: String,
    pub kind: NudgeKind,
    pub dismissed: bool,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub method: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalTemplate {
    pub name: &'static str,
    pub category: GoalCategory,
    pub icon: &'static str,
    pub description: &'static str,
}

/// Synthesized from the goal list on every call; never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub kind: AchievementKind,
    pub title: String,
    pub description: String,
    pub amount: Option<Decimal>,
    /// Months the goal took, completion achievements only.
    pub months_taken: Option<i64>,
    /// Average monthly saving the completion implied.
    pub monthly_average: Option<Decimal>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementKind {
    Completed,
    SavingsMilestone,
    AlmostThere,
}

impl AchievementKind {
    pub fn icon(&self) -> &'static str {
        match self {
            AchievementKind::Completed => "trophy",
            AchievementKind::SavingsMilestone => "sparkles",
            AchievementKind::AlmostThere => "calendar",
        }
    }
}

/// Synthesized from the goal list on every call; never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub goal_id: String,
    pub goal_name: String,
    pub message: String,
    pub action_text: Option<String>,
    pub kind: ReminderKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Warning,
    Suggestion,
    Action,
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReminderKind::Warning => "warning",
            ReminderKind::Suggestion => "suggestion",
            ReminderKind::Action => "action",
        };
        f.write_str(s)
    }
}

impl ReminderKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ReminderKind::Warning => "alert",
            ReminderKind::Suggestion => "lightbulb",
            ReminderKind::Action => "clock",
        }
    }
}
