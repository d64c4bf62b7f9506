// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{GoalCategory, GoalTemplate};
use once_cell::sync::Lazy;

static BUILTIN: Lazy<Vec<GoalTemplate>> = Lazy::new(|| {
    vec![
        GoalTemplate {
            name: "Emergency Fund",
            category: GoalCategory::Emergency,
            icon: "shield",
            description: "Save 3-6 months of expenses for unexpected emergencies.",
        },
        GoalTemplate {
            name: "Retirement Fund",
            category: GoalCategory::Retirement,
            icon: "umbrella",
            description: "Start saving for your retirement and future financial security.",
        },
        GoalTemplate {
            name: "Education Fund",
            category: GoalCategory::Education,
            icon: "graduation-cap",
            description: "Save for education expenses for yourself or your children.",
        },
        GoalTemplate {
            name: "Debt Repayment",
            category: GoalCategory::Debt,
            icon: "credit-card",
            description: "Pay off your debts faster and become financially free.",
        },
        GoalTemplate {
            name: "Travel Fund",
            category: GoalCategory::Travel,
            icon: "plane",
            description: "Save for your dream vacation or travel adventure.",
        },
        GoalTemplate {
            name: "Home Purchase",
            category: GoalCategory::Home,
            icon: "home",
            description: "Save for a down payment on your dream home.",
        },
        GoalTemplate {
            name: "Vehicle Purchase",
            category: GoalCategory::Car,
            icon: "car",
            description: "Save for a new vehicle or major vehicle expense.",
        },
        GoalTemplate {
            name: "Wedding Fund",
            category: GoalCategory::Wedding,
            icon: "heart",
            description: "Save for your wedding or other special celebration.",
        },
    ]
});

pub fn builtin() -> &'static [GoalTemplate] {
    &BUILTIN
}

pub fn find_by_name<'a>(templates: &'a [GoalTemplate], name: &str) -> Option<&'a GoalTemplate> {
    templates
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}

pub fn find_by_category(
    templates: &[GoalTemplate],
    category: GoalCategory,
) -> Option<&GoalTemplate> {
    templates.iter().find(|t| t.category == category)
}
