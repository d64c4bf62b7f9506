// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod achievements;
pub mod contribute;
pub mod dashboard;
pub mod doctor;
pub mod goals;
pub mod nudges;
pub mod reminders;
pub mod templates;
