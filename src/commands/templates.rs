// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::templates;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let tpls = templates::builtin();
    if maybe_print_json(json_flag, jsonl_flag, &tpls)? {
        return Ok(());
    }

    let rows = tpls
        .iter()
        .map(|t| {
            vec![
                t.name.to_string(),
                t.category.to_string(),
                t.icon.to_string(),
                t.description.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Name", "Category", "Icon", "Description"], rows)
    );
    Ok(())
}
