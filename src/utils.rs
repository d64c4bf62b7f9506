// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{Config, DigitGrouping};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Whole-unit money display with the configured symbol and digit
/// grouping. The product formats INR by default, so Indian grouping
/// (12,34,567) is the default style.
pub fn fmt_money(d: &Decimal, cfg: &Config) -> String {
    let rounded = d.round();
    let digits = rounded.abs().to_string();
    let grouped = match cfg.grouping {
        DigitGrouping::Indian => group_indian(&digits),
        DigitGrouping::Western => group_western(&digits),
    };
    if rounded.is_sign_negative() {
        format!("-{}{}", cfg.currency_symbol, grouped)
    } else {
        format!("{}{}", cfg.currency_symbol, grouped)
    }
}

fn group_indian(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    // Last three digits stand alone, then pairs: 12,34,567
    let (head, tail) = s.split_at(s.len() - 3);
    let mut parts: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        parts.push(&head[i - 2..i]);
        i -= 2;
    }
    parts.push(&head[..i]);
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}

fn group_western(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let mut parts: Vec<&str> = Vec::new();
    let mut i = s.len();
    while i > 3 {
        parts.push(&s[i - 3..i]);
        i -= 3;
    }
    parts.push(&s[..i]);
    parts.reverse();
    parts.join(",")
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
