// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Nestegg", "nestegg"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    Indian,
    Western,
}

/// Display configuration only. Goal data itself never touches disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub currency_symbol: String,
    pub grouping: DigitGrouping,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            currency_symbol: "₹".to_string(),
            grouping: DigitGrouping::Indian,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

impl Config {
    /// Reads the config file if one exists; any missing or unreadable
    /// file falls back to defaults so the CLI always starts.
    pub fn load() -> Config {
        match config_path() {
            Ok(path) => match Config::load_from(&path) {
                Ok(cfg) => cfg,
                Err(err) => {
                    tracing::debug!("using default config: {:#}", err);
                    Config::default()
                }
            },
            Err(err) => {
                tracing::debug!("using default config: {:#}", err);
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read config at {}", path.display()))?;
        let cfg: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Parse config at {}", path.display()))?;
        Ok(cfg)
    }
}
