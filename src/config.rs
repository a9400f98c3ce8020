// 🔧 Configuration - Data paths, bind address, reference year
//
// Sources, lowest to highest precedence:
//   1. Built-in defaults
//   2. JSON config file (AppConfig::from_file)
//   3. Environment variables (WUGE_*)
//
// Loading data through the config never fails hard: a missing stroke table or
// surname list degrades to defaults with a warning.

use crate::engine::NumerologyEngine;
use crate::strokes::StrokeTable;
use crate::surname::SurnameRegistry;
use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const ENV_STROKE_TABLE: &str = "WUGE_STROKE_TABLE";
pub const ENV_SURNAMES: &str = "WUGE_SURNAMES";
pub const ENV_BIND_ADDR: &str = "WUGE_BIND_ADDR";
pub const ENV_REFERENCE_YEAR: &str = "WUGE_REFERENCE_YEAR";

pub const DEFAULT_STROKE_TABLE_PATH: &str = "data/kangxi_strokes.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Stroke table file (.json object or .csv)
    pub stroke_table_path: PathBuf,

    /// Compound surname list (JSON array); None = built-in set
    pub surname_list_path: Option<PathBuf>,

    /// Server listen address
    pub bind_addr: String,

    /// Fixed "current year" for Republic/Gregorian disambiguation; None = today
    pub reference_year: Option<i32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            stroke_table_path: PathBuf::from(DEFAULT_STROKE_TABLE_PATH),
            surname_list_path: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            reference_year: None,
        }
    }
}

impl AppConfig {
    /// Read a JSON config file; missing fields take defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))
    }

    /// Defaults overlaid with environment variables
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| env::var(key).ok())
    }

    /// Overlay values from a key lookup (the process environment in production)
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_STROKE_TABLE).filter(|v| !v.trim().is_empty()) {
            self.stroke_table_path = PathBuf::from(path);
        }

        if let Some(path) = lookup(ENV_SURNAMES).filter(|v| !v.trim().is_empty()) {
            self.surname_list_path = Some(PathBuf::from(path));
        }

        if let Some(addr) = lookup(ENV_BIND_ADDR).filter(|v| !v.trim().is_empty()) {
            self.bind_addr = addr;
        }

        if let Some(raw) = lookup(ENV_REFERENCE_YEAR) {
            match raw.trim().parse::<i32>() {
                Ok(year) => self.reference_year = Some(year),
                Err(_) => warn!(value = %raw, "ignoring non-numeric {}", ENV_REFERENCE_YEAR),
            }
        }

        self
    }

    /// Year handed to the engine: the configured override, else the local calendar year
    pub fn reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }

    /// Load data files and build a ready engine
    pub fn build_engine(&self) -> NumerologyEngine {
        let strokes = StrokeTable::load_or_empty(&self.stroke_table_path);

        let surnames = match &self.surname_list_path {
            Some(path) => SurnameRegistry::load_or_default(path),
            None => SurnameRegistry::new(),
        };

        NumerologyEngine::new(strokes, surnames)
    }
}
