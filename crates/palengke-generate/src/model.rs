use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Options for the generation engine.
///
/// Defaults reproduce the reference dataset: seed 2025, 200 customers,
/// 300 transactions over a 90-day window from 2025-01-01.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where output files are written.
    pub out_dir: PathBuf,
    /// Seed for the run's random generator.
    pub seed: u64,
    /// Number of customers to draw.
    pub customers: u32,
    /// Number of transactions to draw.
    pub transactions: u32,
    /// First day of the transaction date window.
    pub start_date: NaiveDate,
    /// Length of the date window in days.
    pub window_days: u32,
    /// Probability of a substitution event on a multi-item basket.
    pub substitution_rate: f64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            seed: 2025,
            customers: 200,
            transactions: 300,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            window_days: 90,
            substitution_rate: 0.1,
        }
    }
}

/// Row count for one generated table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub rows: u64,
}

/// Summary of a generation run, written as `generation_report.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub dataset_version: String,
    pub seed: u64,
    pub tables: Vec<TableReport>,
    /// Transactions with more than one line, the substitution candidates.
    pub multi_item_transactions: u64,
}
