//! Core contracts and helpers for Palengke.
//!
//! This crate defines the entity records shared by the generator and the
//! CLI, the zero-padded ID sequencing, and dataset validation helpers.

pub mod error;
pub mod ids;
pub mod records;
pub mod validation;

pub use error::{Error, Result};
pub use ids::IdSequence;
pub use records::{
    Barangay, Brand, City, Customer, Dataset, Province, Region, Sku, Store, SubstitutionEvent,
    Transaction, TransactionItem, round_coordinate, round_currency,
};
pub use validation::validate_dataset;

/// Current dataset contract version recorded in report artifacts.
pub const DATASET_VERSION: &str = "0.1";
