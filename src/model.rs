/// Core data types for the penguin statistics pipeline.
///
/// This module defines the shared domain model imported by all other modules:
/// the normalized `Record`, the two aggregate record shapes, field name
/// constants and the crate error type. It contains no I/O.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

pub const FIELD_SPECIES: &str = "species";
pub const FIELD_ISLAND: &str = "island";
pub const FIELD_SEX: &str = "sex";
pub const FIELD_BODY_MASS_G: &str = "body_mass_g";
pub const FIELD_BILL_LENGTH_MM: &str = "bill_length_mm";
pub const FIELD_BILL_DEPTH_MM: &str = "bill_depth_mm";
pub const FIELD_FLIPPER_LENGTH_MM: &str = "flipper_length_mm";

/// Columns every record must carry to take part in either aggregation.
pub const REQUIRED_FIELDS: [&str; 4] = [FIELD_SPECIES, FIELD_ISLAND, FIELD_SEX, FIELD_BODY_MASS_G];

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// One CSV row as read from disk: header name to raw field text.
pub type RawRow = BTreeMap<String, String>;

/// A single measured penguin after normalization.
///
/// Every field is optional: blanks and `NA`/`NaN`/`None` tokens become
/// `None`, as do numeric fields that fail to parse. Columns this crate does
/// not interpret are carried in `extra`, cleaned but otherwise untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub species: Option<String>,
    pub island: Option<String>,
    pub sex: Option<String>,
    pub body_mass_g: Option<i64>,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub flipper_length_mm: Option<i64>,
    pub extra: BTreeMap<String, Option<String>>,
}

impl Record {
    /// True when species, island, sex and body mass are all present.
    pub fn has_required_fields(&self) -> bool {
        self.species.is_some()
            && self.island.is_some()
            && self.sex.is_some()
            && self.body_mass_g.is_some()
    }
}

// ---------------------------------------------------------------------------
// Aggregate types
// ---------------------------------------------------------------------------

/// Mean body mass for one (species, sex) group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesSexAverage {
    pub species: String,
    pub sex: String,
    pub avg_body_mass_g: Decimal,
    pub n: usize,
}

/// The species with the highest mean body mass on one island.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IslandHeaviest {
    pub island: String,
    pub species: String,
    pub avg_body_mass_g: Decimal,
    pub n: usize,
}

/// Renders a rounded mass the way the result files expect it: shortest
/// form, but always with at least one fractional digit (`5100` -> `5100.0`).
pub fn format_mass(value: &Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised by the I/O wrappers around the statistics core.
///
/// The core itself never fails: unparseable values become `None` and
/// incomplete records are filtered out.
#[derive(Debug, Error)]
pub enum PenguinsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
