/// Row normalization: raw CSV text to typed, canonicalized records.
///
/// Coercion is best effort. A value that cannot be read as the expected
/// type becomes `None` rather than an error, so one bad cell never costs
/// more than the field it sits in.

use std::str::FromStr;

use crate::model::{
    FIELD_BILL_DEPTH_MM, FIELD_BILL_LENGTH_MM, FIELD_BODY_MASS_G, FIELD_FLIPPER_LENGTH_MM,
    FIELD_ISLAND, FIELD_SEX, FIELD_SPECIES, RawRow, Record,
};

/// Tokens treated as a missing value, compared case-insensitively.
const MISSING_TOKENS: [&str; 3] = ["na", "nan", "none"];

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// Trims a raw field and maps blanks and missing-value tokens to `None`.
pub fn clean_field(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || MISSING_TOKENS
            .iter()
            .any(|token| trimmed.eq_ignore_ascii_case(token))
    {
        None
    } else {
        Some(trimmed)
    }
}

/// Parses an already-cleaned field, returning `None` on missing input or
/// on any parse failure.
pub fn parse_or_null<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.parse().ok())
}

/// ASCII title casing: the first letter of each word is uppercased and the
/// rest of the word lowercased. Any non-letter starts a new word.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for c in value.chars() {
        if c.is_ascii_alphabetic() {
            if in_word {
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c.to_ascii_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = c.is_alphabetic();
        }
    }
    out
}

fn text_field(row: &RawRow, name: &str) -> Option<String> {
    row.get(name)
        .and_then(|raw| clean_field(raw))
        .map(title_case)
}

fn numeric_field<T: FromStr>(row: &RawRow, name: &str) -> Option<T> {
    parse_or_null(row.get(name).and_then(|raw| clean_field(raw)))
}

fn is_known_field(name: &str) -> bool {
    [
        FIELD_SPECIES,
        FIELD_ISLAND,
        FIELD_SEX,
        FIELD_BODY_MASS_G,
        FIELD_BILL_LENGTH_MM,
        FIELD_BILL_DEPTH_MM,
        FIELD_FLIPPER_LENGTH_MM,
    ]
    .contains(&name)
}

// ---------------------------------------------------------------------------
// Row normalization
// ---------------------------------------------------------------------------

/// Normalizes one raw row into a `Record`.
///
/// Pure function of its input: columns absent from the row and values that
/// do not coerce both end up as `None`.
pub fn normalize_row(row: &RawRow) -> Record {
    let extra = row
        .iter()
        .filter(|(name, _)| !is_known_field(name))
        .map(|(name, raw)| (name.clone(), clean_field(raw).map(str::to_string)))
        .collect();

    Record {
        species: text_field(row, FIELD_SPECIES),
        island: text_field(row, FIELD_ISLAND),
        sex: text_field(row, FIELD_SEX),
        body_mass_g: numeric_field(row, FIELD_BODY_MASS_G),
        bill_length_mm: numeric_field(row, FIELD_BILL_LENGTH_MM),
        bill_depth_mm: numeric_field(row, FIELD_BILL_DEPTH_MM),
        flipper_length_mm: numeric_field(row, FIELD_FLIPPER_LENGTH_MM),
        extra,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
