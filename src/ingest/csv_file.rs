/// CSV loader for penguin measurement files.
///
/// Reads a header row plus records with the `csv` crate and hands each row
/// to the normalizer. Rows shorter than the header leave the trailing
/// columns absent, so they normalize to `None`; extra trailing fields are
/// ignored. The file handle is released on every exit path, including an
/// undecodable row part way through the file.

use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::ingest::normalize::normalize_row;
use crate::logging::{self, Stage};
use crate::model::{PenguinsError, REQUIRED_FIELDS, RawRow, Record};

/// Returns the required columns that do not appear in `headers`.
pub fn missing_required_columns(headers: &StringRecord) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !headers.iter().any(|h| h.trim() == *field))
        .collect()
}

fn to_raw_row(headers: &StringRecord, record: &StringRecord) -> RawRow {
    headers
        .iter()
        .zip(record.iter())
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .collect()
}

/// Reads and normalizes every row from a CSV source.
///
/// Rows are not filtered here; incomplete or short records come back with
/// `None` fields. A header lacking required columns is logged, not rejected.
pub fn read_penguins<R: io::Read>(reader: R) -> Result<Vec<Record>, PenguinsError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let missing = missing_required_columns(&headers);
    if !missing.is_empty() {
        logging::warn(
            Stage::Ingest,
            None,
            &format!("Header is missing required columns: {}", missing.join(", ")),
        );
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(normalize_row(&to_raw_row(&headers, &row)));
    }

    logging::debug(
        Stage::Ingest,
        None,
        &format!("Read {} rows", records.len()),
    );
    Ok(records)
}

/// Opens `path` and reads it with [`read_penguins`].
pub fn load_penguins(path: &Path) -> Result<Vec<Record>, PenguinsError> {
    let file = std::fs::File::open(path)?;
    let records = read_penguins(file)?;
    logging::info(
        Stage::Ingest,
        path.to_str(),
        &format!("Loaded {} rows", records.len()),
    );
    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
