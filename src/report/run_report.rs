/// JSON run report: counts from each pipeline stage plus both result sets.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::model::{IslandHeaviest, PenguinsError, SpeciesSexAverage};

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub generated_at: String,
    pub input: String,
    pub rows_read: usize,
    pub rows_kept: usize,
    pub rows_dropped: usize,
    pub avg_mass_by_species_sex: Vec<SpeciesSexAverage>,
    pub heaviest_species_per_island: Vec<IslandHeaviest>,
}

impl RunReport {
    pub fn new(
        input: &Path,
        rows_read: usize,
        rows_kept: usize,
        avg_mass_by_species_sex: Vec<SpeciesSexAverage>,
        heaviest_species_per_island: Vec<IslandHeaviest>,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            input: input.display().to_string(),
            rows_read,
            rows_kept,
            rows_dropped: rows_read.saturating_sub(rows_kept),
            avg_mass_by_species_sex,
            heaviest_species_per_island,
        }
    }
}

pub fn write_run_report(report: &RunReport, path: &Path) -> Result<(), PenguinsError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_report_counts_dropped_rows() {
        let report = RunReport::new(Path::new("penguins.csv"), 344, 333, Vec::new(), Vec::new());
        assert_eq!(report.rows_dropped, 11);
        assert_eq!(report.input, "penguins.csv");
    }

    #[test]
    fn test_report_serializes_averages_as_numbers() {
        let report = RunReport::new(
            Path::new("penguins.csv"),
            1,
            1,
            vec![SpeciesSexAverage {
                species: "Adelie".to_string(),
                sex: "Female".to_string(),
                avg_body_mass_g: Decimal::new(336849, 2),
                n: 73,
            }],
            Vec::new(),
        );
        let json = serde_json::to_value(&report).expect("report serializes");
        let row = &json["avg_mass_by_species_sex"][0];
        assert_eq!(row["species"], "Adelie");
        assert_eq!(row["n"], 73);
        assert_eq!(row["avg_body_mass_g"].as_f64(), Some(3368.49));
    }
}
