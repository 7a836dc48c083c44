/// End-to-end run: load, filter, aggregate, write.
///
/// This is the only place that connects the pure statistics core to the
/// filesystem and the logger.

use std::path::Path;

use crate::analysis::{calc_avg_mass_by_species_sex, calc_heaviest_species_per_island, filter_valid_rows};
use crate::config::OutputConfig;
use crate::ingest::load_penguins;
use crate::logging::{self, Stage};
use crate::model::{PenguinsError, Record};
use crate::report::{self, RunReport};

/// Runs both aggregations over already-loaded records.
///
/// The required-field filter is applied once, before either aggregation.
pub fn analyze(input: &Path, records: Vec<Record>) -> RunReport {
    let rows_read = records.len();
    let clean = filter_valid_rows(records);
    logging::log_filter_summary(rows_read, clean.len());

    let avg = calc_avg_mass_by_species_sex(&clean);
    let heavy = calc_heaviest_species_per_island(&clean);
    logging::debug(
        Stage::Aggregate,
        None,
        &format!(
            "{} species/sex groups, {} islands",
            avg.len(),
            heavy.len()
        ),
    );

    RunReport::new(input, rows_read, clean.len(), avg, heavy)
}

/// Writes every configured output artifact for `run_report`.
pub fn write_outputs(run_report: &RunReport, output: &OutputConfig) -> Result<(), PenguinsError> {
    let avg = &run_report.avg_mass_by_species_sex;
    let heavy = &run_report.heaviest_species_per_island;

    report::write_avg_mass_csv(avg, &output.avg_mass_csv)?;
    report::write_heaviest_csv(heavy, &output.heaviest_csv)?;
    report::write_summary_txt(avg, heavy, &output.summary_txt)?;
    if let Some(path) = &output.report_json {
        report::write_run_report(run_report, path)?;
    }

    logging::info(
        Stage::Report,
        output.summary_txt.to_str(),
        "Result files written",
    );
    Ok(())
}

/// Loads `input`, computes both result sets and writes the outputs.
pub fn run(input: &Path, output: &OutputConfig) -> Result<RunReport, PenguinsError> {
    let records = load_penguins(input)?;
    let run_report = analyze(input, records);
    write_outputs(&run_report, output)?;
    Ok(run_report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::read_penguins;

    #[test]
    fn test_analyze_counts_rows_at_each_stage() {
        let csv = "species,island,sex,body_mass_g\n\
                   Adelie,Torgersen,male,3700\n\
                   Adelie,Torgersen,NA,3400\n\
                   Gentoo,Biscoe,female,4700\n";
        let records = read_penguins(csv.as_bytes()).expect("sample parses");
        let report = analyze(Path::new("inline.csv"), records);

        assert_eq!(report.rows_read, 3);
        assert_eq!(report.rows_kept, 2);
        assert_eq!(report.rows_dropped, 1);
        assert_eq!(report.avg_mass_by_species_sex.len(), 2);
        assert_eq!(report.heaviest_species_per_island.len(), 2);
    }

    #[test]
    fn test_analyze_empty_input() {
        let report = analyze(Path::new("empty.csv"), Vec::new());
        assert_eq!(report.rows_read, 0);
        assert!(report.avg_mass_by_species_sex.is_empty());
        assert!(report.heaviest_species_per_island.is_empty());
    }
}
