/// Output side of the pipeline: result CSVs, the text summary and the
/// optional JSON run report.

pub mod csv_output;
pub mod run_report;
pub mod summary;

pub use csv_output::{write_avg_mass_csv, write_heaviest_csv};
pub use run_report::{RunReport, write_run_report};
pub use summary::write_summary_txt;
