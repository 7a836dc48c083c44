/// Plain-text summary listing both result sets as bullets.

use std::fs;
use std::path::Path;

use crate::model::{IslandHeaviest, PenguinsError, SpeciesSexAverage, format_mass};

pub const SUMMARY_TITLE: &str = "Penguins Project — Summary";
pub const AVG_MASS_HEADING: &str = "Average body mass by (species, sex):";
pub const HEAVIEST_HEADING: &str = "Heaviest species per island (by average mass):";

/// Builds the summary text. Lines are joined with `\n` and there is no
/// trailing newline.
pub fn summary_text(avg_results: &[SpeciesSexAverage], heavy_results: &[IslandHeaviest]) -> String {
    let mut lines = vec![SUMMARY_TITLE.to_string(), String::new(), AVG_MASS_HEADING.to_string()];
    lines.extend(avg_results.iter().map(|r| {
        format!(
            "- {} ({}): {} g (n={})",
            r.species,
            r.sex,
            format_mass(&r.avg_body_mass_g),
            r.n
        )
    }));

    lines.push(String::new());
    lines.push(HEAVIEST_HEADING.to_string());
    lines.extend(heavy_results.iter().map(|r| {
        format!(
            "- {}: {} — {} g (n={})",
            r.island,
            r.species,
            format_mass(&r.avg_body_mass_g),
            r.n
        )
    }));

    lines.join("\n")
}

pub fn write_summary_txt(
    avg_results: &[SpeciesSexAverage],
    heavy_results: &[IslandHeaviest],
    path: &Path,
) -> Result<(), PenguinsError> {
    fs::write(path, summary_text(avg_results, heavy_results))?;
    Ok(())
}
