/// CSV result files for both aggregations.
///
/// Rows are written in the order the aggregators return them; an empty
/// result list produces a header-only file.

use std::io;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::model::{IslandHeaviest, PenguinsError, SpeciesSexAverage, format_mass};

pub const AVG_MASS_HEADER: [&str; 4] = ["species", "sex", "avg_body_mass_g", "n"];
pub const HEAVIEST_HEADER: [&str; 4] = ["island", "species", "avg_body_mass_g", "n"];

fn write_avg_mass<W: io::Write>(
    writer: &mut Writer<W>,
    results: &[SpeciesSexAverage],
) -> Result<(), PenguinsError> {
    writer.write_record(AVG_MASS_HEADER)?;
    for row in results {
        let avg = format_mass(&row.avg_body_mass_g);
        let n = row.n.to_string();
        writer.write_record([row.species.as_str(), row.sex.as_str(), avg.as_str(), n.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_heaviest<W: io::Write>(
    writer: &mut Writer<W>,
    results: &[IslandHeaviest],
) -> Result<(), PenguinsError> {
    writer.write_record(HEAVIEST_HEADER)?;
    for row in results {
        let avg = format_mass(&row.avg_body_mass_g);
        let n = row.n.to_string();
        writer.write_record([row.island.as_str(), row.species.as_str(), avg.as_str(), n.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String, PenguinsError> {
    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Renders species×sex averages as CSV text.
pub fn avg_mass_csv_string(results: &[SpeciesSexAverage]) -> Result<String, PenguinsError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    write_avg_mass(&mut writer, results)?;
    into_string(writer)
}

/// Renders heaviest-per-island results as CSV text.
pub fn heaviest_csv_string(results: &[IslandHeaviest]) -> Result<String, PenguinsError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    write_heaviest(&mut writer, results)?;
    into_string(writer)
}

pub fn write_avg_mass_csv(results: &[SpeciesSexAverage], path: &Path) -> Result<(), PenguinsError> {
    let mut writer = Writer::from_path(path)?;
    write_avg_mass(&mut writer, results)
}

pub fn write_heaviest_csv(results: &[IslandHeaviest], path: &Path) -> Result<(), PenguinsError> {
    let mut writer = Writer::from_path(path)?;
    write_heaviest(&mut writer, results)
}
