/// Input side of the pipeline.
///
/// Submodules:
/// - `normalize` — turns one raw CSV row into a typed `Record`.
/// - `csv_file` — reads a penguin CSV file and normalizes every row.

pub mod csv_file;
pub mod normalize;

pub use csv_file::{load_penguins, read_penguins};
pub use normalize::normalize_row;
