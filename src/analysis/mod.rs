/// Cleaning, grouping and aggregation of normalized penguin records.
///
/// Every function in here is a pure function of its input. Nothing is
/// logged and nothing fails: incomplete records are skipped and an empty
/// input simply produces empty results.
///
/// Submodules:
/// - `filter` — drops records missing a required field.
/// - `groupings` — partitions records by (species, sex) and island/species.
/// - `aggregates` — per-group averages and the heaviest species per island.

pub mod aggregates;
pub mod filter;
pub mod groupings;

pub use aggregates::{calc_avg_mass_by_species_sex, calc_heaviest_species_per_island};
pub use filter::filter_valid_rows;
