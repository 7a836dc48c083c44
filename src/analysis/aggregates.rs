/// Aggregators: mean body mass per (species, sex) and the heaviest species
/// on each island.
///
/// Means are compared as unrounded `f64`. Rounding to two decimal places
/// happens only when an output record is built.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::analysis::groupings::{group_by_island_species, group_by_species_sex};
use crate::model::{IslandHeaviest, Record, SpeciesSexAverage};

/// Two means closer than this are treated as tied when picking the
/// heaviest species on an island.
pub const MEAN_TIE_EPSILON: f64 = 1e-9;

/// Decimal places kept in reported averages.
pub const AVERAGE_DECIMAL_PLACES: u32 = 2;

// ---------------------------------------------------------------------------
// Numeric helpers
// ---------------------------------------------------------------------------

/// Arithmetic mean as a float division of sum by count.
///
/// The sum is accumulated in `i128`, so no realistic mass sequence can
/// overflow. Returns `None` for an empty slice.
pub fn mean_mass(masses: &[i64]) -> Option<f64> {
    if masses.is_empty() {
        return None;
    }
    let sum: i128 = masses.iter().map(|&m| i128::from(m)).sum();
    Some(sum as f64 / masses.len() as f64)
}

/// Rounds a mean to two places, half to even, on the exact binary value of
/// the float. `3700.125` becomes `3700.12` and `3700.375` becomes `3700.38`.
pub fn round_average(value: f64) -> Decimal {
    // Means of i64 masses are finite and far inside Decimal's range.
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp_with_strategy(AVERAGE_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}

// ---------------------------------------------------------------------------
// Average mass by species and sex
// ---------------------------------------------------------------------------

/// Mean body mass for every (species, sex) group, sorted by
/// (species, sex). An empty input gives an empty result.
pub fn calc_avg_mass_by_species_sex(records: &[Record]) -> Vec<SpeciesSexAverage> {
    group_by_species_sex(records)
        .into_iter()
        .filter_map(|((species, sex), masses)| {
            let mean = mean_mass(&masses)?;
            Some(SpeciesSexAverage {
                species,
                sex,
                avg_body_mass_g: round_average(mean),
                n: masses.len(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Heaviest species per island
// ---------------------------------------------------------------------------

/// One species' standing while an island is scanned.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    species: &'a str,
    mean: f64,
    n: usize,
}

impl Candidate<'_> {
    /// Whether this candidate replaces the current best.
    ///
    /// A strictly greater mean wins. Means within `MEAN_TIE_EPSILON` fall
    /// back to the larger sample, then to the alphabetically earlier name.
    fn displaces(&self, best: Option<&Candidate<'_>>) -> bool {
        let Some(best) = best else {
            return true;
        };
        if self.mean > best.mean {
            return true;
        }
        if (self.mean - best.mean).abs() < MEAN_TIE_EPSILON {
            return self.n > best.n || (self.n == best.n && self.species < best.species);
        }
        false
    }
}

/// For each island, the species with the highest mean body mass.
///
/// Islands come out in ascending order and species are visited in
/// ascending order within each island, so on a full tie the first species
/// seen keeps its place. Islands with no species never appear.
pub fn calc_heaviest_species_per_island(records: &[Record]) -> Vec<IslandHeaviest> {
    let nested = group_by_island_species(records);
    let mut results = Vec::with_capacity(nested.len());

    for (island, species_masses) in &nested {
        let mut best: Option<Candidate<'_>> = None;

        for (species, masses) in species_masses {
            let Some(mean) = mean_mass(masses) else {
                continue;
            };
            let candidate = Candidate {
                species,
                mean,
                n: masses.len(),
            };
            if candidate.displaces(best.as_ref()) {
                best = Some(candidate);
            }
        }

        if let Some(best) = best {
            results.push(IslandHeaviest {
                island: island.clone(),
                species: best.species.to_string(),
                avg_body_mass_g: round_average(best.mean),
                n: best.n,
            });
        }
    }

    results
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
