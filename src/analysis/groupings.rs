/// Partitions filtered records into body-mass sequences keyed by
/// (species, sex) and by island then species.
///
/// Both groupings are a single fold into a map owned by the call. Keys come
/// back in ascending lexicographic order (`BTreeMap`), while each mass
/// sequence keeps the order records arrived in.
///
/// Records with a missing key field or body mass are skipped. The filter
/// normally removes those already, but nothing here relies on it.

use std::collections::BTreeMap;

use crate::model::Record;

/// (species, sex) -> body masses in input order.
pub type SpeciesSexGroups = BTreeMap<(String, String), Vec<i64>>;

/// island -> species -> body masses in input order.
pub type IslandSpeciesGroups = BTreeMap<String, BTreeMap<String, Vec<i64>>>;

pub fn group_by_species_sex(records: &[Record]) -> SpeciesSexGroups {
    records
        .iter()
        .fold(SpeciesSexGroups::new(), |mut groups, record| {
            if let (Some(species), Some(sex), Some(mass)) =
                (&record.species, &record.sex, record.body_mass_g)
            {
                groups
                    .entry((species.clone(), sex.clone()))
                    .or_default()
                    .push(mass);
            }
            groups
        })
}

pub fn group_by_island_species(records: &[Record]) -> IslandSpeciesGroups {
    records
        .iter()
        .fold(IslandSpeciesGroups::new(), |mut nested, record| {
            if let (Some(island), Some(species), Some(mass)) =
                (&record.island, &record.species, record.body_mass_g)
            {
                nested
                    .entry(island.clone())
                    .or_default()
                    .entry(species.clone())
                    .or_default()
                    .push(mass);
            }
            nested
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
