/// Property-based tests for the grouping and aggregation core.
///
/// Inputs are drawn from a small alphabet of species, islands and sexes so
/// that groups collide often and tie-breaks actually get exercised.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use rust_decimal::Decimal;

use penguin_stats::analysis::aggregates::{mean_mass, round_average};
use penguin_stats::analysis::groupings::group_by_species_sex;
use penguin_stats::analysis::{calc_avg_mass_by_species_sex, calc_heaviest_species_per_island, filter_valid_rows};
use penguin_stats::model::Record;

// ---------------------------------------------------------------------------
// Strategy generators
// ---------------------------------------------------------------------------

fn arb_optional_name(names: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        6 => proptest::sample::select(names).prop_map(|s| Some(s.to_string())),
        1 => Just(None),
    ]
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        arb_optional_name(&["Adelie", "Chinstrap", "Gentoo"]),
        arb_optional_name(&["Biscoe", "Dream", "Torgersen"]),
        arb_optional_name(&["Female", "Male"]),
        prop_oneof![6 => (2500i64..6500).prop_map(Some), 1 => Just(None)],
    )
        .prop_map(|(species, island, sex, body_mass_g)| Record {
            species,
            island,
            sex,
            body_mass_g,
            ..Record::default()
        })
}

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    proptest::collection::vec(arb_record(), 0..60)
}

/// Records together with a shuffled copy of the same records.
fn arb_records_and_permutation() -> impl Strategy<Value = (Vec<Record>, Vec<Record>)> {
    arb_records().prop_flat_map(|records| {
        let shuffled = Just(records.clone()).prop_shuffle();
        (Just(records), shuffled)
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_filter_keeps_only_complete_records(records in arb_records()) {
        let total = records.iter().filter(|r| r.has_required_fields()).count();
        let kept = filter_valid_rows(records);
        prop_assert_eq!(kept.len(), total);
        prop_assert!(kept.iter().all(Record::has_required_fields));
    }

    #[test]
    fn prop_average_matches_group_sum_over_n(records in arb_records()) {
        let clean = filter_valid_rows(records);
        let groups = group_by_species_sex(&clean);
        let res = calc_avg_mass_by_species_sex(&clean);

        prop_assert_eq!(res.len(), groups.len());
        for row in &res {
            let masses = &groups[&(row.species.clone(), row.sex.clone())];
            prop_assert_eq!(row.n, masses.len());
            let sum: i64 = masses.iter().sum();
            let expected = round_average(sum as f64 / masses.len() as f64);
            prop_assert_eq!(row.avg_body_mass_g, expected);
            prop_assert!(row.avg_body_mass_g.scale() <= 2);
        }
    }

    #[test]
    fn prop_avg_output_sorted_and_order_invariant(
        (records, shuffled) in arb_records_and_permutation()
    ) {
        let a = calc_avg_mass_by_species_sex(&filter_valid_rows(records));
        let b = calc_avg_mass_by_species_sex(&filter_valid_rows(shuffled));

        let keys: Vec<_> = a.iter().map(|r| (r.species.clone(), r.sex.clone())).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(&keys, &sorted);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_heaviest_is_order_invariant(
        (records, shuffled) in arb_records_and_permutation()
    ) {
        let a = calc_heaviest_species_per_island(&filter_valid_rows(records));
        let b = calc_heaviest_species_per_island(&filter_valid_rows(shuffled));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_heaviest_never_invents_islands_or_species(records in arb_records()) {
        let clean = filter_valid_rows(records);
        let mut present: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for r in &clean {
            if let (Some(island), Some(species)) = (&r.island, &r.species) {
                present.entry(island.clone()).or_default().insert(species.clone());
            }
        }

        let res = calc_heaviest_species_per_island(&clean);
        prop_assert_eq!(res.len(), present.len());
        for row in &res {
            let species = present.get(&row.island);
            prop_assert!(species.is_some(), "island {} not in input", row.island);
            prop_assert!(species.is_some_and(|s| s.contains(&row.species)));
            prop_assert!(row.n > 0);
        }
    }

    #[test]
    fn prop_heaviest_mean_is_island_maximum(records in arb_records()) {
        let clean = filter_valid_rows(records);
        let avg_by_island_species = {
            let mut nested: BTreeMap<(String, String), Vec<i64>> = BTreeMap::new();
            for r in &clean {
                if let (Some(island), Some(species), Some(mass)) = (&r.island, &r.species, r.body_mass_g) {
                    nested.entry((island.clone(), species.clone())).or_default().push(mass);
                }
            }
            nested
        };

        for row in calc_heaviest_species_per_island(&clean) {
            let winner = round_average(
                mean_mass(&avg_by_island_species[&(row.island.clone(), row.species.clone())])
                    .unwrap_or_default(),
            );
            prop_assert_eq!(winner, row.avg_body_mass_g);
            for ((island, _), masses) in &avg_by_island_species {
                if island == &row.island {
                    let other: Decimal = round_average(mean_mass(masses).unwrap_or_default());
                    prop_assert!(other <= row.avg_body_mass_g);
                }
            }
        }
    }
}
