use crate::model::Record;

/// Keeps only records that carry every field needed by both aggregations:
/// species, island, sex and body mass.
///
/// One combined check runs before either aggregation, so a record without
/// `sex` is also excluded from the per-island results even though those do
/// not group by sex. Relative order is preserved.
pub fn filter_valid_rows(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .filter(Record::has_required_fields)
        .collect()
}
