use roster_beam::dates::{format_dates, DatedRow};
use roster_beam::flatten::flatten_records;
use roster_beam::partition::{partition_rows, PartitionKey, BIRTH_YEAR_CUTOFF};
use roster_beam::stats::PartitionStats;
use roster_beam::testing::{fixture_now, sample_raw_records, RawRecordBuilder};
use std::collections::HashSet;

fn dated_fixture() -> Vec<DatedRow> {
    let formatted = format_dates(flatten_records(&sample_raw_records(), fixture_now()));
    assert_eq!(formatted.undated, 1);
    formatted.rows
}

#[test]
fn dates_are_reformatted_without_touching_other_fields() {
    let rows = dated_fixture();
    let first = &rows[0];
    assert_eq!(first.row.dob_date, "04/12/1985");
    assert_eq!(first.row.registered_date, "05-01-2010, 08:30:00");
    assert_eq!(first.birth_year, 1985);
    assert_eq!(first.registered_year, Some(2010));
    assert_eq!(first.row.title, "miss");
}

#[test]
fn partitions_cover_exactly_the_rows_past_the_cutoff() {
    let rows = dated_fixture();
    let expected: HashSet<usize> = rows
        .iter()
        .filter(|r| r.birth_year >= BIRTH_YEAR_CUTOFF)
        .map(|r| r.row.global_index)
        .collect();

    let partitioned = partition_rows(rows, BIRTH_YEAR_CUTOFF);
    assert_eq!(partitioned.before_cutoff, 1);

    let mut seen = HashSet::new();
    for p in &partitioned.partitions {
        assert!(!p.is_empty());
        for r in p.rows() {
            assert!(seen.insert(r.row.global_index), "row in two partitions");
            assert_eq!(&PartitionKey::for_row(r), p.key());
        }
    }
    assert_eq!(seen, expected);
    assert_eq!(partitioned.total_rows(), expected.len());
}

#[test]
fn grouping_is_stable_and_keyed_by_decade_and_country() {
    let partitioned = partition_rows(dated_fixture(), BIRTH_YEAR_CUTOFF);
    let layout: Vec<(String, String, Vec<usize>)> = partitioned
        .partitions
        .iter()
        .map(|p| {
            (
                p.key().decade_label(),
                p.key().country.clone(),
                p.rows().iter().map(|r| r.row.global_index).collect(),
            )
        })
        .collect();
    assert_eq!(
        layout,
        vec![
            ("1970-th".into(), "Brazil".into(), vec![4, 7]),
            ("1980-th".into(), "Norway".into(), vec![1, 2, 3]),
            ("1990-th".into(), "France".into(), vec![6]),
        ]
    );
}

#[test]
fn cutoff_is_inclusive() {
    let raws = vec![
        RawRecordBuilder::new().born("1959-12-31T00:00:00.000Z", 64).build(),
        RawRecordBuilder::new().born("1960-01-01T00:00:00.000Z", 64).build(),
    ];
    let rows = format_dates(flatten_records(&raws, fixture_now())).rows;
    let partitioned = partition_rows(rows, 1960);
    assert_eq!(partitioned.before_cutoff, 1);
    assert_eq!(partitioned.partitions.len(), 1);
    assert_eq!(partitioned.partitions[0].key().decade, 1960);
}

#[test]
fn stats_per_partition() {
    let partitioned = partition_rows(dated_fixture(), BIRTH_YEAR_CUTOFF);
    let stats: Vec<PartitionStats> = partitioned
        .partitions
        .iter()
        .filter_map(|p| PartitionStats::compute(p, 2024))
        .collect();

    assert_eq!(
        stats.iter().map(PartitionStats::file_name).collect::<Vec<_>>(),
        vec![
            "max_age_52_avg_registered_19_popular_id_CPF.csv",
            "max_age_43_avg_registered_10_popular_id_FN.csv",
            "max_age_24_avg_registered_4_popular_id_INSEE.csv",
        ]
    );
}

#[test]
fn unknown_average_when_no_registration_year() {
    let raws = vec![RawRecordBuilder::new().registered("someday").build()];
    let rows = format_dates(flatten_records(&raws, fixture_now())).rows;
    assert_eq!(rows[0].registered_year, None);
    let partitioned = partition_rows(rows, BIRTH_YEAR_CUTOFF);
    let stats = PartitionStats::compute(&partitioned.partitions[0], 2024).unwrap();
    assert_eq!(stats.avg_registered, None);
    assert_eq!(stats.file_name(), "max_age_44_avg_registered_unknown_popular_id_FN.csv");
}
