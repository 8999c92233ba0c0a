//! Vector match engine tests

mod common;

use common::TestFixture;
use hudiff::matching::{
    self, compare_vectors, euclidean_distance, MatchResult, ReferenceTable, SegmentationStatus,
};
use hudiff::{ParseMode, Table};
use std::path::Path;

fn reference(path: &Path) -> ReferenceTable {
    ReferenceTable {
        name: path.file_name().unwrap().to_string_lossy().into_owned(),
        table: Table::read(path, ParseMode::Lenient).map_err(|e| e.to_string()),
    }
}

fn parse(content: &str) -> Table {
    Table::parse(content, Path::new("test.csv"), ParseMode::Lenient).unwrap()
}

#[test]
fn test_identical_reference_matches_exactly() {
    let fixture = TestFixture::new().unwrap();
    let vectors = [[0.0; 7], [1.0; 7]];
    let query_path = fixture.create_hu_csv("query.csv", &vectors).unwrap();
    let reference_path = fixture.create_hu_csv("reference.csv", &vectors).unwrap();

    let query = Table::read(&query_path, ParseMode::Lenient).unwrap();
    let outcomes = compare_vectors(&query, &[reference(&reference_path)]);

    assert_eq!(outcomes.len(), 1);
    let outcome = &outcomes[0];
    assert_eq!(outcome.rows_compared, 2);
    assert_eq!(outcome.average_distance, Some(0.0));
    assert_eq!(outcome.segmentation, SegmentationStatus::Yes);
    assert!(outcome.vector_columns_present);
    assert!(outcome.is_closest_match);
    assert_eq!(outcome.overall_result, MatchResult::Success);
}

#[test]
fn test_closest_reference_wins() {
    let fixture = TestFixture::new().unwrap();
    let query_path = fixture.create_hu_csv("query.csv", &[[0.0; 7]]).unwrap();
    let near_path = fixture.create_hu_csv("near.csv", &[[0.1; 7]]).unwrap();
    let far_path = fixture.create_hu_csv("far.csv", &[[1.0; 7]]).unwrap();

    let query = Table::read(&query_path, ParseMode::Lenient).unwrap();
    let outcomes = compare_vectors(&query, &[reference(&far_path), reference(&near_path)]);

    assert!(!outcomes[0].is_closest_match);
    assert_eq!(outcomes[0].overall_result, MatchResult::Failure);
    assert!(outcomes[1].is_closest_match);
    assert_eq!(outcomes[1].overall_result, MatchResult::Success);

    let expected = (7.0f64 * 0.01).sqrt();
    assert!((outcomes[1].average_distance.unwrap() - expected).abs() < 1e-12);
}

#[test]
fn test_tie_break_prefers_first_reference() {
    let fixture = TestFixture::new().unwrap();
    let query_path = fixture.create_hu_csv("query.csv", &[[0.0; 7]]).unwrap();
    let first_path = fixture.create_hu_csv("first.csv", &[[0.5; 7]]).unwrap();
    let second_path = fixture.create_hu_csv("second.csv", &[[0.5; 7]]).unwrap();

    let query = Table::read(&query_path, ParseMode::Lenient).unwrap();
    let outcomes = compare_vectors(&query, &[reference(&first_path), reference(&second_path)]);

    assert_eq!(outcomes[0].average_distance, outcomes[1].average_distance);
    assert!(outcomes[0].is_closest_match);
    assert_eq!(outcomes[0].overall_result, MatchResult::Success);
    assert!(!outcomes[1].is_closest_match);
    assert_eq!(outcomes[1].overall_result, MatchResult::Failure);
}

#[test]
fn test_missing_hu_column_marks_reference_unusable() {
    let fixture = TestFixture::new().unwrap();
    let query_path = fixture.create_hu_csv("query.csv", &[[0.0; 7]]).unwrap();
    let incomplete_path = fixture
        .create_csv_raw(
            "incomplete.csv",
            "idx,hu1,hu2,hu3,hu5,hu6,hu7\n0,0,0,0,0,0,0\n",
        )
        .unwrap();
    let complete_path = fixture.create_hu_csv("complete.csv", &[[0.0; 7]]).unwrap();

    let query = Table::read(&query_path, ParseMode::Lenient).unwrap();
    let outcomes = compare_vectors(
        &query,
        &[reference(&incomplete_path), reference(&complete_path)],
    );

    let incomplete = &outcomes[0];
    assert!(!incomplete.vector_columns_present);
    assert_eq!(incomplete.rows_compared, 0);
    assert_eq!(incomplete.average_distance, None);
    assert_eq!(incomplete.segmentation, SegmentationStatus::No);
    assert!(!incomplete.is_closest_match);
    assert_eq!(incomplete.overall_result, MatchResult::Failure);

    assert_eq!(outcomes[1].overall_result, MatchResult::Success);
}

#[test]
fn test_partial_segmentation_when_reference_is_shorter() {
    let fixture = TestFixture::new().unwrap();
    let query_path = fixture
        .create_hu_csv("query.csv", &[[0.0; 7], [1.0; 7]])
        .unwrap();
    let short_path = fixture.create_hu_csv("short.csv", &[[0.0; 7]]).unwrap();

    let query = Table::read(&query_path, ParseMode::Lenient).unwrap();
    let outcomes = compare_vectors(&query, &[reference(&short_path)]);

    assert_eq!(outcomes[0].rows_compared, 1);
    assert_eq!(outcomes[0].segmentation, SegmentationStatus::Partial);
    assert_eq!(outcomes[0].overall_result, MatchResult::Success);
}

#[test]
fn test_invalid_rows_are_dropped_individually() {
    let table = parse(
        "idx,hu1,hu2,hu3,hu4,hu5,hu6,hu7\n\
         0,0,0,not-a-number,0,0,0,0\n\
         1,1,1,1,1,1,1,1\n\
         2,2,2\n",
    );
    let vectors = matching::extract_vectors(&table).unwrap();
    assert_eq!(vectors.len(), 1);
    assert_eq!(vectors[0], [1.0; 7]);
}

#[test]
fn test_unreadable_reference_degrades_gracefully() {
    let fixture = TestFixture::new().unwrap();
    let query_path = fixture.create_hu_csv("query.csv", &[[0.0; 7]]).unwrap();
    let good_path = fixture.create_hu_csv("good.csv", &[[0.0; 7]]).unwrap();

    let query = Table::read(&query_path, ParseMode::Lenient).unwrap();
    let missing = reference(&fixture.root().join("does-not-exist.csv"));
    assert!(missing.table.is_err());

    let outcomes = compare_vectors(&query, &[missing, reference(&good_path)]);

    assert!(outcomes[0].error.is_some());
    assert_eq!(outcomes[0].rows_compared, 0);
    assert_eq!(outcomes[0].overall_result, MatchResult::Failure);
    assert_eq!(outcomes[1].overall_result, MatchResult::Success);
}

#[test]
fn test_query_without_hu_columns_has_no_match() {
    let fixture = TestFixture::new().unwrap();
    let reference_path = fixture.create_hu_csv("reference.csv", &[[0.0; 7]]).unwrap();

    let query = parse("idx,area\n0,12.5\n");
    let outcomes = compare_vectors(&query, &[reference(&reference_path)]);

    assert_eq!(outcomes[0].rows_compared, 0);
    assert_eq!(outcomes[0].average_distance, None);
    assert!(!outcomes[0].is_closest_match);
    assert_eq!(outcomes[0].overall_result, MatchResult::Failure);
}

#[test]
fn test_hu_columns_matched_case_insensitively_among_extras() {
    let fixture = TestFixture::new().unwrap();
    let query_path = fixture.create_hu_csv("query.csv", &[[0.25; 7]]).unwrap();
    let reference_path = fixture
        .create_csv_raw(
            "shuffled.csv",
            "Label, Hu7 ,HU6,hu5,hu4,Hu3,hu2,hu1,Area\n\
             blob-1,0.25,0.25,0.25,0.25,0.25,0.25,0.25,901\n",
        )
        .unwrap();

    let query = Table::read(&query_path, ParseMode::Lenient).unwrap();
    let outcomes = compare_vectors(&query, &[reference(&reference_path)]);

    assert_eq!(outcomes[0].average_distance, Some(0.0));
    assert_eq!(outcomes[0].overall_result, MatchResult::Success);
}

#[test]
fn test_euclidean_distance_properties() {
    let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let b = [7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];

    assert_eq!(euclidean_distance(&a, &a), 0.0);
    assert_eq!(euclidean_distance(&a, &b), euclidean_distance(&b, &a));

    let unit = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    let origin = [0.0; 7];
    assert_eq!(euclidean_distance(&unit, &origin), 1.0);
}
