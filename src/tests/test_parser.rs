use crate::dataset::{Point, PointDataset};
use crate::parser::{check_for_duplicates, parse, ParseError};
use crate::tests::test_data::{DUPLICATE_TSD, SAMPLE_TSD};

#[test]
fn parse_sample_keeps_key_sets_aligned() {
    crate::tests::init();

    let data = parse(SAMPLE_TSD).unwrap();
    assert_eq!(data.len(), 3);
    // Every name carries both a point and a label.
    for name in ["@a", "@b", "@c"] {
        assert!(data.point_of(name).is_some(), "missing point for {name}");
        assert!(data.label_of(name).is_some(), "missing label for {name}");
    }
    assert_eq!(data.names().collect::<Vec<_>>(), vec!["@a", "@b", "@c"]);
    assert_eq!(data.label_names(), vec!["red".to_string(), "blue".to_string()]);
}

#[test]
fn parse_rejects_missing_marker() {
    let err = parse("a\tred\t1,1\n").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidRecordName {
            name: "a".to_string(),
            line: 1,
        }
    );
}

#[test]
fn parse_reports_malformed_coordinate_line() {
    let err = parse("@a\tred\t1,1\n@b\tblue\t2;2\n").unwrap_err();
    assert_eq!(
        err,
        ParseError::MalformedCoordinate {
            line: 2,
            text: "2;2".to_string(),
        }
    );
}

#[test]
fn parse_rejects_incomplete_record() {
    let err = parse("@a\tred\n").unwrap_err();
    assert!(matches!(err, ParseError::IncompleteRecord { line: 1, .. }));
}

#[test]
fn parse_failure_yields_no_partial_dataset() {
    // Second line is bad; nothing of the first line may leak out.
    assert!(parse("@a\tred\t1,1\n@b\tblue\tnope\n").is_err());
}

#[test]
fn later_record_overwrites_earlier_same_name() {
    let data = parse(DUPLICATE_TSD).unwrap();
    assert_eq!(data.len(), 2);
    // The overwritten record keeps its original position.
    assert_eq!(data.names().collect::<Vec<_>>(), vec!["@a", "@b"]);
    assert_eq!(data.label_of("@a"), Some("green"));
    assert_eq!(data.point_of("@a"), Some(Point::new(9.0, 9.0)));
}

#[test]
fn duplicates_found_at_first_mismatch() {
    let mut data = PointDataset::new();
    data.insert("@a", "red", Point::new(1.0, 1.0));
    data.insert("@b", "blue", Point::new(2.0, 2.0));
    data.insert("@c", "red", Point::new(3.0, 3.0));

    let text = "@a\tred\t1,1\n@b\tblue\t2,2\n@d\tred\t3,3\n";
    assert_eq!(check_for_duplicates(text, &data), Some(2));
}

#[test]
fn duplicates_found_in_trailing_entries() {
    // A collapsed duplicate leaves the input longer than the key set.
    let data = parse(DUPLICATE_TSD).unwrap();
    assert_eq!(check_for_duplicates(DUPLICATE_TSD, &data), Some(2));
}

#[test]
fn duplicates_absent_on_clean_input() {
    let data = parse(SAMPLE_TSD).unwrap();
    assert_eq!(check_for_duplicates(SAMPLE_TSD, &data), None);
}

#[test]
fn duplicates_absent_on_shorter_input() {
    let data = parse(SAMPLE_TSD).unwrap();
    assert_eq!(check_for_duplicates("@a\tred\t1,1\n@b\tblue\t2,2\n", &data), None);
}
