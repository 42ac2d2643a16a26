use crate::algorithms::random_classifier::{RandomClassifier, LINE_SERIES};
use crate::algorithms::random_clusterer::RandomClusterer;
use crate::algorithms::Algorithm;
use crate::dataset::{Point, PointDataset, UNLABELED};
use crate::tests::test_data::make_square;

#[test]
fn clusterer_relabels_only_labeled_records() {
    crate::tests::init();

    let mut data = make_square();
    data.insert("@ghost", UNLABELED, Point::new(5.0, 5.0));

    let mut algo = RandomClusterer::new(2).with_seed(11);
    algo.progress_step(&mut data);

    assert_eq!(data.label_of("@ghost"), Some(UNLABELED));
    for name in ["@p1", "@p2", "@p3", "@p4"] {
        let label = data.label_of(name).unwrap();
        assert!(label == "0" || label == "1", "unexpected label '{label}'");
    }
}

#[test]
fn clusterer_clamps_cluster_count() {
    assert_eq!(RandomClusterer::new(9).clusters(), 4);
    assert_eq!(RandomClusterer::new(0).clusters(), 2);
}

#[test]
fn classifier_reports_line_at_x_bounds() {
    let mut data = make_square();
    let before: Vec<(String, String)> = data
        .iter()
        .map(|(n, _, l)| (n.to_string(), l.to_string()))
        .collect();

    let mut algo = RandomClassifier::new().with_seed(3);
    let series = algo.progress_step(&mut data);

    let line = series.get(LINE_SERIES).expect("line series missing");
    assert_eq!(line.len(), 2);
    assert_eq!(line[0].x, 0.0);
    assert_eq!(line[1].x, 10.0);
    assert!(line[0].y.is_finite() && line[1].y.is_finite());

    // The data series travel alongside the line, untouched.
    assert_eq!(series.get("red").map(Vec::len), Some(2));
    assert_eq!(series.get("blue").map(Vec::len), Some(2));
    let after: Vec<(String, String)> = data
        .iter()
        .map(|(n, _, l)| (n.to_string(), l.to_string()))
        .collect();
    assert_eq!(before, after, "classifier must not mutate the dataset");
}

#[test]
fn classifier_is_deterministic_under_a_seed() {
    let mut data_a = make_square();
    let mut data_b = make_square();

    let series_a = RandomClassifier::new().with_seed(21).progress_step(&mut data_a);
    let series_b = RandomClassifier::new().with_seed(21).progress_step(&mut data_b);

    assert_eq!(series_a.get(LINE_SERIES), series_b.get(LINE_SERIES));
}
