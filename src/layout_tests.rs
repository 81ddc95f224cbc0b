use super::*;
use crate::model::{Bucket, Series};

fn two_series() -> Vec<Series> {
    vec![
        Series::new(
            "pos",
            vec![
                Bucket::new("A", 10),
                Bucket::new("B", 20),
                Bucket::new("C", 30),
            ],
        ),
        Series::new(
            "neg",
            vec![
                Bucket::new("A", 15),
                Bucket::new("B", 25),
                Bucket::new("C", 35),
            ],
        ),
    ]
}

fn signs() -> SignMap {
    SignMap::mirrored("pos", "neg")
}

#[test]
fn positive_series_keeps_magnitude() {
    let series = vec![Series::new("pos", vec![Bucket::new("0-10", 40)])];
    let primitives = layout(&series, &signs()).unwrap();

    assert_eq!(primitives.len(), 1);
    assert_eq!(primitives[0].span_start, 0);
    assert_eq!(primitives[0].span_end, 40);
    assert_eq!(primitives[0].bucket_label, "0-10");
    assert_eq!(primitives[0].category, "pos");
}

#[test]
fn negative_series_mirrors_magnitude() {
    let series = vec![Series::new("neg", vec![Bucket::new("0-10", 25)])];
    let primitives = layout(&series, &signs()).unwrap();

    assert_eq!(primitives[0].span_end, -25);
}

#[test]
fn output_preserves_bucket_order_and_pairs_by_label() {
    let primitives = layout(&two_series(), &signs()).unwrap();

    let pos_labels: Vec<&str> = primitives
        .iter()
        .filter(|p| p.category == "pos")
        .map(|p| p.bucket_label.as_str())
        .collect();
    let neg_labels: Vec<&str> = primitives
        .iter()
        .filter(|p| p.category == "neg")
        .map(|p| p.bucket_label.as_str())
        .collect();

    assert_eq!(pos_labels, vec!["A", "B", "C"]);
    assert_eq!(neg_labels, pos_labels);
}

#[test]
fn one_primitive_per_series_bucket_pair() {
    let primitives = layout(&two_series(), &signs()).unwrap();
    assert_eq!(primitives.len(), 6);
    assert!(primitives.iter().all(|p| p.span_start == 0));
}

#[test]
fn layout_is_pure() {
    let series = two_series();
    let map = signs();
    assert_eq!(layout(&series, &map).unwrap(), layout(&series, &map).unwrap());
}

#[test]
fn unassigned_category_fails_fast() {
    let series = vec![Series::new("Other", vec![Bucket::new("A", 1)])];
    let err = layout(&series, &signs()).unwrap_err();
    assert!(matches!(
        err,
        crate::error::PyramidError::UnassignedCategory { ref category } if category == "Other"
    ));
}

#[test]
fn end_to_end_mirrored_pair() {
    let series = vec![
        Series::new("pos", vec![Bucket::new("0-10", 40)]),
        Series::new("neg", vec![Bucket::new("0-10", 25)]),
    ];
    let primitives = layout(&series, &signs()).unwrap();

    assert_eq!(
        primitives,
        vec![
            BarPrimitive {
                bucket_label: "0-10".to_string(),
                span_start: 0,
                span_end: 40,
                category: "pos".to_string(),
            },
            BarPrimitive {
                bucket_label: "0-10".to_string(),
                span_start: 0,
                span_end: -25,
                category: "neg".to_string(),
            },
        ]
    );
    assert_eq!(axis_label(-25), "25%");
}

#[test]
fn axis_label_is_sign_blind() {
    assert_eq!(axis_label(-37), "37%");
    assert_eq!(axis_label(37), "37%");
    assert_eq!(axis_label(0), "0%");
    assert_eq!(axis_label(100), "100%");
}

#[test]
fn sign_map_last_assignment_wins() {
    let map = SignMap::new()
        .assign("x", Sign::Positive)
        .assign("x", Sign::Negative);
    assert_eq!(map.sign_for("x"), Some(Sign::Negative));
}

#[test]
fn sign_map_preserves_insertion_order() {
    let map = SignMap::mirrored("right", "left");
    let categories: Vec<(&str, Sign)> = map.categories().collect();
    assert_eq!(
        categories,
        vec![("right", Sign::Positive), ("left", Sign::Negative)]
    );
}
