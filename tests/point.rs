//! Behaviour of the point value type through the public API

use assert_matches::assert_matches;
use plib::{Axis, ErrorKind, Point, PointError};
use serde_json::json;

#[test]
fn test_init() {
    let p = Point::new(1, 2);
    assert_eq!(p.x(), 1);
    assert_eq!(p.y(), 2);

    let err = Point::try_from_values(&json!(1.1), &json!(2)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_matches!(err, PointError::NotAnInteger { axis: Axis::X, .. });
}

#[test]
fn test_add() {
    assert_eq!(Point::new(1, 2) + Point::new(3, 4), Point::new(4, 6));
}

#[test]
fn test_add_assign() {
    let mut p = Point::new(1, 2);
    p += Point::new(3, 4);
    assert_eq!((p.x(), p.y()), (4, 6));
}

#[test]
fn test_eq() {
    let p1 = Point::new(1, 2);
    assert_eq!(p1, Point::new(1, 2));
    assert_ne!(p1, Point::new(3, 4));

    assert!(p1.equals(&Point::new(1, 2)).unwrap());
    assert!(!p1.equals(&Point::new(3, 4)).unwrap());
    assert_matches!(p1.equals(&1), Err(PointError::Comparison { other: "i32" }));
}

#[test]
fn test_sub() {
    let expected = Point::new(-2, -2);
    assert_eq!(Point::new(1, 2) - Point::new(3, 4), expected);
    assert_eq!(Point::new(1, 2).subtract(Point::new(3, 4)), expected);
}

#[test]
fn test_neg() {
    assert_eq!(-Point::new(1, 2), Point::new(-1, -2));
    assert_eq!(Point::new(1, 2).negate(), Point::new(-1, -2));
}

#[test]
fn test_distance() {
    let d = Point::new(1, 2).distance_to(Point::new(4, 6));
    assert!((d - 5.0).abs() < 1e-6);
}

#[test]
fn test_distance_across_the_whole_range() {
    let d = Point::new(i64::MAX, 0).distance_to(Point::new(-1, 0));
    assert_eq!(d, 9_223_372_036_854_775_808.0);

    let d = Point::new(i64::MIN, 0).distance_to(Point::new(i64::MAX, 0));
    assert_eq!(d, 18_446_744_073_709_551_616.0);
}

#[test]
fn test_checked_arithmetic_at_the_edges() {
    assert_eq!(Point::new(i64::MAX, 0).checked_add(Point::new(1, 0)), None);
    assert_eq!(Point::new(i64::MIN, 0).checked_neg(), None);
    assert_eq!(
        Point::new(i64::MIN, 3).checked_sub(Point::new(-1, 3)),
        Some(Point::new(i64::MIN + 1, 0))
    );
}

#[test]
fn test_display() {
    assert_eq!(Point::new(1, 2).to_string(), "Point(1, 2)");
    assert_eq!(format!("{}", Point::new(-7, 0)), "Point(-7, 0)");
}

#[test]
fn test_is_origin() {
    assert!(Point::new(0, 0).is_origin());
    assert!(!Point::new(1, 2).is_origin());
}

#[test]
fn test_to_json() {
    assert_eq!(Point::new(5, 7).to_json(), r#"{"x": 5, "y": 7}"#);
    assert_eq!(
        Point::new(-1, i64::MAX).to_json(),
        r#"{"x": -1, "y": 9223372036854775807}"#
    );
}

#[test]
fn test_from_json() {
    let p = Point::from_json(r#"{"x": 5, "y": 7}"#).unwrap();
    assert_eq!(p, Point::new(5, 7));

    let parsed: Point = r#"{"y":7,"x":5}"#.parse().unwrap();
    assert_eq!(parsed, p);
}

#[test]
fn test_from_json_errors_are_format_kind() {
    assert_matches!(Point::from_json("not json"), Err(PointError::Format(_)));
    assert_matches!(
        Point::from_json(r#"{"x": 5}"#),
        Err(PointError::Format(msg)) if msg.starts_with("missing field `y`")
    );
    assert_matches!(Point::from_json(r#"{"x": 1.1, "y": 2}"#), Err(PointError::Format(_)));
    assert_matches!(Point::from_json("null"), Err(PointError::Format(_)));
}

#[test]
fn test_serde_inside_other_documents() {
    let points = vec![Point::new(1, 2), Point::new(3, 4)];
    let encoded = serde_json::to_string(&points).unwrap();
    assert_eq!(encoded, r#"[{"x":1,"y":2},{"x":3,"y":4}]"#);

    let decoded: Vec<Point> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, points);
}
