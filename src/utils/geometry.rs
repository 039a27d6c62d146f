//! # Point
//!
//! An immutable position (or displacement) on the 2D integer lattice.
//!
//! Every operation returns a fresh [`Point`]; nothing mutates an existing
//! value. The JSON form is `{"x": 5, "y": 7}` and the display form is
//! `Point(5, 7)`.
//!
//! Coordinates may take any `i64` value. The operators `+`, `-` and unary `-`
//! panic if a resulting coordinate does not fit in `i64`, in debug and release
//! builds alike; use [`Point::checked_add`], [`Point::checked_sub`] and
//! [`Point::checked_neg`] to handle that case. Distances are computed on the
//! exact `i128` differences and never overflow.

use crate::error::{Axis, PointError};
use serde::ser::SerializeStruct as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::any::{type_name, Any};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;

/// A point with integer x and y coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Point {
    x: i64,
    y: i64,
}

impl Point {
    /// The point `(0, 0)`
    pub const ORIGIN: Point = Point::new(0, 0);

    /// Creates a new point with the given coordinates
    ///
    /// # Example
    /// ```
    /// use plib::Point;
    /// let p = Point::new(1, 2);
    /// assert_eq!((p.x(), p.y()), (1, 2));
    /// ```
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Builds a point from dynamically typed values
    ///
    /// Only integer JSON numbers are accepted. Floats are rejected even when
    /// they hold a whole number, so `2.0` fails just like `1.1` or `"2"`.
    ///
    /// # Example
    /// ```
    /// use plib::{ErrorKind, Point};
    /// use serde_json::json;
    ///
    /// assert_eq!(Point::try_from_values(&json!(1), &json!(2)).unwrap(), Point::new(1, 2));
    ///
    /// let err = Point::try_from_values(&json!(1.1), &json!(2)).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Type);
    /// ```
    pub fn try_from_values(x: &Value, y: &Value) -> Result<Self, PointError> {
        Ok(Self::new(coordinate(Axis::X, x)?, coordinate(Axis::Y, y)?))
    }

    pub const fn x(&self) -> i64 {
        self.x
    }

    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Vector sum, or `None` if a coordinate overflows
    pub fn checked_add(self, other: Point) -> Option<Point> {
        Some(Point::new(
            self.x.checked_add(other.x)?,
            self.y.checked_add(other.y)?,
        ))
    }

    /// Vector difference, or `None` if a coordinate overflows
    pub fn checked_sub(self, other: Point) -> Option<Point> {
        Some(Point::new(
            self.x.checked_sub(other.x)?,
            self.y.checked_sub(other.y)?,
        ))
    }

    /// Negation, or `None` for an `i64::MIN` coordinate
    pub fn checked_neg(self) -> Option<Point> {
        Some(Point::new(self.x.checked_neg()?, self.y.checked_neg()?))
    }

    /// Vector difference, the same as `self - other`
    pub fn subtract(self, other: Point) -> Point {
        self - other
    }

    /// Unary negation, the same as `-self`
    pub fn negate(self) -> Point {
        -self
    }

    /// Length of the vector from the origin to this point
    pub fn magnitude(&self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }

    /// Euclidean distance between two points
    ///
    /// # Example
    /// ```
    /// use plib::Point;
    /// let d = Point::new(1, 2).distance_to(Point::new(4, 6));
    /// assert!((d - 5.0).abs() < 1e-6);
    /// ```
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = i128::from(self.x) - i128::from(other.x);
        let dy = i128::from(self.y) - i128::from(other.y);
        (dx as f64).hypot(dy as f64)
    }

    pub const fn is_origin(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Compares against a value of any type
    ///
    /// `==` only compiles between two points. This is the dynamic variant: a
    /// right-hand side that is not a [`Point`] is an error, never `false`.
    ///
    /// # Example
    /// ```
    /// use plib::{ErrorKind, Point};
    /// let p = Point::new(1, 2);
    /// assert!(p.equals(&Point::new(1, 2)).unwrap());
    /// assert_eq!(p.equals(&1).unwrap_err().kind(), ErrorKind::Comparison);
    /// ```
    pub fn equals<T: Any>(&self, other: &T) -> Result<bool, PointError> {
        (other as &dyn Any)
            .downcast_ref::<Point>()
            .map(|other| self == other)
            .ok_or(PointError::Comparison {
                other: type_name::<T>(),
            })
    }

    /// Encodes the point as `{"x": <x>, "y": <y>}`
    ///
    /// Keys are always written `x` first, with `": "` after each key and
    /// `", "` between the two entries.
    pub fn to_json(&self) -> String {
        format!(r#"{{"x": {}, "y": {}}}"#, self.x, self.y)
    }

    /// Decodes a point from a JSON object with integer `x` and `y` fields
    ///
    /// Field order does not matter and extra keys are ignored. Anything else
    /// (invalid JSON, a non-object, a missing or non-integer field) is a
    /// format error.
    pub fn from_json(s: &str) -> Result<Self, PointError> {
        Ok(serde_json::from_str(s)?)
    }
}

fn coordinate(axis: Axis, value: &Value) -> Result<i64, PointError> {
    value.as_i64().ok_or_else(|| PointError::NotAnInteger {
        axis,
        found: value.to_string(),
    })
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        self.checked_add(other)
            .unwrap_or_else(|| panic!("overflow when adding {other} to {self}"))
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        *self = *self + other;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        self.checked_sub(other)
            .unwrap_or_else(|| panic!("overflow when subtracting {other} from {self}"))
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.checked_neg()
            .unwrap_or_else(|| panic!("overflow when negating {self}"))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (i64, i64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl FromStr for Point {
    type Err = PointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Point::from_json(s)
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Point", 2)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.end()
    }
}

impl TryFrom<Map<String, Value>> for Point {
    type Error = PointError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let field = |axis: Axis| {
            map.get(axis.as_str())
                .ok_or(PointError::MissingField { axis })
        };
        let (x, y) = (field(Axis::X)?, field(Axis::Y)?);

        Point::try_from_values(x, y)
    }
}
