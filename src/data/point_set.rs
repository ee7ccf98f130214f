use serde::de::Error as _;
use serde_json::Value;
use std::ops::Deref;
use std::sync::Arc;

use super::Point;

/// Immutable, cheaply cloneable collection of loaded points.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet(Arc<[Point<f64, 2>]>);

impl PointSet {
  pub fn new(points: Vec<Point<f64, 2>>) -> PointSet {
    PointSet(points.into())
  }

  /// Parse a points document.
  ///
  /// Both `{ "points": [ {"x": .., "y": ..}, .. ] }` and a bare array of points
  /// are accepted. A single malformed point rejects the whole document.
  pub fn from_json(text: &str) -> Result<PointSet, serde_json::Error> {
    let points: Vec<Point<f64, 2>> = match serde_json::from_str::<Value>(text)? {
      Value::Object(mut document) => match document.remove("points") {
        Some(points) => serde_json::from_value(points)?,
        None => return Err(serde_json::Error::missing_field("points")),
      },
      other => serde_json::from_value(other)?,
    };
    Ok(PointSet::new(points))
  }

  /// True if both sets share the same allocation.
  pub fn ptr_eq(&self, other: &PointSet) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl Deref for PointSet {
  type Target = [Point<f64, 2>];
  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl From<Vec<Point<f64, 2>>> for PointSet {
  fn from(points: Vec<Point<f64, 2>>) -> PointSet {
    PointSet::new(points)
  }
}
