//! Partition points into those inside and those outside a boundary.
use serde::{Deserialize, Serialize};

use crate::data::{BoundingRectangle, Classification, Point, Polygon};
use crate::PolygonScalar;

/// Points split by [`Classification`], each side in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
  pub inside: Vec<Point<T, 2>>,
  pub outside: Vec<Point<T, 2>>,
}

impl<T> Partition<T> {
  pub fn new() -> Partition<T> {
    Partition {
      inside: Vec::new(),
      outside: Vec::new(),
    }
  }

  pub fn push(&mut self, pt: Point<T, 2>, classification: Classification) {
    match classification {
      Classification::Inside => self.inside.push(pt),
      Classification::Outside => self.outside.push(pt),
    }
  }

  pub fn get(&self, classification: Classification) -> &[Point<T, 2>] {
    match classification {
      Classification::Inside => &self.inside,
      Classification::Outside => &self.outside,
    }
  }

  pub fn len(&self) -> usize {
    self.inside.len() + self.outside.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inside.is_empty() && self.outside.is_empty()
  }
}

impl<T> Default for Partition<T> {
  fn default() -> Self {
    Partition::new()
  }
}

/// How points are tested against the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationStrategy {
  /// Inside the boundary's bounding rectangle counts as inside the boundary.
  ///
  /// Only exact for axis-aligned rectangular boundaries. For any other shape,
  /// points in the corners between the polygon and its bounding rectangle are
  /// reported as inside.
  #[default]
  BoundingRectangle,
  /// Even-odd ray casting against the boundary polygon itself.
  Exact,
}

impl ClassificationStrategy {
  pub fn classify<T: PolygonScalar>(
    self,
    polygon: &Polygon<T>,
    rect: &BoundingRectangle<T>,
    pt: &Point<T, 2>,
  ) -> Classification {
    match self {
      ClassificationStrategy::BoundingRectangle => rect.classify(pt),
      // The rectangle still rejects far away points cheaply.
      ClassificationStrategy::Exact if !rect.contains(pt) => Classification::Outside,
      ClassificationStrategy::Exact => polygon.classify(pt),
    }
  }

  pub fn partition<T: PolygonScalar>(
    self,
    points: &[Point<T, 2>],
    polygon: &Polygon<T>,
  ) -> Partition<T> {
    let rect = compute_bounding_rectangle(polygon);
    partition_by(points, |pt| self.classify(polygon, &rect, pt))
  }
}

/// $O(n)$ Smallest axis-aligned rectangle containing every vertex of `polygon`.
pub fn compute_bounding_rectangle<T>(polygon: &Polygon<T>) -> BoundingRectangle<T>
where
  T: PolygonScalar,
{
  polygon.bounding_rectangle()
}

/// $O(n)$ A point is outside iff it lies strictly beyond one of the
/// rectangle's bounds.
///
/// ```rust
/// # use mapbounds::classify::classify_all;
/// # use mapbounds::data::{BoundingRectangle, Point};
/// let rect = BoundingRectangle { x_min: 130, x_max: 370, y_min: 30, y_max: 270 };
/// let points = [Point::new([200, 100]), Point::new([500, 100])];
/// let partition = classify_all(&points, &rect);
/// assert_eq!(partition.inside, vec![Point::new([200, 100])]);
/// assert_eq!(partition.outside, vec![Point::new([500, 100])]);
/// ```
pub fn classify_all<T: PolygonScalar>(
  points: &[Point<T, 2>],
  rect: &BoundingRectangle<T>,
) -> Partition<T> {
  partition_by(points, |pt| rect.classify(pt))
}

/// $O(n \cdot m)$ Classify with the exact polygon test, using the bounding
/// rectangle as a fast rejection.
pub fn classify_all_exact<T: PolygonScalar>(
  points: &[Point<T, 2>],
  polygon: &Polygon<T>,
) -> Partition<T> {
  ClassificationStrategy::Exact.partition(points, polygon)
}

fn partition_by<T, F>(points: &[Point<T, 2>], classify: F) -> Partition<T>
where
  T: Clone,
  F: Fn(&Point<T, 2>) -> Classification,
{
  let mut partition = Partition::new();
  for pt in points {
    partition.push(pt.clone(), classify(pt));
  }
  partition
}
