use crate::data::{Classification, Point};
use crate::PolygonScalar;

/// Axis-aligned rectangle, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingRectangle<T> {
  pub x_min: T,
  pub x_max: T,
  pub y_min: T,
  pub y_max: T,
}

impl<T: PolygonScalar> BoundingRectangle<T> {
  /// $O(n)$ Returns `None` for an empty iterator.
  pub fn from_points<'a, I>(points: I) -> Option<BoundingRectangle<T>>
  where
    I: IntoIterator<Item = &'a Point<T, 2>>,
    T: 'a,
  {
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let init = BoundingRectangle {
      x_min: first.x_coord().clone(),
      x_max: first.x_coord().clone(),
      y_min: first.y_coord().clone(),
      y_max: first.y_coord().clone(),
    };
    Some(iter.fold(init, |rect, pt| BoundingRectangle {
      x_min: rect.x_min.total_min(pt.x_coord().clone()),
      x_max: rect.x_max.total_max(pt.x_coord().clone()),
      y_min: rect.y_min.total_min(pt.y_coord().clone()),
      y_max: rect.y_max.total_max(pt.y_coord().clone()),
    }))
  }

  /// $O(1)$ True unless the point is strictly beyond one of the four bounds.
  pub fn contains(&self, pt: &Point<T, 2>) -> bool {
    let (x, y) = (pt.x_coord(), pt.y_coord());
    !(x > &self.x_max || x < &self.x_min || y > &self.y_max || y < &self.y_min)
  }

  pub fn classify(&self, pt: &Point<T, 2>) -> Classification {
    Classification::from_inside(self.contains(pt))
  }
}
