use super::Point;
use crate::{Orientation, PolygonScalar};

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

// Directed edge from A to B, including A and excluding B.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct DirectedEdge<'a, T, const N: usize = 2> {
  pub src: &'a Point<T, N>,
  pub dst: &'a Point<T, N>,
}

impl<T, const N: usize> Copy for DirectedEdge<'_, T, N> {}
impl<T, const N: usize> Clone for DirectedEdge<'_, T, N> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T: PolygonScalar> DirectedEdge<'_, T, 2> {
  /// True if a ray cast from `pt` towards positive x crosses this edge.
  ///
  /// One endpoint has to lie strictly above `pt` and the other one not above it,
  /// and the edge has to pass strictly to the right of `pt`. Points on the edge
  /// itself never cross.
  pub fn crosses_ray(self, pt: &Point<T, 2>) -> bool {
    let src_above = self.src.y_coord() > pt.y_coord();
    let dst_above = self.dst.y_coord() > pt.y_coord();
    if src_above == dst_above {
      return false;
    }
    // Walking the edge upwards, `pt` is left of it exactly when the
    // intersection with the horizontal line through `pt` is right of `pt`.
    let (lower, upper) = if dst_above {
      (self.src, self.dst)
    } else {
      (self.dst, self.src)
    };
    Orientation::new(lower, upper, pt).is_ccw()
  }
}
