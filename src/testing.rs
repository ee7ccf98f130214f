// Proptest strategies for:
//  * points
//  * axis-aligned rectangles
//  * convex quadrilaterals ("kites")
use crate::data::{Point, Polygon};
use crate::{Orientation, PolygonScalar};

use proptest::collection::vec;
use proptest::prelude::*;

const COORD: std::ops::Range<i32> = -500..500;

pub fn any_32() -> impl Strategy<Value = Point<i32, 2>> {
  (COORD, COORD).prop_map(Point::from)
}

pub fn any_f64() -> impl Strategy<Value = Point<f64, 2>> {
  (-500.0..500.0, -500.0..500.0).prop_map(Point::from)
}

pub fn any_points(max: usize) -> impl Strategy<Value = Vec<Point<f64, 2>>> {
  vec(any_f64(), 0..max)
}

/// Axis-aligned rectangle with positive width and height, counter-clockwise.
pub fn any_rect() -> impl Strategy<Value = Polygon<i32>> {
  (COORD, COORD, 1..400_i32, 1..400_i32).prop_map(|(x, y, w, h)| {
    Polygon::new_unchecked(vec![
      Point::new([x, y]),
      Point::new([x + w, y]),
      Point::new([x + w, y + h]),
      Point::new([x, y + h]),
    ])
  })
}

/// Convex quadrilateral with one vertex on each axis through its center,
/// counter-clockwise. Never axis-aligned.
pub fn any_kite() -> impl Strategy<Value = Polygon<i32>> {
  (COORD, COORD, [1..300_i32, 1..300, 1..300, 1..300]).prop_map(|(cx, cy, [r, u, l, d])| {
    Polygon::new_unchecked(vec![
      Point::new([cx + r, cy]),
      Point::new([cx, cy + u]),
      Point::new([cx - l, cy]),
      Point::new([cx, cy - d]),
    ])
  })
}

/// True if `pt` lies on one of the polygon's edges, endpoints included.
pub fn on_boundary<T: PolygonScalar>(poly: &Polygon<T>, pt: &Point<T, 2>) -> bool {
  poly.iter_boundary_edges().any(|edge| {
    let between = |a: &T, b: &T, v: &T| (a <= v && v <= b) || (b <= v && v <= a);
    Orientation::new(edge.src, edge.dst, pt) == Orientation::CoLinear
      && between(edge.src.x_coord(), edge.dst.x_coord(), pt.x_coord())
      && between(edge.src.y_coord(), edge.dst.y_coord(), pt.y_coord())
  })
}
