use claims::debug_assert_ok;

use crate::data::{BoundingRectangle, Classification, DirectedEdge, Point};
use crate::{InvalidBoundaryError, PolygonScalar};

mod iter;
pub use iter::*;

/// Closed boundary. The last vertex implicitly connects to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
  pub(crate) vertices: Vec<Point<T, 2>>,
}

impl<T> Polygon<T> {
  /// Skips validation in release builds. The caller guarantees at least three
  /// finite vertices; [`bounding_rectangle`](Polygon::bounding_rectangle)
  /// panics on an empty polygon.
  pub fn new_unchecked(vertices: Vec<Point<T, 2>>) -> Polygon<T>
  where
    T: PolygonScalar,
  {
    let poly = Polygon { vertices };
    debug_assert_ok!(poly.validate());
    poly
  }

  pub fn new(vertices: Vec<Point<T, 2>>) -> Result<Polygon<T>, InvalidBoundaryError>
  where
    T: PolygonScalar,
  {
    let poly = Polygon { vertices };
    poly.validate()?;
    Ok(poly)
  }

  /// Has at least three vertices and no NaN or infinite coordinates.
  ///
  /// Self-intersections are not detected; containment of a self-intersecting
  /// polygon follows the even-odd rule.
  pub fn validate(&self) -> Result<(), InvalidBoundaryError>
  where
    T: PolygonScalar,
  {
    if self.vertices.len() < 3 {
      return Err(InvalidBoundaryError::InsufficientVertices);
    }
    if !self.vertices.iter().all(Point::is_finite) {
      return Err(InvalidBoundaryError::NonFiniteCoordinate);
    }
    Ok(())
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn vertices(&self) -> &[Point<T, 2>] {
    &self.vertices
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T, 2>> {
    self.vertices.iter()
  }

  /// Every boundary edge, each vertex paired with its predecessor. The first
  /// edge runs from the last vertex to the first.
  pub fn iter_boundary_edges(&self) -> EdgeIter<'_, T> {
    EdgeIter {
      vertices: &self.vertices,
      index: 0,
    }
  }

  /// $O(n)$ Even-odd ray casting.
  ///
  /// Points exactly on an edge or a vertex get a deterministic but otherwise
  /// unspecified answer.
  ///
  /// ```rust
  /// # use mapbounds::data::{Point, Polygon};
  /// let map = Polygon::new(vec![
  ///   Point::new([130, 30]),
  ///   Point::new([370, 30]),
  ///   Point::new([370, 270]),
  ///   Point::new([130, 270]),
  /// ]).unwrap();
  /// assert!(map.contains(&Point::new([200, 100])));
  /// assert!(!map.contains(&Point::new([500, 100])));
  /// ```
  pub fn contains(&self, pt: &Point<T, 2>) -> bool
  where
    T: PolygonScalar,
  {
    self
      .iter_boundary_edges()
      .fold(false, |inside, edge| inside ^ edge.crosses_ray(pt))
  }

  pub fn classify(&self, pt: &Point<T, 2>) -> Classification
  where
    T: PolygonScalar,
  {
    Classification::from_inside(self.contains(pt))
  }

  /// $O(n)$ Smallest axis-aligned rectangle enclosing every vertex.
  ///
  /// # Panics
  ///
  /// Panics if the polygon has no vertices, which is only possible through
  /// [`new_unchecked`](Polygon::new_unchecked).
  pub fn bounding_rectangle(&self) -> BoundingRectangle<T>
  where
    T: PolygonScalar,
  {
    BoundingRectangle::from_points(self.iter()).expect("polygon has at least three vertices")
  }

  pub fn cast<U, F>(self, f: F) -> Polygon<U>
  where
    T: Clone,
    F: Fn(T) -> U + Clone,
  {
    Polygon {
      vertices: self
        .vertices
        .into_iter()
        .map(|p| p.cast(f.clone()))
        .collect(),
    }
  }
}

impl<'a, T> IntoIterator for &'a Polygon<T> {
  type Item = DirectedEdge<'a, T>;
  type IntoIter = EdgeIter<'a, T>;
  fn into_iter(self) -> EdgeIter<'a, T> {
    self.iter_boundary_edges()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;
  use crate::Orientation;

  use claims::{assert_err_eq, assert_ok};
  use proptest::prelude::*;

  fn map() -> Polygon<i32> {
    Polygon::new(vec![
      Point::new([130, 30]),
      Point::new([370, 30]),
      Point::new([370, 270]),
      Point::new([130, 270]),
    ])
    .unwrap()
  }

  fn rotated<T: Clone>(poly: &Polygon<T>, n: usize) -> Polygon<T> {
    let mut vertices = poly.vertices.clone();
    let len = vertices.len();
    vertices.rotate_left(n % len);
    Polygon { vertices }
  }

  fn reversed<T: Clone>(poly: &Polygon<T>) -> Polygon<T> {
    let mut vertices = poly.vertices.clone();
    vertices.reverse();
    Polygon { vertices }
  }

  #[test]
  fn too_few_vertices() {
    assert_err_eq!(
      Polygon::new(vec![Point::new([0, 0]), Point::new([1, 1])]),
      InvalidBoundaryError::InsufficientVertices
    );
    assert_err_eq!(
      Polygon::<i32>::new(vec![]),
      InvalidBoundaryError::InsufficientVertices
    );
  }

  #[test]
  fn non_finite_vertices() {
    assert_err_eq!(
      Polygon::new(vec![
        Point::new([0.0, 0.0]),
        Point::new([1.0, f64::NAN]),
        Point::new([0.0, 1.0]),
      ]),
      InvalidBoundaryError::NonFiniteCoordinate
    );
  }

  #[test]
  #[should_panic]
  fn empty_polygon_has_no_bounding_rectangle() {
    Polygon::<i32> { vertices: vec![] }.bounding_rectangle();
  }

  #[test]
  fn triangle_is_enough() {
    assert_ok!(Polygon::new(vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([0, 1]),
    ]));
  }

  #[test]
  fn edges_pair_vertices_with_predecessors() {
    let poly = map();
    let edges: Vec<_> = poly
      .iter_boundary_edges()
      .map(|e| (e.src.array, e.dst.array))
      .collect();
    assert_eq!(
      edges,
      vec![
        ([130, 270], [130, 30]),
        ([130, 30], [370, 30]),
        ([370, 30], [370, 270]),
        ([370, 270], [130, 270]),
      ]
    );
    assert_eq!(poly.iter_boundary_edges().len(), 4);
  }

  #[test]
  fn map_scenario() {
    let poly = map();
    assert!(poly.contains(&Point::new([200, 100])));
    assert!(!poly.contains(&Point::new([500, 100])));
    assert_eq!(poly.classify(&Point::new([200, 100])), Classification::Inside);
    assert_eq!(poly.classify(&Point::new([500, 100])), Classification::Outside);
  }

  #[test]
  fn corner_is_consistent() {
    let poly = map();
    let corner = Point::new([130, 30]);
    let first = poly.contains(&corner);
    for _ in 0..10 {
      assert_eq!(poly.contains(&corner), first);
    }
  }

  #[test]
  fn float_map_scenario() {
    let poly = map().cast(f64::from);
    assert!(poly.contains(&Point::new([200.0, 100.0])));
    assert!(poly.contains(&Point::new([369.999, 269.999])));
    assert!(!poly.contains(&Point::new([370.001, 100.0])));
  }

  #[test]
  fn concave_polygon() {
    // L-shape with the notch in the top right corner.
    let poly = Polygon::new(vec![
      Point::new([0, 0]),
      Point::new([10, 0]),
      Point::new([10, 5]),
      Point::new([5, 5]),
      Point::new([5, 10]),
      Point::new([0, 10]),
    ])
    .unwrap();
    assert!(poly.contains(&Point::new([2, 8])));
    assert!(poly.contains(&Point::new([8, 2])));
    assert!(!poly.contains(&Point::new([8, 8])));
    assert!(!poly.contains(&Point::new([-1, 5])));
    assert!(!poly.contains(&Point::new([11, 2])));
  }

  #[test]
  fn ray_through_vertex() {
    // Rays at y = 5 pass exactly through the vertices (0, 5) and (10, 5).
    let poly = Polygon::new(vec![
      Point::new([5, 0]),
      Point::new([10, 5]),
      Point::new([5, 10]),
      Point::new([0, 5]),
    ])
    .unwrap();
    assert!(poly.contains(&Point::new([5, 5])));
    assert!(!poly.contains(&Point::new([-1, 5])));
    assert!(!poly.contains(&Point::new([11, 5])));
  }

  #[test_strategy::proptest]
  fn rect_interior(
    #[strategy(any_rect())] rect: Polygon<i32>,
    #[strategy(any_32())] pt: Point<i32, 2>,
  ) {
    let bounds = rect.bounding_rectangle();
    let strictly_inside = bounds.x_min < pt[0]
      && pt[0] < bounds.x_max
      && bounds.y_min < pt[1]
      && pt[1] < bounds.y_max;
    let strictly_outside = pt[0] < bounds.x_min
      || pt[0] > bounds.x_max
      || pt[1] < bounds.y_min
      || pt[1] > bounds.y_max;
    if strictly_inside {
      prop_assert!(rect.contains(&pt));
    }
    if strictly_outside {
      prop_assert!(!rect.contains(&pt));
    }
  }

  #[test_strategy::proptest]
  fn convex_interior(
    #[strategy(any_kite())] kite: Polygon<i32>,
    #[strategy(any_32())] pt: Point<i32, 2>,
  ) {
    // `any_kite` yields counter-clockwise convex polygons.
    let orientations: Vec<Orientation> = kite
      .iter_boundary_edges()
      .map(|e| Orientation::new(e.src, e.dst, &pt))
      .collect();
    if orientations.iter().all(|o| o.is_ccw()) {
      prop_assert!(kite.contains(&pt));
    }
    if orientations.iter().any(|o| o.is_cw()) {
      prop_assert!(!kite.contains(&pt));
    }
  }

  proptest! {
    #[test]
    fn rotation_invariant(kite in any_kite(), pt in any_32(), n in 0..4_usize) {
      prop_assume!(!on_boundary(&kite, &pt));
      prop_assert_eq!(kite.contains(&pt), rotated(&kite, n).contains(&pt));
    }

    #[test]
    fn reversal_invariant(kite in any_kite(), pt in any_32()) {
      prop_assume!(!on_boundary(&kite, &pt));
      prop_assert_eq!(kite.contains(&pt), reversed(&kite).contains(&pt));
    }

    #[test]
    fn bounding_rectangle_is_tight(poly in any_kite()) {
      let rect = poly.bounding_rectangle();
      for pt in poly.iter() {
        prop_assert!(rect.x_min <= pt[0] && pt[0] <= rect.x_max);
        prop_assert!(rect.y_min <= pt[1] && pt[1] <= rect.y_max);
      }
      prop_assert!(poly.iter().any(|pt| pt[0] == rect.x_min));
      prop_assert!(poly.iter().any(|pt| pt[0] == rect.x_max));
      prop_assert!(poly.iter().any(|pt| pt[1] == rect.y_min));
      prop_assert!(poly.iter().any(|pt| pt[1] == rect.y_max));
    }
  }
}
