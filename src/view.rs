//! The rendering side of the controller.
//!
//! A [`View`] draws the boundary and one marker per point, and later shows or
//! hides markers when the user picks a [`Filter`]. [`Scene`] is a headless
//! implementation that simply records what it was asked to do.
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::data::{Classification, Point, Polygon};

/// Which points are displayed. Exactly one filter is selected at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum Filter {
  #[default]
  #[serde(rename = "all")]
  All,
  #[serde(rename = "inside")]
  InsideOnly,
  #[serde(rename = "outside")]
  OutsideOnly,
}

impl Filter {
  pub const ALL: [Filter; 3] = [Filter::All, Filter::InsideOnly, Filter::OutsideOnly];

  pub fn shows(self, classification: Classification) -> bool {
    match self {
      Filter::All => true,
      Filter::InsideOnly => classification == Classification::Inside,
      Filter::OutsideOnly => classification == Classification::Outside,
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Filter::All => "all",
      Filter::InsideOnly => "inside",
      Filter::OutsideOnly => "outside",
    }
  }
}

impl std::fmt::Display for Filter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl std::fmt::Display for UnknownFilter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "Unknown filter {:?}, expected one of: all, inside, outside",
      self.0
    )
  }
}

impl std::error::Error for UnknownFilter {}

impl FromStr for Filter {
  type Err = UnknownFilter;
  fn from_str(s: &str) -> Result<Filter, UnknownFilter> {
    Filter::ALL
      .into_iter()
      .find(|filter| filter.name() == s)
      .ok_or_else(|| UnknownFilter(s.to_string()))
  }
}

/// Rendering collaborator injected into the [`Controller`](crate::controller::Controller).
pub trait View {
  /// Opaque handle to a drawn point.
  type Marker;

  fn draw_boundary(&mut self, polygon: &Polygon<f64>);
  fn draw_point(&mut self, pt: &Point<f64, 2>, classification: Classification) -> Self::Marker;
  fn set_visible(&mut self, marker: &Self::Marker, visible: bool);
  /// Mark the control for `filter` as the selected one.
  fn select_control(&mut self, filter: Filter);
}

impl<V: View> View for &mut V {
  type Marker = V::Marker;

  fn draw_boundary(&mut self, polygon: &Polygon<f64>) {
    (**self).draw_boundary(polygon)
  }
  fn draw_point(&mut self, pt: &Point<f64, 2>, classification: Classification) -> V::Marker {
    (**self).draw_point(pt, classification)
  }
  fn set_visible(&mut self, marker: &V::Marker, visible: bool) {
    (**self).set_visible(marker, visible)
  }
  fn select_control(&mut self, filter: Filter) {
    (**self).select_control(filter)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Scene

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
  pub point: Point<f64, 2>,
  pub classification: Classification,
  pub visible: bool,
}

/// In-memory [`View`].
#[derive(Debug, Clone, Default)]
pub struct Scene {
  boundary: Option<Polygon<f64>>,
  markers: Vec<Marker>,
  selected: Option<Filter>,
}

impl Scene {
  pub fn new() -> Scene {
    Scene::default()
  }

  pub fn boundary(&self) -> Option<&Polygon<f64>> {
    self.boundary.as_ref()
  }

  pub fn markers(&self) -> &[Marker] {
    &self.markers
  }

  pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
    self.markers.get(id.0)
  }

  pub fn selected(&self) -> Option<Filter> {
    self.selected
  }

  /// Visible points in drawing order.
  pub fn visible_points(&self) -> impl Iterator<Item = &Point<f64, 2>> + '_ {
    self
      .markers
      .iter()
      .filter(|marker| marker.visible)
      .map(|marker| &marker.point)
  }
}

impl View for Scene {
  type Marker = MarkerId;

  fn draw_boundary(&mut self, polygon: &Polygon<f64>) {
    self.boundary = Some(polygon.clone());
  }

  fn draw_point(&mut self, pt: &Point<f64, 2>, classification: Classification) -> MarkerId {
    self.markers.push(Marker {
      point: *pt,
      classification,
      visible: true,
    });
    MarkerId(self.markers.len() - 1)
  }

  fn set_visible(&mut self, marker: &MarkerId, visible: bool) {
    if let Some(marker) = self.markers.get_mut(marker.0) {
      marker.visible = visible;
    }
  }

  fn select_control(&mut self, filter: Filter) {
    self.selected = Some(filter);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use claims::{assert_err, assert_ok_eq};

  #[test]
  fn filter_shows() {
    use Classification::*;
    assert!(Filter::All.shows(Inside) && Filter::All.shows(Outside));
    assert!(Filter::InsideOnly.shows(Inside) && !Filter::InsideOnly.shows(Outside));
    assert!(!Filter::OutsideOnly.shows(Inside) && Filter::OutsideOnly.shows(Outside));
  }

  #[test]
  fn filter_names_round_trip() {
    for filter in Filter::ALL {
      assert_ok_eq!(filter.name().parse::<Filter>(), filter);
      assert_eq!(
        serde_json::to_string(&filter).unwrap(),
        format!("\"{}\"", filter)
      );
    }
    assert_err!("everything".parse::<Filter>());
    assert_eq!(Filter::default(), Filter::All);
  }

  #[test]
  fn scene_records_markers() {
    let mut scene = Scene::new();
    let a = scene.draw_point(&Point::new([1.0, 2.0]), Classification::Inside);
    let b = scene.draw_point(&Point::new([3.0, 4.0]), Classification::Outside);
    assert_ne!(a, b);
    scene.set_visible(&a, false);
    assert_eq!(scene.marker(a).map(|m| m.visible), Some(false));
    assert_eq!(
      scene.visible_points().collect::<Vec<_>>(),
      vec![&Point::new([3.0, 4.0])]
    );
    scene.select_control(Filter::OutsideOnly);
    assert_eq!(scene.selected(), Some(Filter::OutsideOnly));
  }
}
