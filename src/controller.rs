//! Wires a [`Boundary`] to a [`View`].
//!
//! The controller loads the boundary's points, classifies every point exactly
//! once, draws one marker per point and then answers filter changes by toggling
//! marker visibility.
use log::{debug, info};

use crate::boundary::Boundary;
use crate::classify::{compute_bounding_rectangle, ClassificationStrategy, Partition};
use crate::data::Classification;
use crate::source::{LoadError, PointSource};
use crate::view::{Filter, View};

pub struct Controller<S, V: View> {
  boundary: Boundary<S>,
  view: V,
  strategy: ClassificationStrategy,
  filter: Filter,
  inside: Vec<V::Marker>,
  outside: Vec<V::Marker>,
  boundary_drawn: bool,
  rendered: Option<Partition<f64>>,
}

impl<S: PointSource, V: View> Controller<S, V> {
  pub fn new(boundary: Boundary<S>, view: V) -> Controller<S, V> {
    Controller::with_strategy(boundary, view, ClassificationStrategy::default())
  }

  pub fn with_strategy(
    boundary: Boundary<S>,
    view: V,
    strategy: ClassificationStrategy,
  ) -> Controller<S, V> {
    Controller {
      boundary,
      view,
      strategy,
      filter: Filter::default(),
      inside: Vec::new(),
      outside: Vec::new(),
      boundary_drawn: false,
      rendered: None,
    }
  }

  /// Draw the boundary and every point.
  ///
  /// Points are loaded before anything is classified. Once a render has
  /// succeeded, later calls return the same partition without drawing again.
  /// A failed load draws no points and may be retried by calling `render`
  /// again. The boundary is drawn only once, whatever the number of attempts.
  pub async fn render(&mut self) -> Result<&Partition<f64>, LoadError> {
    let partition = match self.rendered.take() {
      Some(partition) => partition,
      None => self.draw().await?,
    };
    Ok(self.rendered.insert(partition))
  }

  async fn draw(&mut self) -> Result<Partition<f64>, LoadError> {
    if !self.boundary_drawn {
      self.view.draw_boundary(self.boundary.polygon());
      self.view.select_control(self.filter);
      self.boundary_drawn = true;
    }

    let points = self.boundary.load_points().await?;
    let polygon = self.boundary.polygon();
    let rect = compute_bounding_rectangle(polygon);

    let mut partition = Partition::new();
    for pt in points.iter() {
      let classification = self.strategy.classify(polygon, &rect, pt);
      let marker = self.view.draw_point(pt, classification);
      match classification {
        Classification::Inside => self.inside.push(marker),
        Classification::Outside => self.outside.push(marker),
      }
      partition.push(*pt, classification);
    }
    info!(
      "{}: {} points inside, {} outside",
      self.boundary.name(),
      partition.inside.len(),
      partition.outside.len()
    );
    self.apply_filter();
    Ok(partition)
  }

  /// Switch to `filter`. Selecting the current filter again is harmless.
  pub fn select(&mut self, filter: Filter) {
    debug!("{}: filter {} -> {}", self.boundary.name(), self.filter, filter);
    self.filter = filter;
    self.apply_filter();
    self.view.select_control(filter);
  }

  fn apply_filter(&mut self) {
    let show_inside = self.filter.shows(Classification::Inside);
    let show_outside = self.filter.shows(Classification::Outside);
    for marker in &self.inside {
      self.view.set_visible(marker, show_inside);
    }
    for marker in &self.outside {
      self.view.set_visible(marker, show_outside);
    }
  }

  pub fn filter(&self) -> Filter {
    self.filter
  }

  pub fn strategy(&self) -> ClassificationStrategy {
    self.strategy
  }

  /// The partition of the last successful render.
  pub fn partition(&self) -> Option<&Partition<f64>> {
    self.rendered.as_ref()
  }

  pub fn boundary(&self) -> &Boundary<S> {
    &self.boundary
  }

  pub fn view(&self) -> &V {
    &self.view
  }

  pub fn into_view(self) -> V {
    self.view
  }
}
