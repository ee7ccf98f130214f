//! A named map boundary and the points that belong to its map.
use log::{debug, info, warn};
use std::sync::PoisonError;
use tokio::sync::Mutex;

use crate::data::{BoundingRectangle, Classification, Point, PointSet, Polygon};
use crate::source::{LoadError, PointSource};
use crate::InvalidBoundaryError;

/// Map boundaries are quadrilaterals.
pub const BOUNDARY_VERTICES: usize = 4;

enum LoadState {
  NotLoaded,
  Loading,
  Loaded(PointSet),
  Failed(LoadError),
}

/// Observable state of the point cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
  NotLoaded,
  Loading,
  Loaded,
  Failed,
}

impl LoadState {
  fn status(&self) -> LoadStatus {
    match self {
      LoadState::NotLoaded => LoadStatus::NotLoaded,
      LoadState::Loading => LoadStatus::Loading,
      LoadState::Loaded(_) => LoadStatus::Loaded,
      LoadState::Failed(_) => LoadStatus::Failed,
    }
  }
}

pub struct Boundary<S> {
  name: String,
  polygon: Polygon<f64>,
  source: S,
  // Held for the whole duration of a load so concurrent callers wait for the
  // outstanding fetch instead of starting their own.
  state: Mutex<LoadState>,
  // Mirrors the tag of `state`, readable while a load holds the lock.
  status: std::sync::Mutex<LoadStatus>,
}

impl<S: PointSource> Boundary<S> {
  /// Fails unless `vertices` describes a quadrilateral.
  pub fn new(
    name: impl Into<String>,
    vertices: Vec<Point<f64, 2>>,
    source: S,
  ) -> Result<Boundary<S>, InvalidBoundaryError> {
    if vertices.len() != BOUNDARY_VERTICES {
      return Err(InvalidBoundaryError::VertexCount {
        expected: BOUNDARY_VERTICES,
        found: vertices.len(),
      });
    }
    Ok(Boundary::with_polygon(name, Polygon::new(vertices)?, source))
  }

  /// Any valid polygon, regardless of its number of vertices.
  pub fn with_polygon(name: impl Into<String>, polygon: Polygon<f64>, source: S) -> Boundary<S> {
    Boundary {
      name: name.into(),
      polygon,
      source,
      state: Mutex::new(LoadState::NotLoaded),
      status: std::sync::Mutex::new(LoadStatus::NotLoaded),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn polygon(&self) -> &Polygon<f64> {
    &self.polygon
  }

  pub fn source(&self) -> &S {
    &self.source
  }

  pub fn bounding_rectangle(&self) -> BoundingRectangle<f64> {
    self.polygon.bounding_rectangle()
  }

  /// Exact even-odd test against the boundary polygon.
  pub fn contains(&self, pt: &Point<f64, 2>) -> bool {
    self.polygon.contains(pt)
  }

  pub fn classify(&self, pt: &Point<f64, 2>) -> Classification {
    self.polygon.classify(pt)
  }

  /// `Loading` while a fetch is outstanding.
  pub fn status(&self) -> LoadStatus {
    *self.status.lock().unwrap_or_else(PoisonError::into_inner)
  }

  fn transition(&self, state: &mut LoadState, next: LoadState) {
    *self.status.lock().unwrap_or_else(PoisonError::into_inner) = next.status();
    *state = next;
  }

  /// Load the points, or return the cached set if an earlier call succeeded.
  ///
  /// Failures are cached until the next call, which fetches again.
  pub async fn load_points(&self) -> Result<PointSet, LoadError> {
    let mut state = self.state.lock().await;
    match &*state {
      LoadState::Loaded(points) => {
        debug!("{}: {} points already loaded", self.name, points.len());
        return Ok(points.clone());
      }
      LoadState::Failed(err) => debug!("{}: previous load failed ({}), retrying", self.name, err),
      LoadState::Loading => debug!("{}: previous load was abandoned, restarting", self.name),
      LoadState::NotLoaded => {}
    }

    self.transition(&mut state, LoadState::Loading);
    info!("{}: loading points from {}", self.name, self.source.describe());
    match self.fetch_points().await {
      Ok(points) => {
        info!("{}: loaded {} points", self.name, points.len());
        self.transition(&mut state, LoadState::Loaded(points.clone()));
        Ok(points)
      }
      Err(err) => {
        warn!("{}: {}", self.name, err);
        self.transition(&mut state, LoadState::Failed(err.clone()));
        Err(err)
      }
    }
  }

  async fn fetch_points(&self) -> Result<PointSet, LoadError> {
    let document = self.source.fetch().await?;
    Ok(PointSet::from_json(&document)?)
  }
}

impl<S> std::fmt::Debug for Boundary<S> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Boundary")
      .field("name", &self.name)
      .field("polygon", &self.polygon)
      .finish_non_exhaustive()
  }
}
