//! Boundary configuration, read from a JSON file.
//!
//! Every field is optional. Missing fields take the values of the stock map:
//!
//! ```json
//! {
//!   "name": "Points",
//!   "boundary": [[130, 30], [370, 30], [370, 270], [130, 270]],
//!   "data": "data.json",
//!   "strategy": "bounding_rectangle",
//!   "filter": "all"
//! }
//! ```
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::boundary::Boundary;
use crate::classify::ClassificationStrategy;
use crate::data::Point;
use crate::source::Location;
use crate::view::Filter;
use crate::InvalidBoundaryError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub name: String,
  pub boundary: Vec<[f64; 2]>,
  /// File path or `http(s)://` URL of the points document.
  pub data: String,
  pub strategy: ClassificationStrategy,
  /// Filter selected when the points are first shown.
  pub filter: Filter,
}

impl Default for Config {
  fn default() -> Config {
    Config {
      name: "Points".to_string(),
      boundary: vec![[130.0, 30.0], [370.0, 30.0], [370.0, 270.0], [130.0, 270.0]],
      data: "data.json".to_string(),
      strategy: ClassificationStrategy::default(),
      filter: Filter::default(),
    }
  }
}

#[derive(Debug)]
pub enum ConfigError {
  Io {
    path: PathBuf,
    source: std::io::Error,
  },
  Parse(serde_json::Error),
  Boundary(InvalidBoundaryError),
}

impl std::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      ConfigError::Io { path, source } => {
        write!(f, "Cannot read config {}: {}", path.display(), source)
      }
      ConfigError::Parse(err) => write!(f, "Malformed config: {}", err),
      ConfigError::Boundary(err) => write!(f, "Invalid boundary: {}", err),
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ConfigError::Io { source, .. } => Some(source),
      ConfigError::Parse(err) => Some(err),
      ConfigError::Boundary(err) => Some(err),
    }
  }
}

impl From<serde_json::Error> for ConfigError {
  fn from(err: serde_json::Error) -> ConfigError {
    ConfigError::Parse(err)
  }
}

impl From<InvalidBoundaryError> for ConfigError {
  fn from(err: InvalidBoundaryError) -> ConfigError {
    ConfigError::Boundary(err)
  }
}

impl Config {
  pub fn from_json(text: &str) -> Result<Config, ConfigError> {
    Ok(serde_json::from_str(text)?)
  }

  pub async fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
      .await
      .map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
      })?;
    Config::from_json(&text)
  }

  pub fn boundary_points(&self) -> Vec<Point<f64, 2>> {
    self.boundary.iter().copied().map(Point::from).collect()
  }

  pub fn location(&self) -> Location {
    Location::parse(&self.data)
  }

  /// Validate the boundary and attach the configured data location.
  pub fn build_boundary(&self) -> Result<Boundary<Location>, ConfigError> {
    Ok(Boundary::new(
      self.name.clone(),
      self.boundary_points(),
      self.location(),
    )?)
  }
}
