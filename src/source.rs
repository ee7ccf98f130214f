//! Where point documents come from.
//!
//! A [`PointSource`] performs exactly one retrieval per call to
//! [`fetch`](PointSource::fetch) and never retries on its own. Memoization lives
//! in [`Boundary`](crate::boundary::Boundary).
use log::debug;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum LoadError {
  Io {
    location: String,
    source: Arc<std::io::Error>,
  },
  Http {
    location: String,
    source: Arc<reqwest::Error>,
  },
  /// The server answered with a non-success status code.
  Status { location: String, status: u16 },
  Parse(Arc<serde_json::Error>),
}

impl std::fmt::Display for LoadError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      LoadError::Io { location, source } => write!(f, "Cannot read {}: {}", location, source),
      LoadError::Http { location, source } => write!(f, "Cannot fetch {}: {}", location, source),
      LoadError::Status { location, status } => {
        write!(f, "Fetching {} failed with status {}", location, status)
      }
      LoadError::Parse(err) => write!(f, "Malformed points document: {}", err),
    }
  }
}

impl std::error::Error for LoadError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      LoadError::Io { source, .. } => Some(&**source),
      LoadError::Http { source, .. } => Some(&**source),
      LoadError::Status { .. } => None,
      LoadError::Parse(err) => Some(&**err),
    }
  }
}

impl From<serde_json::Error> for LoadError {
  fn from(err: serde_json::Error) -> LoadError {
    LoadError::Parse(Arc::new(err))
  }
}

/// Asynchronous provider of the raw points document.
pub trait PointSource {
  fn fetch(&self) -> impl Future<Output = Result<String, LoadError>>;

  /// Human readable location, used in log messages.
  fn describe(&self) -> String;
}

impl<S: PointSource> PointSource for &S {
  fn fetch(&self) -> impl Future<Output = Result<String, LoadError>> {
    (**self).fetch()
  }

  fn describe(&self) -> String {
    (**self).describe()
  }
}

///////////////////////////////////////////////////////////////////////////////
// FileSource

#[derive(Debug, Clone)]
pub struct FileSource {
  path: PathBuf,
}

impl FileSource {
  pub fn new(path: impl Into<PathBuf>) -> FileSource {
    FileSource { path: path.into() }
  }
}

impl PointSource for FileSource {
  async fn fetch(&self) -> Result<String, LoadError> {
    debug!("reading {}", self.path.display());
    tokio::fs::read_to_string(&self.path)
      .await
      .map_err(|err| LoadError::Io {
        location: self.describe(),
        source: Arc::new(err),
      })
  }

  fn describe(&self) -> String {
    self.path.display().to_string()
  }
}

///////////////////////////////////////////////////////////////////////////////
// HttpSource

#[derive(Debug, Clone)]
pub struct HttpSource {
  client: reqwest::Client,
  url: String,
}

impl HttpSource {
  pub fn new(url: impl Into<String>) -> HttpSource {
    HttpSource::with_client(reqwest::Client::new(), url)
  }

  pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> HttpSource {
    HttpSource {
      client,
      url: url.into(),
    }
  }
}

impl PointSource for HttpSource {
  async fn fetch(&self) -> Result<String, LoadError> {
    let http_error = |err| LoadError::Http {
      location: self.url.clone(),
      source: Arc::new(err),
    };
    debug!("GET {}", self.url);
    let response = self.client.get(&self.url).send().await.map_err(http_error)?;
    let status = response.status();
    if !status.is_success() {
      return Err(LoadError::Status {
        location: self.url.clone(),
        status: status.as_u16(),
      });
    }
    response.text().await.map_err(http_error)
  }

  fn describe(&self) -> String {
    self.url.clone()
  }
}

///////////////////////////////////////////////////////////////////////////////
// StaticSource

/// A document that is already in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
  document: String,
}

impl StaticSource {
  pub fn new(document: impl Into<String>) -> StaticSource {
    StaticSource {
      document: document.into(),
    }
  }
}

impl PointSource for StaticSource {
  async fn fetch(&self) -> Result<String, LoadError> {
    Ok(self.document.clone())
  }

  fn describe(&self) -> String {
    format!("<{} bytes in memory>", self.document.len())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Location

/// A configured data location: an `http(s)://` URL or a file path.
#[derive(Debug, Clone)]
pub enum Location {
  File(FileSource),
  Http(HttpSource),
}

impl Location {
  pub fn parse(location: &str) -> Location {
    if location.starts_with("http://") || location.starts_with("https://") {
      Location::Http(HttpSource::new(location))
    } else {
      Location::File(FileSource::new(location))
    }
  }
}

impl PointSource for Location {
  async fn fetch(&self) -> Result<String, LoadError> {
    match self {
      Location::File(source) => source.fetch().await,
      Location::Http(source) => source.fetch().await,
    }
  }

  fn describe(&self) -> String {
    match self {
      Location::File(source) => source.describe(),
      Location::Http(source) => source.describe(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use claims::{assert_err, assert_matches, assert_ok};
  use std::error::Error as _;

  #[test]
  fn parse_location() {
    assert_matches!(Location::parse("data.json"), Location::File(_));
    assert_matches!(Location::parse("/srv/www/data.json"), Location::File(_));
    assert_matches!(Location::parse("http://localhost/data.json"), Location::Http(_));
    assert_matches!(Location::parse("https://example.org/data.json"), Location::Http(_));
  }

  #[tokio::test]
  async fn static_source() {
    let source = StaticSource::new(r#"{"points":[]}"#);
    assert_eq!(assert_ok!(source.fetch().await), r#"{"points":[]}"#);
    assert_eq!(source.describe(), "<13 bytes in memory>");
  }

  #[tokio::test]
  async fn missing_file() {
    let source = Location::parse("/this/file/does/not/exist.json");
    let err = assert_err!(source.fetch().await);
    assert_matches!(&err, LoadError::Io { location, .. } if location == "/this/file/does/not/exist.json");
    assert!(err.source().is_some());
  }

  #[tokio::test]
  async fn unreachable_server() {
    // Nothing listens on the discard port.
    let source = HttpSource::new("http://127.0.0.1:9/data.json");
    assert_matches!(assert_err!(source.fetch().await), LoadError::Http { .. });
  }

  #[test]
  fn parse_errors_convert() {
    let err = assert_err!(serde_json::from_str::<serde_json::Value>("{"));
    let err = LoadError::from(err);
    assert_matches!(&err, LoadError::Parse(_));
    assert!(err.to_string().starts_with("Malformed points document"));
  }
}
