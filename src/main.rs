use std::process;

use clap::{command, Arg, ArgAction};
use log::{error, info};

use mapbounds::classify::ClassificationStrategy;
use mapbounds::config::{Config, ConfigError};
use mapbounds::controller::Controller;
use mapbounds::data::Point;
use mapbounds::view::{Filter, Scene, UnknownFilter};
use mapbounds::LoadError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
  env_logger::init();
  match run().await {
    Ok(()) => info!("done"),
    Err(e) => {
      error!("fatal error: {}", e);
      process::exit(1);
    }
  }
}

#[derive(Debug)]
enum Error {
  Config(ConfigError),
  Filter(UnknownFilter),
  Load(LoadError),
  Output(serde_json::Error),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Error::Config(err) => err.fmt(f),
      Error::Filter(err) => err.fmt(f),
      Error::Load(err) => err.fmt(f),
      Error::Output(err) => write!(f, "Cannot write points: {}", err),
    }
  }
}

async fn run() -> Result<(), Error> {
  let matches = command!()
    .arg(
      Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help("JSON configuration file"),
    )
    .arg(
      Arg::new("data")
        .short('d')
        .long("data")
        .value_name("LOCATION")
        .help("File path or http(s) URL of the points document"),
    )
    .arg(
      Arg::new("filter")
        .short('f')
        .long("filter")
        .value_name("FILTER")
        .help("Which points to print: all, inside or outside"),
    )
    .arg(
      Arg::new("exact")
        .long("exact")
        .action(ArgAction::SetTrue)
        .help("Test points against the boundary polygon instead of its bounding rectangle"),
    )
    .get_matches();

  let mut config = match matches.get_one::<String>("config") {
    Some(path) => Config::load(path).await.map_err(Error::Config)?,
    None => Config::default(),
  };
  if let Some(data) = matches.get_one::<String>("data") {
    config.data = data.clone();
  }
  if let Some(filter) = matches.get_one::<String>("filter") {
    config.filter = filter.parse::<Filter>().map_err(Error::Filter)?;
  }
  if matches.get_flag("exact") {
    config.strategy = ClassificationStrategy::Exact;
  }

  let boundary = config.build_boundary().map_err(Error::Config)?;
  let mut controller = Controller::with_strategy(boundary, Scene::new(), config.strategy);
  controller.select(config.filter);
  let partition = controller.render().await.map_err(Error::Load)?;
  info!(
    "{} points: {} inside, {} outside",
    partition.len(),
    partition.inside.len(),
    partition.outside.len()
  );

  let visible: Vec<&Point<f64, 2>> = controller.view().visible_points().collect();
  let stdout = std::io::stdout();
  serde_json::to_writer_pretty(stdout.lock(), &visible).map_err(Error::Output)?;
  println!();
  Ok(())
}
