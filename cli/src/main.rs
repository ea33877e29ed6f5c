use std::error::Error;
use std::io;

use clap::Parser;
use tracing::{debug, info, warn};

use opt_core::app::env;
use opt_core::app::tracing::AppTracingBuilder;

use crate::cli::{Cli, run};

mod cli;

fn main() -> Result<(), Box<dyn Error>> {
  let dotenv = env::load_dotenv_into_env();
  let _tracing = AppTracingBuilder::default().build()?;
  match dotenv {
    Ok(Some(path)) => debug!(path = %path.display(), "loaded .env file"),
    Ok(None) => {}
    Err(cause) => warn!(%cause, "failed to load .env file; continuing without it"),
  }

  let cli = Cli::parse();
  let summary = run(&cli, &mut io::stdout().lock())?;
  info!(present = summary.present, absent = summary.absent, "wrapped all values");

  Ok(())
}
