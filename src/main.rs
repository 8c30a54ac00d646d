
use convertx::app::App;
use convertx::event::EventHandler;
use convertx::state::{Mode, Theme};
use convertx::tui::Tui;

use anyhow::Result;
use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use std::fs::File;
use std::path::PathBuf;

/// Interactive length-unit converter.
#[derive(Parser)]
#[command(name = "convertx")]
#[command(about = "Interactive length-unit converter", long_about = None)]
struct Cli {
  /// Converter surface to start in.
  #[arg(long, value_enum, default_value = "manual")]
  mode: Mode,

  /// Color scheme.
  #[arg(long, value_enum, default_value = "light")]
  theme: Theme,

  /// Write diagnostic logs to this file (stdout belongs to the UI).
  #[arg(long)]
  log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  if let Some(path) = &cli.log_file {
    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(path)?)?;
  }

  let mut app = App::new(cli.mode, cli.theme);
  let mut tui = Tui::new()?;
  let event_handler = EventHandler::new();
  log::info!("convertx started in {:?} mode", cli.mode);

  while app.state.is_running {
    tui.draw(&app)?;
    let action = event_handler.next()?;
    app.dispatch(action)?;
  }

  Tui::restore_terminal()?;
  log::debug!(
    "session transcript on exit: {}",
    serde_json::to_string(app.state.session.messages())?
  );
  Ok(())
}
