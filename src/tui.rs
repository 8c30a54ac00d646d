
//! Terminal setup and teardown for the interactive surface.

use crate::{app::App, view};

use anyhow::Result;
use ratatui::{backend::CrosstermBackend, Terminal};
use crossterm::{
  execute,
  terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use std::io::{stdout, Stdout};

/// Owns the terminal for the duration of one interactive session and
/// draws the converter surface into it.
pub struct Tui {
  terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
  /// Puts the terminal into raw mode on the alternate screen.
  pub fn new() -> Result<Self> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(Self { terminal })
  }

  /// Draws one frame of the converter surface.
  pub fn draw(&mut self, app: &App) -> Result<()> {
    self.terminal.draw(|frame| view::render(app, frame))?;
    Ok(())
  }

  /// Restores the terminal to its original state.
  pub fn restore_terminal() -> Result<()> {
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
  }
}
