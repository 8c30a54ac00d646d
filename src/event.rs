
//! Terminal event handling for the interactive surface.

use crate::app::Action;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use std::time::Duration;

/// Reads terminal events and maps them to application `Action`s.
pub struct EventHandler;

impl EventHandler {
  pub fn new() -> Self {
    Self
  }

  /// Blocks until a key press arrives or the poll times out, in which
  /// case a `Tick` is produced so the loop can redraw.
  pub fn next(&self) -> Result<Action> {
    if event::poll(Duration::from_millis(250))? {
      if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
          return Ok(Self::map_key_event(key));
        }
      }
    }
    Ok(Action::Tick)
  }

  /// Quit bindings are resolved here since they apply in every mode;
  /// all other keys are interpreted by the application against the
  /// active mode.
  fn map_key_event(key: KeyEvent) -> Action {
    match key.code {
      KeyCode::Esc => Action::Quit,
      KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
      _ => Action::Key(key),
    }
  }
}

impl Default for EventHandler {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_map_quit_keys() {
    let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    assert_eq!(EventHandler::map_key_event(esc), Action::Quit);
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(EventHandler::map_key_event(ctrl_c), Action::Quit);
  }

  #[test]
  fn test_map_ordinary_key() {
    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
    assert_eq!(EventHandler::map_key_event(key), Action::Key(key));
  }
}
