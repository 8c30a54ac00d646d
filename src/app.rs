
//! Top-level application: maps dispatched actions onto the session
//! state and invokes the conversion core.

use crate::chat::Responder;
use crate::state::{ApplicationState, ManualField, Mode, Theme};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Notice shown when the manual form is submitted without a usable
/// numeric value.
pub const VALUE_NOTICE: &str = "Please enter a numeric value to convert!";

/// Actions dispatched from the event loop to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
  Quit,
  Tick,
  Key(KeyEvent),
}

pub struct App {
  pub state: ApplicationState,
  responder: Responder,
}

impl App {
  pub fn new(mode: Mode, theme: Theme) -> Self {
    Self {
      state: ApplicationState::new(mode, theme),
      responder: Responder::with_default_tables(),
    }
  }

  pub fn responder(&self) -> &Responder {
    &self.responder
  }

  pub fn dispatch(&mut self, action: Action) -> Result<()> {
    match action {
      Action::Quit => self.state.quit(),
      Action::Tick => {}
      Action::Key(key) => self.handle_key(key),
    }
    Ok(())
  }

  fn handle_key(&mut self, key: KeyEvent) {
    // Surface-independent bindings first; everything else belongs to
    // the active mode.
    match key.code {
      KeyCode::Tab => {
        self.state.switch_mode();
        log::info!("switched to {:?} mode", self.state.mode);
        return;
      }
      KeyCode::F(2) => {
        self.state.toggle_theme();
        log::info!("switched to {:?} theme", self.state.theme);
        return;
      }
      _ => {}
    }
    match self.state.mode {
      Mode::Manual => self.handle_manual_key(key),
      Mode::Chat => self.handle_chat_key(key),
    }
  }

  fn handle_manual_key(&mut self, key: KeyEvent) {
    let unit_count = self.responder.units().len();
    let form = &mut self.state.manual;
    match key.code {
      KeyCode::Up => form.focus_prev(),
      KeyCode::Down => form.focus_next(),
      KeyCode::Left => form.cycle_unit_back(unit_count),
      KeyCode::Right => form.cycle_unit_forward(unit_count),
      KeyCode::Backspace if form.focus == ManualField::Value => {
        form.value_input.pop();
      }
      KeyCode::Char(ch) if form.focus == ManualField::Value && (ch.is_ascii_digit() || ch == '.') => {
        form.value_input.push(ch);
      }
      KeyCode::Enter => self.submit_manual(),
      _ => {}
    }
  }

  fn handle_chat_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Char(ch) => self.state.chat_input.push(ch),
      KeyCode::Backspace => {
        self.state.chat_input.pop();
      }
      KeyCode::Enter => self.submit_chat(),
      _ => {}
    }
  }

  /// Converts the manual form's value between the two selected units
  /// and stores the result line on the form.
  fn submit_manual(&mut self) {
    let value = match self.state.manual.value_input.parse::<f64>() {
      Ok(value) => value,
      Err(_) => {
        self.state.manual.result = Some(VALUE_NOTICE.to_owned());
        return;
      }
    };
    let units = self.responder.units().units();
    let from = &units[self.state.manual.from_index];
    let to = &units[self.state.manual.to_index];
    let result = self.responder.units().convert(value, from, to);
    log::debug!("manual conversion: {} {} -> {} {}", value, from.name(), result, to.name());
    let line = format!("{} {} is equal to {:.5} {}", value, from.name(), result, to.name());
    self.state.manual.result = Some(line);
  }

  fn submit_chat(&mut self) {
    let input = self.state.chat_input.trim().to_owned();
    if input.is_empty() {
      return;
    }
    self.state.chat_input.clear();
    self.responder.exchange(&mut self.state.session, &input);
  }
}
