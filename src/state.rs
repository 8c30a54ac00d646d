
//! Application state for the interactive converter.

use crate::chat::ChatSession;

use clap::ValueEnum;

/// Which converter surface is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
  #[default]
  Manual,
  Chat,
}

/// Cosmetic color scheme for the whole surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
  #[default]
  Light,
  Dark,
}

impl Mode {
  pub fn toggled(self) -> Mode {
    match self {
      Mode::Manual => Mode::Chat,
      Mode::Chat => Mode::Manual,
    }
  }
}

impl Theme {
  pub fn toggled(self) -> Theme {
    match self {
      Theme::Light => Theme::Dark,
      Theme::Dark => Theme::Light,
    }
  }
}

/// Fields of the manual converter form, in focus traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManualField {
  #[default]
  Value,
  FromUnit,
  ToUnit,
}

/// State of the manual converter form: a numeric input buffer, two
/// unit selectors indexing the canonical table order, and the last
/// result line, if any.
#[derive(Debug, Clone, Default)]
pub struct ManualForm {
  pub value_input: String,
  pub from_index: usize,
  pub to_index: usize,
  pub focus: ManualField,
  pub result: Option<String>,
}

impl ManualForm {
  pub fn focus_next(&mut self) {
    self.focus = match self.focus {
      ManualField::Value => ManualField::FromUnit,
      ManualField::FromUnit => ManualField::ToUnit,
      ManualField::ToUnit => ManualField::Value,
    };
  }

  pub fn focus_prev(&mut self) {
    self.focus = match self.focus {
      ManualField::Value => ManualField::ToUnit,
      ManualField::FromUnit => ManualField::Value,
      ManualField::ToUnit => ManualField::FromUnit,
    };
  }

  /// Advances the focused unit selector, wrapping around the table.
  /// Has no effect while the value field is focused.
  pub fn cycle_unit_forward(&mut self, unit_count: usize) {
    match self.focus {
      ManualField::Value => {}
      ManualField::FromUnit => self.from_index = (self.from_index + 1) % unit_count,
      ManualField::ToUnit => self.to_index = (self.to_index + 1) % unit_count,
    }
  }

  pub fn cycle_unit_back(&mut self, unit_count: usize) {
    match self.focus {
      ManualField::Value => {}
      ManualField::FromUnit => self.from_index = (self.from_index + unit_count - 1) % unit_count,
      ManualField::ToUnit => self.to_index = (self.to_index + unit_count - 1) % unit_count,
    }
  }
}

/// The whole mutable state of one interactive session. Owned by the
/// event loop; conversion tables themselves are immutable and live
/// elsewhere.
#[derive(Debug, Clone)]
pub struct ApplicationState {
  pub mode: Mode,
  pub theme: Theme,
  pub manual: ManualForm,
  pub chat_input: String,
  pub session: ChatSession,
  pub is_running: bool,
}

impl ApplicationState {
  pub fn new(mode: Mode, theme: Theme) -> Self {
    Self {
      mode,
      theme,
      manual: ManualForm::default(),
      chat_input: String::new(),
      session: ChatSession::new(),
      is_running: true,
    }
  }

  pub fn quit(&mut self) {
    self.is_running = false;
  }

  pub fn switch_mode(&mut self) {
    self.mode = self.mode.toggled();
  }

  pub fn toggle_theme(&mut self) {
    self.theme = self.theme.toggled();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_focus_cycle() {
    let mut form = ManualForm::default();
    assert_eq!(form.focus, ManualField::Value);
    form.focus_next();
    assert_eq!(form.focus, ManualField::FromUnit);
    form.focus_next();
    form.focus_next();
    assert_eq!(form.focus, ManualField::Value);
    form.focus_prev();
    assert_eq!(form.focus, ManualField::ToUnit);
  }

  #[test]
  fn test_unit_cycle_wraps() {
    let mut form = ManualForm {
      focus: ManualField::FromUnit,
      ..ManualForm::default()
    };
    form.cycle_unit_back(11);
    assert_eq!(form.from_index, 10);
    form.cycle_unit_forward(11);
    assert_eq!(form.from_index, 0);
    // The value field ignores unit cycling.
    form.focus = ManualField::Value;
    form.cycle_unit_forward(11);
    assert_eq!(form.from_index, 0);
    assert_eq!(form.to_index, 0);
  }

  #[test]
  fn test_mode_and_theme_toggles() {
    let mut state = ApplicationState::new(Mode::Manual, Theme::Light);
    state.switch_mode();
    assert_eq!(state.mode, Mode::Chat);
    state.toggle_theme();
    assert_eq!(state.theme, Theme::Dark);
    state.toggle_theme();
    assert_eq!(state.theme, Theme::Light);
    assert!(state.is_running);
    state.quit();
    assert!(!state.is_running);
  }
}
