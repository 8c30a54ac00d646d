
//! Rendering of the converter surfaces. This layer only displays
//! state; every conversion result it shows was produced by the core
//! modules.

use crate::app::App;
use crate::chat::Role;
use crate::state::{ManualField, Mode, Theme};

use itertools::Itertools;
use ratatui::{
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
  Frame,
};

/// Color palette derived from the active theme.
struct Palette {
  fg: Color,
  bg: Color,
  accent: Color,
  dim: Color,
}

fn palette(theme: Theme) -> Palette {
  match theme {
    Theme::Light => Palette {
      fg: Color::Black,
      bg: Color::White,
      accent: Color::Green,
      dim: Color::Gray,
    },
    Theme::Dark => Palette {
      fg: Color::White,
      bg: Color::Black,
      accent: Color::LightGreen,
      dim: Color::DarkGray,
    },
  }
}

pub fn render(app: &App, frame: &mut Frame) {
  let palette = palette(app.state.theme);
  frame.render_widget(
    Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
    frame.size(),
  );

  let layout = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(2),
      Constraint::Min(1),
      Constraint::Length(1),
    ])
    .split(frame.size());

  render_header(app, frame, layout[0], &palette);
  match app.state.mode {
    Mode::Manual => render_manual(app, frame, layout[1], &palette),
    Mode::Chat => render_chat(app, frame, layout[1], &palette),
  }
  render_footer(app, frame, layout[2], &palette);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
  let mode_label = match app.state.mode {
    Mode::Manual => "Manual Unit Converter",
    Mode::Chat => "Chat Unit Converter",
  };
  let content = Line::from(vec![
    Span::styled("ConvertX", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
    Span::raw(" - Effortless Conversions | "),
    Span::styled(mode_label, Style::default().add_modifier(Modifier::BOLD)),
  ]);
  let paragraph = Paragraph::new(content)
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
  frame.render_widget(paragraph, area);
}

fn render_manual(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
  let block = Block::default().borders(Borders::ALL).title(" Convert a Length ");
  let inner = block.inner(area);
  frame.render_widget(block, area);

  let layout = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // Value field
      Constraint::Length(1), // From selector
      Constraint::Length(1), // To selector
      Constraint::Length(1),
      Constraint::Length(2), // Result
      Constraint::Min(1),    // Known units
    ])
    .split(inner);

  let form = &app.state.manual;
  let units = app.responder().units().units();

  let focus_style = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
  let field_style = |field: ManualField| {
    if form.focus == field { focus_style } else { Style::default() }
  };

  let value_line = Line::from(vec![
    Span::styled("Value: ", field_style(ManualField::Value)),
    Span::raw(form.value_input.as_str()),
    Span::styled("█", Style::default().fg(palette.dim)),
  ]);
  frame.render_widget(Paragraph::new(value_line), layout[0]);

  let from_line = Line::from(vec![
    Span::styled("From:  ", field_style(ManualField::FromUnit)),
    Span::raw(format!("< {} >", units[form.from_index].name())),
  ]);
  frame.render_widget(Paragraph::new(from_line), layout[1]);

  let to_line = Line::from(vec![
    Span::styled("To:    ", field_style(ManualField::ToUnit)),
    Span::raw(format!("< {} >", units[form.to_index].name())),
  ]);
  frame.render_widget(Paragraph::new(to_line), layout[2]);

  if let Some(result) = &form.result {
    let result_line = Line::from(Span::styled(
      result.as_str(),
      Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(result_line).wrap(Wrap { trim: true }), layout[4]);
  }

  let known_units = units.iter().map(|u| u.name()).join(", ");
  let help = Paragraph::new(format!("Units: {}", known_units))
    .style(Style::default().fg(palette.dim))
    .wrap(Wrap { trim: true });
  frame.render_widget(help, layout[5]);
}

fn render_chat(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
  let layout = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Min(1), Constraint::Length(2)])
    .split(area);

  let transcript_block = Block::default().borders(Borders::ALL).title(" Transcript ");
  let transcript_area = transcript_block.inner(layout[0]);

  // Keep the tail of the transcript in view; there is no scrollback.
  let visible = transcript_area.height as usize;
  let messages = app.state.session.messages();
  let skipped = messages.len().saturating_sub(visible);

  let items: Vec<ListItem> = messages.iter()
    .skip(skipped)
    .map(|message| {
      let (prefix, style) = match message.role {
        Role::User => ("You: ", Style::default().add_modifier(Modifier::BOLD)),
        Role::Assistant => ("ConvertX: ", Style::default().fg(palette.accent)),
      };
      ListItem::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::raw(message.content.as_str()),
      ]))
    })
    .collect();
  frame.render_widget(List::new(items).block(transcript_block), layout[0]);

  let input_line = Line::from(vec![
    Span::styled("> ", Style::default().add_modifier(Modifier::BOLD)),
    Span::raw(app.state.chat_input.as_str()),
    Span::styled("█", Style::default().fg(palette.dim)),
  ]);
  let input = Paragraph::new(input_line)
    .block(Block::default().borders(Borders::TOP).title(" Ask me: 'Convert 10 meters to feet' "));
  frame.render_widget(input, layout[1]);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
  let mode_hint = match app.state.mode {
    Mode::Manual => "Up/Down focus | Left/Right unit | Enter convert",
    Mode::Chat => "Type a request | Enter send",
  };
  let content = Line::from(vec![
    Span::raw(mode_hint),
    Span::raw(" | Tab mode | F2 theme | Esc quit"),
  ]);
  frame.render_widget(
    Paragraph::new(content).style(Style::default().fg(palette.dim)),
    area,
  );
}
