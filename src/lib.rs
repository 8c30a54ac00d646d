
pub mod app;
pub mod chat;
pub mod event;
pub mod parsing;
pub mod state;
pub mod tui;
pub mod units;
pub mod view;
