//! Terminal user interface for the HeliCat animation.
//!
//! Provides a Ratatui-based TUI that repaints the candle series every tick
//! and overlays the mascot on the chart panel.

pub mod app;
pub mod chart;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Event, Message, spawn_event_reader, spawn_tick_timer, update};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
