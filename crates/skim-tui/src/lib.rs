//! TUI components for skim
//!
//! This crate provides the terminal user interface for skim,
//! including the navigable panes, state management, keybindings,
//! event handling, and screen rendering.

pub mod app;
pub mod config;
pub mod tui;
pub mod ui;
pub mod views;

pub use app::{Action, AppState, Viewport};
pub use config::{ConfigError, KeyBinding, KeyBindings, KeyContext, Palette, Settings};
pub use tui::{Event, EventHandler, Tui};
pub use ui::components::{HelpOverlay, StatusBar};
pub use ui::screens::ViewerScreen;
pub use ui::{Layout, Theme};
pub use views::{CursorRow, FilterRow, FilterView, LogRow, LogView, NavigableView};
