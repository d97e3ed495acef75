//! Key bindings and user settings

mod keybindings;
mod settings;

pub use keybindings::{KeyBinding, KeyBindings, KeyContext};
pub use settings::{ConfigError, Palette, Settings};
