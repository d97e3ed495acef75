pub mod components;
mod layout;
pub mod screens;
mod text;
mod theme;

pub use layout::Layout;
pub use text::expand_tabs;
pub use theme::Theme;
