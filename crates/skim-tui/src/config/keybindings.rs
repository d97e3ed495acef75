use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::app::Action;

/// A key combination
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Context for keybindings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyContext {
    Global,
    Viewer,
    Help,
}

/// Keybinding configuration
pub struct KeyBindings {
    bindings: HashMap<KeyContext, HashMap<KeyBinding, Action>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        // Global bindings
        let mut global = HashMap::new();
        global.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        global.insert(KeyBinding::new(KeyCode::Char('q')), Action::Quit);
        bindings.insert(KeyContext::Global, global);

        // Viewer bindings, applied to whichever pane has focus
        let mut viewer = HashMap::new();
        viewer.insert(KeyBinding::new(KeyCode::Char('k')), Action::CursorUp);
        viewer.insert(KeyBinding::new(KeyCode::Up), Action::CursorUp);
        viewer.insert(KeyBinding::new(KeyCode::Char('j')), Action::CursorDown);
        viewer.insert(KeyBinding::new(KeyCode::Down), Action::CursorDown);
        viewer.insert(KeyBinding::new(KeyCode::Enter), Action::Toggle);
        viewer.insert(KeyBinding::new(KeyCode::Char(' ')), Action::Toggle);
        viewer.insert(KeyBinding::new(KeyCode::Tab), Action::NextFocus);
        viewer.insert(KeyBinding::new(KeyCode::Char('h')), Action::ToggleHideUnmatched);
        viewer.insert(KeyBinding::new(KeyCode::Char('?')), Action::ToggleHelp);
        viewer.insert(KeyBinding::shift(KeyCode::Char('?')), Action::ToggleHelp);
        bindings.insert(KeyContext::Viewer, viewer);

        // Help overlay bindings
        let mut help = HashMap::new();
        help.insert(KeyBinding::new(KeyCode::Char('?')), Action::ToggleHelp);
        help.insert(KeyBinding::shift(KeyCode::Char('?')), Action::ToggleHelp);
        help.insert(KeyBinding::new(KeyCode::Esc), Action::CloseHelp);
        bindings.insert(KeyContext::Help, help);

        Self { bindings }
    }

    /// Look up action for key event in given context
    pub fn get_action(&self, context: KeyContext, key: &KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(key);

        // First check context-specific bindings
        if let Some(action) = self
            .bindings
            .get(&context)
            .and_then(|context_bindings| context_bindings.get(&binding))
        {
            return Some(*action);
        }

        // Fall back to global bindings
        self.bindings
            .get(&KeyContext::Global)?
            .get(&binding)
            .copied()
    }

    /// Key hints for the status bar as (key, description) pairs
    pub fn hints() -> Vec<(&'static str, &'static str)> {
        vec![
            ("↑/k", "Up"),
            ("↓/j", "Down"),
            ("Space", "Toggle"),
            ("Tab", "Focus"),
            ("h", "Hide"),
            ("?", "Help"),
            ("q", "Quit"),
        ]
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}
