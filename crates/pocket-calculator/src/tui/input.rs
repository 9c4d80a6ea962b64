//! Keyboard input mapping for the terminal front end
//!
//! Physical input never reaches the engine; every key resolves to a UI
//! action here, and only keypad presses are forwarded on as engine actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::keypad::PadKey;

/// Actions the TUI layer can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Press a keypad button
    Key(PadKey),
    /// Show or hide the history sidebar
    ToggleHistory,
    /// Empty the history list
    ClearHistory,
    /// Flip between the light and dark themes
    ToggleTheme,
    /// Move the history selection towards the newest entry
    SelectionUp,
    /// Move the history selection towards the oldest entry
    SelectionDown,
    /// Recall the selected history entry into the display
    RecallSelected,
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Maps key events to UI actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps one key event to a UI action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> UiAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => UiAction::Quit,
                KeyCode::Char('l') => UiAction::ClearHistory,
                _ => UiAction::None,
            };
        }

        match code {
            KeyCode::Char('t') => UiAction::ToggleTheme,
            KeyCode::Char('h') => UiAction::ToggleHistory,
            KeyCode::Char('n') => UiAction::Key(PadKey::ToggleSign),
            KeyCode::Char('r') => UiAction::RecallSelected,
            KeyCode::Char('q') => UiAction::Quit,
            KeyCode::Char(ch) => PadKey::from_char(ch).map_or(UiAction::None, UiAction::Key),
            KeyCode::Enter => UiAction::Key(PadKey::Equals),
            KeyCode::Backspace => UiAction::Key(PadKey::Erase),
            KeyCode::Esc => UiAction::Key(PadKey::Clear),
            KeyCode::Up => UiAction::SelectionUp,
            KeyCode::Down => UiAction::SelectionDown,
            _ => UiAction::None,
        }
    }
}
