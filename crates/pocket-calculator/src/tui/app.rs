//! TUI application state
//!
//! Wraps the engine with view-only concerns: quit flag, history sidebar
//! visibility and selection, keypad highlight, and the erase flash. None of
//! these feed back into the numeric model.

use crate::core::engine::{Action, Calculator};

use super::input::UiAction;
use super::keypad::{Keypad, PadKey};

/// Render ticks the erase key stays inverted after a press
const ERASE_FLASH_TICKS: u8 = 2;

/// Terminal front-end state around one engine instance
#[derive(Debug)]
pub struct CalculatorApp {
    calc: Calculator,
    keypad: Keypad,
    show_history: bool,
    selected: usize,
    flash_ticks: u8,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with a fresh engine and the history sidebar hidden
    #[must_use]
    pub fn new() -> Self {
        Self {
            calc: Calculator::new(),
            keypad: Keypad::new(),
            show_history: false,
            selected: 0,
            flash_ticks: 0,
            should_quit: false,
        }
    }

    /// The wrapped engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// The keypad grid, with current highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// True while the history sidebar is visible
    #[must_use]
    pub fn show_history(&self) -> bool {
        self.show_history
    }

    /// Index of the selected history entry (0 = newest)
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True while the erase key should render inverted
    #[must_use]
    pub fn erase_flash(&self) -> bool {
        self.flash_ticks > 0
    }

    /// True once the user asked to quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests shutdown of the event loop
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handles one UI action from keyboard or mouse
    pub fn handle(&mut self, action: UiAction) {
        match action {
            UiAction::Key(key) => self.press_key(key),
            UiAction::ToggleHistory => self.show_history = !self.show_history,
            UiAction::ClearHistory => self.press(Action::ClearHistory),
            UiAction::ToggleTheme => self.press(Action::ToggleTheme),
            UiAction::SelectionUp => self.selected = self.selected.saturating_sub(1),
            UiAction::SelectionDown => {
                self.selected += 1;
                self.clamp_selection();
            }
            UiAction::RecallSelected => self.recall_selected(),
            UiAction::Quit => self.quit(),
            UiAction::None => {}
        }
    }

    /// Presses a keypad button: highlights it and feeds the engine
    pub fn press_key(&mut self, key: PadKey) {
        self.keypad.highlight(key);
        self.press(key.action());
    }

    /// Feeds one engine action, arming the erase flash when appropriate
    pub fn press(&mut self, action: Action) {
        if matches!(action, Action::Erase) && !self.calc.is_waiting_for_operand() {
            self.flash_ticks = ERASE_FLASH_TICKS;
        }
        self.calc.apply(action);
        self.clamp_selection();
    }

    /// Moves the history selection to `index`, clamped to the list
    pub fn set_selection(&mut self, index: usize) {
        self.selected = index;
        self.clamp_selection();
    }

    /// Recalls the selected history entry into the display
    pub fn recall_selected(&mut self) {
        if let Some(entry) = self.calc.history().get(self.selected) {
            let entry = entry.to_string();
            self.press(Action::SelectHistory(entry));
        }
    }

    /// Advances per-frame visual state; called once per render tick
    pub fn on_tick(&mut self) {
        self.flash_ticks = self.flash_ticks.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.calc.history().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
