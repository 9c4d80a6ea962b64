//! The calculator engine: one owned state record, one handler per action
//!
//! Control flow is strictly user action → handler mutates state →
//! presentation re-renders from a snapshot. Handlers are infallible and
//! synchronous; the engine is always left in a displayable state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::format::{format_display, format_value, parse_operand};
use crate::core::history::{recalled_value, History};
use crate::core::operations::{combine, Operator};

/// A single user action the engine can consume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Press a digit key (0-9)
    Digit(u8),
    /// Press the decimal point key
    Decimal,
    /// Press an operator key
    Operator(Operator),
    /// Press equals
    Equals,
    /// Press clear (C)
    Clear,
    /// Press erase (⌫)
    Erase,
    /// Press the sign toggle (±)
    ToggleSign,
    /// Press percent (%)
    Percent,
    /// Recall a history entry's result into the display
    SelectHistory(String),
    /// Empty the history list
    ClearHistory,
    /// Flip the theme; numeric state is untouched
    ToggleTheme,
}

/// Read-only view of the engine after an action, for renderers and tests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Display text, rendered through the formatting rule
    pub display: String,
    /// Human-readable trail of the unfinished computation chain
    pub expression: String,
    /// History entries, newest first
    pub history: Vec<String>,
    /// True when the dark theme is active
    pub dark_mode: bool,
}

/// Calculator state record; every field mutates only through the handlers
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Operand text as typed, or the rendered result of a computation
    display: String,
    /// Confirmed operands and operators of the current chain
    expression: String,
    /// Operator awaiting its right operand
    pending_op: Option<Operator>,
    /// Left operand accumulated so far
    pending_value: Option<f64>,
    /// The one mode bit: the next digit press starts a fresh operand
    waiting_for_operand: bool,
    history: History,
    dark_mode: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates an engine with the session defaults: display "0", no pending
    /// computation, empty history, light theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            expression: String::new(),
            pending_op: None,
            pending_value: None,
            waiting_for_operand: false,
            history: History::new(),
            dark_mode: false,
        }
    }

    // ===== accessors =====

    /// Display text rendered through the formatting rule
    #[must_use]
    pub fn display(&self) -> String {
        format_display(&self.display)
    }

    /// Expression trail of the current chain
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Session history
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// True when the dark theme is active
    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Operator awaiting its right operand, if a chain is in progress
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_op
    }

    /// True when the next digit press starts a fresh operand
    #[must_use]
    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Captures the render view of the current state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display(),
            expression: self.expression.clone(),
            history: self.history.to_vec(),
            dark_mode: self.dark_mode,
        }
    }

    // ===== handlers =====

    /// Dispatches one action to its handler
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "keypad action");
        match action {
            Action::Digit(digit) => self.digit(digit),
            Action::Decimal => self.decimal(),
            Action::Operator(op) => self.operator(op),
            Action::Equals => self.equals(),
            Action::Clear => self.clear(),
            Action::Erase => self.erase(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Percent => self.percentage(),
            Action::SelectHistory(entry) => self.select_history(&entry),
            Action::ClearHistory => self.clear_history(),
            Action::ToggleTheme => self.toggle_theme(),
        }
    }

    /// Digit press: starts a fresh operand after an operator or equals,
    /// otherwise extends the current one. An initial "0" is replaced, not
    /// prefixed. Values above 9 are ignored.
    pub fn digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.waiting_for_operand {
            self.display = ch.to_string();
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
    }

    /// Decimal point press; a second press on the same operand is a no-op
    pub fn decimal(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Operator press: folds the typed operand into the chain and arms the
    /// next one. Chaining is strictly left to right; `2 + 3 × 4` is
    /// `(2 + 3) × 4`. A repeated press while still waiting for the operand
    /// only swaps the pending operator, without recomputing.
    pub fn operator(&mut self, op: Operator) {
        if self.waiting_for_operand && self.pending_op.is_some() {
            self.swap_trail_operator(op);
            self.pending_op = Some(op);
            return;
        }

        let operand = parse_operand(&self.display);
        if let Some(pending) = self.pending_op {
            let result = combine(self.pending_value, operand, pending);
            self.expression.push(' ');
            self.expression.push_str(&self.display);
            self.expression.push(' ');
            self.expression.push_str(op.symbol());
            self.pending_value = Some(result);
            self.display = format_value(result);
        } else {
            self.expression = format!("{} {}", self.display, op.symbol());
            self.pending_value = Some(operand);
        }
        self.pending_op = Some(op);
        self.waiting_for_operand = true;
    }

    // The trail ends with the pending operator's symbol whenever a swap
    // happens, so replacing the last space-delimited token is enough.
    fn swap_trail_operator(&mut self, op: Operator) {
        match self.expression.rfind(' ') {
            Some(index) => {
                self.expression.truncate(index + 1);
                self.expression.push_str(op.symbol());
            }
            None => self.expression = op.symbol().to_string(),
        }
    }

    /// Equals press: completes the chain, records it in history, and leaves
    /// the result ready to start the next chain. No-op without a pending
    /// operator.
    pub fn equals(&mut self) {
        let Some(op) = self.pending_op else {
            return;
        };
        let operand = parse_operand(&self.display);
        let result = combine(self.pending_value, operand, op);

        let entry = format!(
            "{} {} = {}",
            self.expression,
            self.display,
            format_value(result)
        );
        self.history.record(entry);

        self.display = format_value(result);
        self.expression.clear();
        self.pending_op = None;
        self.pending_value = None;
        self.waiting_for_operand = true;
    }

    /// Clear press: resets the current computation; history is untouched
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.expression.clear();
        self.pending_op = None;
        self.pending_value = None;
        self.waiting_for_operand = false;
    }

    /// Erase press: drops the last typed character, bottoming out at "0".
    /// Ignored while waiting for a fresh operand.
    pub fn erase(&mut self) {
        if self.waiting_for_operand {
            return;
        }
        self.display.pop();
        if self.display.is_empty() {
            self.display = "0".to_string();
        }
    }

    /// Sign toggle: negates the displayed value in place. Pending state and
    /// the waiting flag are unaffected.
    pub fn toggle_sign(&mut self) {
        self.display = format_value(-parse_operand(&self.display));
    }

    /// Percent: divides the displayed value by 100 in place. Pending state
    /// and the waiting flag are unaffected.
    pub fn percentage(&mut self) {
        self.display = format_value(parse_operand(&self.display) / 100.0);
    }

    /// History recall: copies an entry's result into the display. Entries
    /// without a `" = "` marker are ignored.
    ///
    /// Pending operator, trail, and the waiting flag are not reset: a stale
    /// pending operator applies to the recalled value on the next equals.
    pub fn select_history(&mut self, entry: &str) {
        if let Some(result) = recalled_value(entry) {
            self.display = result.to_string();
        }
    }

    /// Empties the history list
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Flips between the light and dark themes
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}
