//! Terminal front end for the calculator
//!
//! Renders engine snapshots and forwards user input. All keyboard and mouse
//! handling lives here; the engine only ever sees abstract keypad actions.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, UiAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget, PadKey};
pub use ui::{areas, history_index_at, render, Areas, CalculatorScreen};
