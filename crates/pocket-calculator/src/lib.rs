//! Pocket Calculator
//!
//! A button-driven arithmetic calculator split into an engine that owns all
//! state and a terminal front end that renders it. The engine consumes
//! abstract keypad actions and exposes a snapshot per action; evaluation is
//! strictly left-to-right chaining with no operator precedence, matching a
//! pocket calculator rather than a parser.
//!
//! # Example
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.digit(2);
//! calc.operator(Operator::Add);
//! calc.digit(3);
//! calc.operator(Operator::Multiply);
//! calc.digit(4);
//! calc.equals();
//!
//! // Left-to-right chaining: (2 + 3) × 4, not 2 + (3 × 4)
//! assert_eq!(calc.display(), "20");
//! assert_eq!(calc.history().newest(), Some("2 + 3 × 4 = 20"));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::engine::{Action, Calculator, Snapshot};
    pub use crate::core::format::{format_display, format_value, parse_operand};
    pub use crate::core::history::History;
    pub use crate::core::operations::{combine, Operator};
    pub use crate::driver::{script, CalculatorDriver, ScriptError};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new();
        calc.digit(6);
        calc.operator(Operator::Multiply);
        calc.digit(7);
        calc.equals();
        assert_eq!(calc.display(), "42");
    }

    #[test]
    fn test_driver_through_prelude() {
        let mut calc = Calculator::new();
        for action in script("12+8=").unwrap() {
            calc.press(action);
        }
        assert_eq!(calc.snapshot().display, "20");
    }
}
