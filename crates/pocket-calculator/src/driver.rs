//! Unified driver over the calculator's action API
//!
//! Write the scenario once, run it against every frontend: the same
//! verification functions exercise the bare engine and the TUI app wrapper
//! through one trait.

use thiserror::Error;

use crate::core::engine::{Action, Calculator, Snapshot};
use crate::core::operations::Operator;

/// Abstract handle a scenario uses to press buttons and read state
pub trait CalculatorDriver {
    /// Feeds one action to the calculator under test
    fn press(&mut self, action: Action);

    /// Reads the rendered state after the actions so far
    fn snapshot(&self) -> Snapshot;
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, action: Action) {
        self.apply(action);
    }

    fn snapshot(&self) -> Snapshot {
        Calculator::snapshot(self)
    }
}

/// Error from [`script`] on a character with no keypad meaning
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no keypad button for {key:?} (position {position})")]
pub struct ScriptError {
    /// The unrecognized character
    pub key: char,
    /// Character offset within the script
    pub position: usize,
}

/// Parses a compact key script into actions.
///
/// Recognized keys: digits, `.`, the four operators (ASCII `*` and `/`
/// accepted), `=` (equals), `C`/`c` (clear), `<` (erase), `~` (sign
/// toggle), and `%` (percent). Whitespace is ignored.
pub fn script(keys: &str) -> Result<Vec<Action>, ScriptError> {
    let mut actions = Vec::new();
    for (position, key) in keys.chars().enumerate() {
        if key.is_whitespace() {
            continue;
        }
        let action = if let Some(digit) = key.to_digit(10) {
            Action::Digit(digit as u8)
        } else if let Some(op) = Operator::from_key(key) {
            Action::Operator(op)
        } else {
            match key {
                '.' => Action::Decimal,
                '=' => Action::Equals,
                'C' | 'c' => Action::Clear,
                '<' => Action::Erase,
                '~' => Action::ToggleSign,
                '%' => Action::Percent,
                _ => return Err(ScriptError { key, position }),
            }
        };
        actions.push(action);
    }
    Ok(actions)
}

/// Parses a script and feeds it to a driver
pub fn run_script<D: CalculatorDriver>(driver: &mut D, keys: &str) -> Result<(), ScriptError> {
    for action in script(keys)? {
        driver.press(action);
    }
    Ok(())
}

fn tap_number<D: CalculatorDriver>(driver: &mut D, text: &str) {
    for ch in text.chars() {
        if ch == '.' {
            driver.press(Action::Decimal);
        } else if let Some(digit) = ch.to_digit(10) {
            driver.press(Action::Digit(digit as u8));
        }
    }
}

// ===== Unified verification scenarios =====
// These run against ANY CalculatorDriver implementation.

/// Verifies digit and decimal entry build the typed operand
pub fn verify_operand_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Action::Clear);
    tap_number(driver, "12.5");
    assert_eq!(driver.snapshot().display, "12.5");
}

/// Verifies strict left-to-right chaining without precedence
pub fn verify_left_to_right_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Action::Clear);
    tap_number(driver, "2");
    driver.press(Action::Operator(Operator::Add));
    tap_number(driver, "3");
    driver.press(Action::Operator(Operator::Multiply));
    tap_number(driver, "4");
    driver.press(Action::Equals);
    assert_eq!(driver.snapshot().display, "20");
}

/// Verifies a repeated operator press swaps the operator without computing
pub fn verify_operator_override<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Action::Clear);
    driver.press(Action::ClearHistory);
    tap_number(driver, "2");
    driver.press(Action::Operator(Operator::Add));
    driver.press(Action::Operator(Operator::Multiply));
    tap_number(driver, "3");
    driver.press(Action::Equals);

    let snapshot = driver.snapshot();
    assert_eq!(snapshot.display, "6");
    assert_eq!(
        snapshot.history.first().map(String::as_str),
        Some("2 × 3 = 6")
    );
}

/// Verifies sign toggle and percent transform the display in place
pub fn verify_unary_transforms<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Action::Clear);
    tap_number(driver, "50");
    driver.press(Action::Percent);
    assert_eq!(driver.snapshot().display, "0.5");
    driver.press(Action::Percent);
    assert_eq!(driver.snapshot().display, "0.005");
    driver.press(Action::ToggleSign);
    assert_eq!(driver.snapshot().display, "-0.005");
    driver.press(Action::ToggleSign);
    assert_eq!(driver.snapshot().display, "0.005");
}

/// Verifies erase drops one character and bottoms out at "0"
pub fn verify_erase<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Action::Clear);
    tap_number(driver, "12");
    driver.press(Action::Erase);
    assert_eq!(driver.snapshot().display, "1");
    driver.press(Action::Erase);
    assert_eq!(driver.snapshot().display, "0");
}

/// Verifies history order (newest first), recall, and clearing
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Action::ClearHistory);
    driver.press(Action::Clear);
    tap_number(driver, "1");
    driver.press(Action::Operator(Operator::Add));
    tap_number(driver, "1");
    driver.press(Action::Equals);
    driver.press(Action::Clear);
    tap_number(driver, "2");
    driver.press(Action::Operator(Operator::Add));
    tap_number(driver, "2");
    driver.press(Action::Equals);

    let history = driver.snapshot().history;
    assert_eq!(history, vec!["2 + 2 = 4".to_string(), "1 + 1 = 2".to_string()]);

    driver.press(Action::Clear);
    driver.press(Action::SelectHistory("1 + 1 = 2".to_string()));
    assert_eq!(driver.snapshot().display, "2");

    driver.press(Action::ClearHistory);
    assert!(driver.snapshot().history.is_empty());
}

/// Runs every scenario in sequence against one driver
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_operand_entry(driver);
    verify_left_to_right_chaining(driver);
    verify_operator_override(driver);
    verify_unary_transforms(driver);
    verify_erase(driver);
    verify_history(driver);
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{Action, CalculatorDriver, Snapshot};
    use crate::tui::CalculatorApp;

    /// Driver over the TUI app wrapper
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver with a fresh app
        #[must_use]
        pub fn new() -> Self {
            Self {
                app: CalculatorApp::new(),
            }
        }

        /// Returns the wrapped app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns the wrapped app mutably
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: Action) {
            self.app.press(action);
        }

        fn snapshot(&self) -> Snapshot {
            self.app.calculator().snapshot()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

#[cfg(test)]
mod tests {
    use super::*;

    // ===== script tests =====

    #[test]
    fn test_script_parses_all_keys() {
        let actions = script("1.+-×÷*/=C<~%").unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Digit(1),
                Action::Decimal,
                Action::Operator(Operator::Add),
                Action::Operator(Operator::Subtract),
                Action::Operator(Operator::Multiply),
                Action::Operator(Operator::Divide),
                Action::Operator(Operator::Multiply),
                Action::Operator(Operator::Divide),
                Action::Equals,
                Action::Clear,
                Action::Erase,
                Action::ToggleSign,
                Action::Percent,
            ]
        );
    }

    #[test]
    fn test_script_ignores_whitespace() {
        assert_eq!(script(" 1 + 2 = ").unwrap().len(), 4);
    }

    #[test]
    fn test_script_rejects_unknown_keys() {
        let err = script("12a").unwrap_err();
        assert_eq!(err, ScriptError { key: 'a', position: 2 });
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_run_script_drives_calculator() {
        let mut calc = Calculator::new();
        run_script(&mut calc, "9-4=").unwrap();
        assert_eq!(calc.snapshot().display, "5");
    }

    // ===== Engine driver tests =====

    #[test]
    fn test_engine_press_and_snapshot() {
        let mut calc = Calculator::new();
        CalculatorDriver::press(&mut calc, Action::Digit(3));
        let snapshot = CalculatorDriver::snapshot(&calc);
        assert_eq!(snapshot.display, "3");
    }

    #[test]
    fn test_all_scenarios_headless() {
        run_all_scenarios(&mut Calculator::new());
    }

    // ===== TUI driver tests =====

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;

        #[test]
        fn test_tui_driver_new() {
            let driver = TuiDriver::new();
            assert_eq!(driver.snapshot().display, "0");
        }

        #[test]
        fn test_tui_driver_app_access() {
            let mut driver = TuiDriver::new();
            driver.app_mut().press(Action::Digit(8));
            assert_eq!(driver.app().calculator().display(), "8");
        }

        #[test]
        fn test_all_scenarios_tui() {
            run_all_scenarios(&mut TuiDriver::new());
        }
    }
}
