//! Operator algebra for the four keypad operators
//!
//! Chaining is strictly left to right; `combine` performs one chaining
//! step. There is no precedence anywhere in this module.

use serde::{Deserialize, Serialize};

/// Type-safe operator enum covering the four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// Returns the symbol used on the keypad and in expression trails
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Returns the symbol as a single character, for button labels
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Maps a typed character to an operator.
    ///
    /// Accepts the keypad glyphs plus the ASCII aliases `*` and `/`.
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division by zero is not trapped; the infinite or NaN result flows
    /// through display formatting like any other value.
    #[must_use]
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }

    /// All operators, in keypad column order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Divide, Self::Multiply, Self::Subtract, Self::Add]
    }
}

/// One chaining step: folds the confirmed operand into the running value.
///
/// An absent left operand means no computation was in progress yet; the
/// right operand passes through unchanged. This covers the first operator
/// press of a chain.
#[must_use]
pub fn combine(left: Option<f64>, right: f64, op: Operator) -> f64 {
    match left {
        Some(value) => op.apply(value, right),
        None => right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Operator symbol tests =====

    #[test]
    fn test_symbol_for_every_operator() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
    }

    #[test]
    fn test_glyph_matches_symbol() {
        for op in Operator::all() {
            assert_eq!(op.symbol(), op.glyph().to_string());
        }
    }

    // ===== from_key tests =====

    #[test]
    fn test_from_key_glyphs() {
        assert_eq!(Operator::from_key('+'), Some(Operator::Add));
        assert_eq!(Operator::from_key('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_key('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_key('÷'), Some(Operator::Divide));
    }

    #[test]
    fn test_from_key_ascii_aliases() {
        assert_eq!(Operator::from_key('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_key('/'), Some(Operator::Divide));
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(Operator::from_key('^'), None);
        assert_eq!(Operator::from_key('x'), None);
    }

    // ===== apply tests =====

    #[test]
    fn test_apply_add() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), -1.0);
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operator::Multiply.apply(4.0, 2.5), 10.0);
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operator::Divide.apply(9.0, 4.0), 2.25);
    }

    #[test]
    fn test_divide_by_zero_is_infinite() {
        assert!(Operator::Divide.apply(1.0, 0.0).is_infinite());
        assert!(Operator::Divide.apply(-1.0, 0.0).is_infinite());
    }

    #[test]
    fn test_zero_divided_by_zero_is_nan() {
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    // ===== combine tests =====

    #[test]
    fn test_combine_without_pending_value_passes_through() {
        assert_eq!(combine(None, 7.0, Operator::Add), 7.0);
        assert_eq!(combine(None, 7.0, Operator::Divide), 7.0);
    }

    #[test]
    fn test_combine_with_pending_value_applies_operator() {
        assert_eq!(combine(Some(10.0), 4.0, Operator::Subtract), 6.0);
        assert_eq!(combine(Some(10.0), 4.0, Operator::Multiply), 40.0);
    }

    // ===== Property-based tests =====

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e9f64..1e9f64, b in -1e9f64..1e9f64) {
            prop_assert!((Operator::Add.apply(a, b) - Operator::Add.apply(b, a)).abs() < 1e-9);
        }

        #[test]
        fn prop_combine_none_is_identity(value in -1e9f64..1e9f64) {
            for op in Operator::all() {
                prop_assert_eq!(combine(None, value, op), value);
            }
        }

        #[test]
        fn prop_subtract_then_add_round_trips(a in -1e6f64..1e6f64, b in -1e6f64..1e6f64) {
            let there = Operator::Subtract.apply(a, b);
            let back = Operator::Add.apply(there, b);
            prop_assert!((back - a).abs() < 1e-6);
        }
    }
}
