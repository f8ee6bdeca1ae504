//! # Button Identifiers
//!
//! The fixed vocabulary of the keypad: 20 buttons arranged in a 5x4 grid.
//! Buttons are an enumerated type compared by value equality, so hosts never
//! match on label strings; the label is derived data for rendering only.
//!
//! ## Architecture
//!
//! This module provides:
//! - Type-safe button identification via the `Button` enum
//! - The four binary operators and their arithmetic
//! - The standard grid layout and a label lookup for hosts
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::buttons::{Button, BinaryOp, STANDARD_LAYOUT};
//!
//! // Resolve a rendered label back to its identifier
//! let button = Button::from_label("÷").unwrap();
//! assert_eq!(button, Button::Op(BinaryOp::Divide));
//!
//! // Walk the grid the way a host builds its button panel
//! for row in STANDARD_LAYOUT {
//!     for button in row {
//!         print!("[{}]", button.label());
//!     }
//!     println!();
//! }
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Binary Operators
// ============================================================================

/// The four binary operators on the keypad's right column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl BinaryOp {
    /// The operator symbol as it appears on the keypad
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division by a zero right operand fails with `DivisionByZero`; any
    /// non-finite result fails with `Overflow` so the display invariant
    /// (always a finite numeral) survives every arithmetic path.
    pub fn apply(&self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

// ============================================================================
// Buttons
// ============================================================================

/// One of the 20 fixed keypad buttons.
///
/// Compared by value equality, never by label string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "button", content = "value")]
pub enum Button {
    /// Digit key 0-9
    Digit(u8),
    /// Decimal point (.)
    Decimal,
    /// All clear (AC)
    Clear,
    /// Sign toggle (+/-)
    ToggleSign,
    /// Percent (%)
    Percent,
    /// Square root (√)
    SquareRoot,
    /// One of the four binary operators
    Op(BinaryOp),
    /// Equals (=)
    Equals,
}

/// Visual/behavioral classification of a button, as the keypad themes them:
/// the light top row, the accented right column, and the value keys between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonKind {
    /// Top-row state functions: AC, +/-, %
    Function,
    /// Right-column operators: ÷ × - + =
    Operator,
    /// Value entry: digits, decimal point, square root
    Entry,
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Button {
    /// The printable label as it appears on the keypad
    pub fn label(&self) -> &'static str {
        match self {
            Button::Digit(d) => DIGIT_LABELS.get(*d as usize).copied().unwrap_or("?"),
            Button::Decimal => ".",
            Button::Clear => "AC",
            Button::ToggleSign => "+/-",
            Button::Percent => "%",
            Button::SquareRoot => "√",
            Button::Op(op) => op.symbol(),
            Button::Equals => "=",
        }
    }

    /// Resolve a keypad label back to its button identifier.
    ///
    /// Returns `None` for anything outside the 20 fixed labels.
    pub fn from_label(label: &str) -> Option<Button> {
        LABEL_INDEX.get(label).copied()
    }

    /// The theming classification for this button
    pub fn kind(&self) -> ButtonKind {
        match self {
            Button::Clear | Button::ToggleSign | Button::Percent => ButtonKind::Function,
            Button::Op(_) | Button::Equals => ButtonKind::Operator,
            Button::Digit(_) | Button::Decimal | Button::SquareRoot => ButtonKind::Entry,
        }
    }
}

// ============================================================================
// Keypad Layout
// ============================================================================

/// Number of rows in the standard keypad grid
pub const LAYOUT_ROWS: usize = 5;

/// Number of columns in the standard keypad grid
pub const LAYOUT_COLS: usize = 4;

/// The standard 5x4 keypad, row by row:
///
/// ```text
/// [AC ] [+/-] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ √ ] [ = ]
/// ```
///
/// Hosts build their button grid from this table instead of hardcoding
/// positions, so the engine and every presentation agree on the vocabulary.
pub const STANDARD_LAYOUT: [[Button; LAYOUT_COLS]; LAYOUT_ROWS] = [
    [
        Button::Clear,
        Button::ToggleSign,
        Button::Percent,
        Button::Op(BinaryOp::Divide),
    ],
    [
        Button::Digit(7),
        Button::Digit(8),
        Button::Digit(9),
        Button::Op(BinaryOp::Multiply),
    ],
    [
        Button::Digit(4),
        Button::Digit(5),
        Button::Digit(6),
        Button::Op(BinaryOp::Subtract),
    ],
    [
        Button::Digit(1),
        Button::Digit(2),
        Button::Digit(3),
        Button::Op(BinaryOp::Add),
    ],
    [
        Button::Digit(0),
        Button::Decimal,
        Button::SquareRoot,
        Button::Equals,
    ],
];

/// Label -> button index, built once from the layout table
static LABEL_INDEX: Lazy<HashMap<&'static str, Button>> = Lazy::new(|| {
    STANDARD_LAYOUT
        .iter()
        .flatten()
        .map(|button| (button.label(), *button))
        .collect()
});
