//! # Calculator Engine
//!
//! The pure state machine behind the keypad: a four-field state plus one
//! transition function, decoupled from any rendering technology. The host
//! owns a single `CalculatorState`, feeds it one button per press, and
//! repaints its display from `display()` after every call.
//!
//! ## State Machine
//!
//! - A digit or decimal press edits `display_text` in place.
//! - The first operator press captures `display_text` as the left operand
//!   and starts right-operand entry; a later operator press only swaps the
//!   pending operator.
//! - Equals evaluates `left op display`, leaves the result on the display,
//!   and clears the pending operation.
//! - Any fault (divide by zero, negative square root, defensive parse
//!   failure) locks the engine behind the `"Error"` indicator until `AC`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::engine::CalculatorState;
//!
//! let mut state = CalculatorState::new();
//! for label in ["7", "+", "8", "="] {
//!     state.apply_label(label).unwrap();
//! }
//! assert_eq!(state.display(), "15");
//! ```

use serde::{Deserialize, Serialize};

use crate::buttons::{BinaryOp, Button};
use crate::errors::{CalcError, CalcResult};
use crate::format::{format_number, parse_numeral};

/// What the display shows while the engine is locked by an error
pub const ERROR_INDICATOR: &str = "Error";

/// The complete calculator state.
///
/// Created once at startup, mutated in place by each button press, never
/// persisted. Serializes to JSON so hosts can snapshot or inspect it.
///
/// ## JSON Example
///
/// ```json
/// {
///   "left_operand": "7",
///   "pending_op": "Add",
///   "right_operand": "0",
///   "display_text": "8",
///   "error": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// First operand or accumulated result; `"0"` when none entered
    left_operand: String,

    /// The selected binary operator, `None` when no operation is pending
    pending_op: Option<BinaryOp>,

    /// Second operand; set together with `pending_op`, absent otherwise
    right_operand: Option<String>,

    /// The numeral currently shown, doubling as the next action's argument
    display_text: String,

    /// Recorded fault; while `Some`, only `AC` is accepted
    error: Option<CalcError>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Create the all-clear state: display `"0"`, no pending operation
    pub fn new() -> Self {
        CalculatorState {
            left_operand: "0".to_string(),
            pending_op: None,
            right_operand: None,
            display_text: "0".to_string(),
            error: None,
        }
    }

    /// The text to render: the current numeral, or the error indicator
    /// while the engine is locked
    pub fn display(&self) -> &str {
        if self.error.is_some() {
            ERROR_INDICATOR
        } else {
            &self.display_text
        }
    }

    /// The recorded fault, if the engine is locked
    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// True while a fault is recorded and only `AC` is accepted
    pub fn is_locked(&self) -> bool {
        self.error.is_some()
    }

    /// The pending binary operator, for hosts that highlight the active key
    pub fn pending_op(&self) -> Option<BinaryOp> {
        self.pending_op
    }

    /// Apply one button press and return the transition outcome.
    ///
    /// On error the engine records the fault and locks itself; the same
    /// error is returned so hosts can report it. While locked, every button
    /// except `AC` is accepted but ignored.
    pub fn apply(&mut self, button: Button) -> CalcResult<()> {
        if self.error.is_some() && button != Button::Clear {
            return Ok(());
        }

        let outcome = match button {
            Button::Digit(digit) => {
                self.press_digit(digit);
                Ok(())
            }
            Button::Decimal => {
                self.press_decimal();
                Ok(())
            }
            Button::Clear => {
                *self = CalculatorState::new();
                Ok(())
            }
            Button::ToggleSign => self.press_toggle_sign(),
            Button::Percent => self.press_percent(),
            Button::SquareRoot => self.press_square_root(),
            Button::Op(op) => {
                self.press_operator(op);
                Ok(())
            }
            Button::Equals => self.press_equals(),
        };

        if let Err(error) = &outcome {
            if error.locks_engine() {
                self.lock(error.clone());
            }
        }
        outcome
    }

    /// Resolve a keypad label and apply it.
    ///
    /// Fails with `UnknownButton` for labels outside the fixed vocabulary;
    /// that failure happens before any transition, so it never locks the
    /// engine.
    pub fn apply_label(&mut self, label: &str) -> CalcResult<()> {
        let button =
            Button::from_label(label).ok_or_else(|| CalcError::unknown_button(label))?;
        self.apply(button)
    }

    fn press_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            // out-of-range digit can only arrive via deserialized input
            return;
        };
        if self.display_text == "0" {
            self.display_text = ch.to_string();
        } else {
            self.display_text.push(ch);
        }
    }

    fn press_decimal(&mut self) {
        if !self.display_text.contains('.') {
            self.display_text.push('.');
        }
    }

    fn press_toggle_sign(&mut self) -> CalcResult<()> {
        let value = parse_numeral(&self.display_text)?;
        self.display_text = format_number(-value);
        Ok(())
    }

    fn press_percent(&mut self) -> CalcResult<()> {
        let value = parse_numeral(&self.display_text)?;
        self.display_text = format_number(value / 100.0);
        Ok(())
    }

    fn press_square_root(&mut self) -> CalcResult<()> {
        let value = parse_numeral(&self.display_text)?;
        if value < 0.0 {
            return Err(CalcError::domain_error(value));
        }
        self.display_text = format_number(value.sqrt());
        Ok(())
    }

    fn press_operator(&mut self, op: BinaryOp) {
        if self.pending_op.is_none() {
            self.left_operand = std::mem::replace(&mut self.display_text, "0".to_string());
            self.right_operand = Some("0".to_string());
        }
        // with an operation already pending, only the operator is swapped;
        // right-operand entry continues and nothing evaluates until =
        self.pending_op = Some(op);
    }

    fn press_equals(&mut self) -> CalcResult<()> {
        let Some(op) = self.pending_op else {
            // equals with no operator chosen is a no-op
            return Ok(());
        };

        let right = self.display_text.clone();
        let a = parse_numeral(&self.left_operand)?;
        let b = parse_numeral(&right)?;
        self.right_operand = Some(right);

        let result = op.apply(a, b)?;

        self.display_text = format_number(result);
        self.left_operand = "0".to_string();
        self.pending_op = None;
        self.right_operand = None;
        Ok(())
    }

    /// Record a fault and reset the numeric fields, so clearing the error
    /// never exposes stale operands
    fn lock(&mut self, error: CalcError) {
        *self = CalculatorState::new();
        self.error = Some(error);
    }
}
