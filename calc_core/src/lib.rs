//! # calc_core - Calculator Engine
//!
//! `calc_core` is the logic core of Tally, a single-window desktop
//! calculator: a numeric display plus a fixed 5x4 grid of buttons. The crate
//! holds the pure state-and-transition logic behind that grid, decoupled
//! from any rendering technology; a host owns one `CalculatorState`, feeds
//! it button-press events, and repaints its display after each one.
//!
//! ## Design Philosophy
//!
//! - **Explicit state**: one value passed through the event loop, no globals
//! - **Typed buttons**: an enumerated identifier per key, never label strings
//! - **JSON-First**: all public types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings; every fault
//!   is recoverable with `AC`
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::CalculatorState;
//!
//! let mut state = CalculatorState::new();
//! for label in ["7", "+", "8", "="] {
//!     state.apply_label(label).unwrap();
//! }
//! assert_eq!(state.display(), "15");
//!
//! // Serialize the state for inspection or transport
//! let json = serde_json::to_string_pretty(&state).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - `CalculatorState` and the button-press transition function
//! - [`buttons`] - Button identifiers, operators, and the keypad layout
//! - [`format`] - Numeral formatting and defensive parsing
//! - [`errors`] - Structured error types

pub mod buttons;
pub mod engine;
pub mod errors;
pub mod format;

// Re-export commonly used types at crate root for convenience
pub use buttons::{BinaryOp, Button, ButtonKind, STANDARD_LAYOUT};
pub use engine::{CalculatorState, ERROR_INDICATOR};
pub use errors::{CalcError, CalcResult};
