//! Keypad state machine.
//!
//! A calculator is a `CalculatorState` plus the pure transition
//! `CalculatorState::press`. Rendering is left to the caller; the only
//! observable output is `CalculatorState::display`.
//!
//! ```
//! use calculator_sdk::keypad::{press_all, Key};
//!
//! let keys = ["7", "+", "5", "="].map(|k| k.parse::<Key>().unwrap());
//! assert_eq!(press_all(keys).display(), "12");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::errors::{ArithmeticError, ParseKeyError};
use crate::models::Operation;

/// Display value used for unrepresentable results.
pub const ERROR_DISPLAY: &str = "Error";

const INITIAL_DISPLAY: &str = "0";

/// A single button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Point,
    Operator(Operation),
    Equals,
    Clear,
}

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "." => Self::Point,
            "=" => Self::Equals,
            "C" | "c" => Self::Clear,
            _ => {
                if let Some(op) = Operation::from_symbol(s) {
                    Self::Operator(op)
                } else {
                    match s.as_bytes() {
                        [d @ b'0'..=b'9'] => Self::Digit(d - b'0'),
                        _ => {
                            return Err(ParseKeyError {
                                label: s.to_owned(),
                            });
                        }
                    }
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Point => f.write_str("."),
            Self::Operator(op) => f.write_str(op.symbol()),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
        }
    }
}

/// Left operand and operator captured by an operator press.
///
/// Keeping both in one `Option` makes "operator set iff accumulator set"
/// hold by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    accumulator: f64,
    operator: Operation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    display: String,
    pending: Option<Pending>,
    awaiting_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_owned(),
            pending: None,
            awaiting_operand: false,
        }
    }
}

impl CalculatorState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub fn accumulator(&self) -> Option<f64> {
        self.pending.map(|p| p.accumulator)
    }

    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.pending.map(|p| p.operator)
    }

    #[must_use]
    pub const fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// True while the display shows the error sentinel.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Apply one key press and return the next state.
    #[must_use]
    pub fn press(mut self, key: Key) -> Self {
        if key == Key::Clear {
            return Self::default();
        }
        if self.is_error() {
            return self;
        }

        match key {
            Key::Digit(d) => self.enter_digit(d),
            Key::Point => self.enter_point(),
            Key::Operator(op) => self.choose_operator(op),
            Key::Equals => self.evaluate(),
            Key::Clear => {}
        }
        self
    }

    fn enter_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.display == INITIAL_DISPLAY {
            if ch != '0' {
                self.display = ch.to_string();
            }
        } else {
            self.display.push(ch);
        }
        self.awaiting_operand = false;
    }

    fn enter_point(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
        }
        self.awaiting_operand = false;
    }

    fn choose_operator(&mut self, operator: Operation) {
        self.pending = Some(Pending {
            accumulator: self.display_value(),
            operator,
        });
        self.display = INITIAL_DISPLAY.to_owned();
        self.awaiting_operand = true;
    }

    fn evaluate(&mut self) {
        let Some(Pending {
            accumulator,
            operator,
        }) = self.pending.take()
        else {
            return;
        };

        self.display = match operator.apply(accumulator, self.display_value()) {
            Ok(result) => format_number(result),
            Err(ArithmeticError::DivisionByZero | ArithmeticError::NonFinite) => {
                ERROR_DISPLAY.to_owned()
            }
        };
        self.awaiting_operand = false;
    }

    fn display_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }
}

/// Fold a key sequence over a fresh calculator.
#[must_use]
pub fn press_all<I>(keys: I) -> CalculatorState
where
    I: IntoIterator<Item = Key>,
{
    keys.into_iter()
        .fold(CalculatorState::default(), CalculatorState::press)
}

/// Shortest decimal form that round-trips; negative zero prints as `0`.
fn format_number(value: f64) -> String {
    if value == 0.0 {
        return INITIAL_DISPLAY.to_owned();
    }
    value.to_string()
}
