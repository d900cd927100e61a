//! Expression accumulator driven by clicks on placed tiles.
//!
//! Digits and operators are appended to the expression, `C` clears it and `=`
//! replaces it with the evaluated result. A failed evaluation leaves the
//! expression in place and shows [`ERROR_DISPLAY`] until the next input.

mod eval;

pub use eval::{EvalError, evaluate, format_result};

use bevy::log::debug;

/// Sentinel shown on the display after a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

/// What a tile value does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorInput<'a> {
    Clear,
    Evaluate,
    Append(&'a str),
}

impl<'a> CalculatorInput<'a> {
    pub fn from_value(value: &'a str) -> Self {
        match value {
            "C" => CalculatorInput::Clear,
            "=" => CalculatorInput::Evaluate,
            other => CalculatorInput::Append(other),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    expression: String,
    last_error: Option<EvalError>,
}

impl Calculator {
    /// Apply a tile value: `C`, `=`, or any digit/operator.
    pub fn press(&mut self, value: &str) {
        match CalculatorInput::from_value(value) {
            CalculatorInput::Clear => {
                self.expression.clear();
                self.last_error = None;
            }
            CalculatorInput::Evaluate => match evaluate(&self.expression) {
                Ok(result) => {
                    debug!("Evaluated '{}' = {}", self.expression, result);
                    self.expression = format_result(result);
                    self.last_error = None;
                }
                Err(e) => {
                    debug!("Failed to evaluate '{}': {}", self.expression, e);
                    self.last_error = Some(e);
                }
            },
            CalculatorInput::Append(token) => {
                self.last_error = None;
                self.expression.push_str(token);
            }
        }
    }

    /// The accumulated expression string.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Text for the main display line.
    pub fn display(&self) -> &str {
        if self.last_error.is_some() {
            ERROR_DISPLAY
        } else if self.expression.is_empty() {
            "0"
        } else {
            &self.expression
        }
    }

    pub fn last_error(&self) -> Option<&EvalError> {
        self.last_error.as_ref()
    }
}
