//! Arithmetic evaluation for the calculator display.
//!
//! Supports non-negative decimal literals, `+ - * /` with the usual precedence
//! (left-associative), and leading unary signs. Nothing in the input is ever
//! executed; anything outside this grammar is rejected with an [`EvalError`].

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("unexpected '{0}'")]
    UnexpectedToken(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    NotFinite,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' | '.' => tokens.push(Token::Number(read_number(input, &mut chars)?)),
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            _ => return Err(EvalError::UnexpectedChar { ch, pos }),
        }
    }

    Ok(tokens)
}

fn read_number(input: &str, chars: &mut Peekable<CharIndices<'_>>) -> Result<f64, EvalError> {
    let Some(&(start, _)) = chars.peek() else {
        return Err(EvalError::UnexpectedEnd);
    };
    let mut end = start;
    while let Some(&(pos, ch)) = chars.peek() {
        if !(ch.is_ascii_digit() || ch == '.') {
            break;
        }
        end = pos + ch.len_utf8();
        chars.next();
    }

    let literal = &input[start..end];
    // Only digits and dots get here; "1.2.3" and "." still fail to parse.
    literal
        .parse::<f64>()
        .map_err(|_| EvalError::InvalidNumber(literal.to_string()))
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.advance();
            let rhs = self.term()?;
            value = if op == Token::Plus {
                value + rhs
            } else {
                value - rhs
            };
        }
        Ok(value)
    }

    /// term := unary (('*' | '/') unary)*
    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.advance();
            let rhs = self.unary()?;
            value = if op == Token::Star {
                value * rhs
            } else {
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                value / rhs
            };
        }
        Ok(value)
    }

    /// unary := ('+' | '-')* number
    fn unary(&mut self) -> Result<f64, EvalError> {
        let mut negative = false;
        loop {
            match self.advance() {
                Some(Token::Plus) => {}
                Some(Token::Minus) => negative = !negative,
                Some(Token::Number(n)) => return Ok(if negative { -n } else { n }),
                Some(token) => return Err(EvalError::UnexpectedToken(token.to_string())),
                None => return Err(EvalError::UnexpectedEnd),
            }
        }
    }
}

/// Evaluate an arithmetic expression such as `2+3*4`.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;

    if let Some(token) = parser.peek() {
        return Err(EvalError::UnexpectedToken(token.to_string()));
    }
    if !value.is_finite() {
        return Err(EvalError::NotFinite);
    }
    Ok(value)
}

/// Render a result for the display. Whole numbers have no fractional part.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // Also folds -0 into 0
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("2*3+4"), Ok(10.0));
        assert_eq!(evaluate("10-4/2"), Ok(8.0));
    }

    #[test]
    fn test_left_to_right_grouping() {
        assert_eq!(evaluate("10-4-3"), Ok(3.0));
        assert_eq!(evaluate("8/4/2"), Ok(1.0));
        assert_eq!(evaluate("2*6/3"), Ok(4.0));
    }

    #[test]
    fn test_multi_digit_and_decimal_literals() {
        assert_eq!(evaluate("12+30"), Ok(42.0));
        assert_eq!(evaluate("2.5*2"), Ok(5.0));
        assert_eq!(evaluate("007"), Ok(7.0));
    }

    #[test]
    fn test_unary_signs() {
        assert_eq!(evaluate("-3+5"), Ok(2.0));
        assert_eq!(evaluate("4*-2"), Ok(-8.0));
        assert_eq!(evaluate("--2"), Ok(2.0));
        assert_eq!(evaluate("+7"), Ok(7.0));
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(evaluate(" 1 + 2 "), Ok(3.0));
    }

    #[test]
    fn test_trailing_operator_is_error() {
        assert_eq!(evaluate("2+"), Err(EvalError::UnexpectedEnd));
        assert_eq!(evaluate("2*"), Err(EvalError::UnexpectedEnd));
    }

    #[test]
    fn test_empty_is_error() {
        assert_eq!(evaluate(""), Err(EvalError::UnexpectedEnd));
    }

    #[test]
    fn test_leading_binary_operator_is_error() {
        assert_eq!(evaluate("*2"), Err(EvalError::UnexpectedToken("*".to_string())));
        assert_eq!(evaluate("2+/3"), Err(EvalError::UnexpectedToken("/".to_string())));
    }

    #[test]
    fn test_division_by_zero_is_error() {
        assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1+8/0*2"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_rejects_anything_that_is_not_arithmetic() {
        assert_eq!(
            evaluate("Error5"),
            Err(EvalError::UnexpectedChar { ch: 'E', pos: 0 })
        );
        assert!(matches!(
            evaluate("alert(1)"),
            Err(EvalError::UnexpectedChar { .. })
        ));
        assert!(matches!(evaluate("2=3"), Err(EvalError::UnexpectedChar { ch: '=', pos: 1 })));
    }

    #[test]
    fn test_malformed_numbers() {
        assert_eq!(
            evaluate("1.2.3"),
            Err(EvalError::InvalidNumber("1.2.3".to_string()))
        );
        assert_eq!(evaluate("."), Err(EvalError::InvalidNumber(".".to_string())));
    }

    #[test]
    fn test_overflow_is_not_finite() {
        let huge = "9".repeat(200);
        let input = format!("{huge}*{huge}*{huge}");
        assert_eq!(evaluate(&input), Err(EvalError::NotFinite));
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(14.0), "14");
        assert_eq!(format_result(-3.0), "-3");
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(-0.0), "0");
    }
}
