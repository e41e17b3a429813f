//! Pocket calculator: an infix expression built token by token.
//!
//! Mirrors a phone calculator: digits extend the current entry,
//! operators commit it, `=` evaluates with the usual precedence
//! (multiplication and division before addition and subtraction).
//! After `=`, a digit starts a fresh expression while an operator
//! chains from the result.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Op {
    /// Addition.
    #[display("+")]
    Add,
    /// Subtraction.
    #[display("-")]
    Sub,
    /// Multiplication.
    #[display("×")]
    Mul,
    /// Division.
    #[display("÷")]
    Div,
}

impl Op {
    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Op::Add => Ok(lhs + rhs),
            Op::Sub => Ok(lhs - rhs),
            Op::Mul => Ok(lhs * rhs),
            Op::Div => {
                if rhs == 0.0 {
                    Err(CalcError::DivideByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }

    fn binds_tighter(self) -> bool {
        matches!(self, Op::Mul | Op::Div)
    }
}

/// Evaluation failure, shown as `Error` on the display.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CalcError {
    /// Division by zero.
    #[display("division by zero")]
    DivideByZero,
    /// Expression is empty or ends in an operator.
    #[display("incomplete expression")]
    Incomplete,
    /// The current entry is not a parseable number.
    #[display("malformed number")]
    BadNumber,
}

impl std::error::Error for CalcError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Token {
    Number(f64),
    Op(Op),
}

/// Calculator state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    // Committed tokens, strictly alternating Number / Op.
    tokens: Vec<Token>,
    // Digits being typed, not yet committed.
    entry: String,
    // Set after `=`; cleared by the next input.
    result: Option<f64>,
    error: bool,
}

impl Calculator {
    /// Creates a cleared calculator showing `0`.
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            entry: String::new(),
            result: None,
            error: false,
        }
    }

    /// Appends a digit to the current entry.
    pub fn input_digit(&mut self, digit: u8) {
        debug_assert!(digit < 10);
        if self.result.is_some() || self.error {
            // A digit after `=` (or an error) starts over.
            self.clear();
        }
        self.entry.push(char::from(b'0' + digit));
    }

    /// Appends a decimal point, once per entry.
    pub fn input_decimal(&mut self) {
        if self.result.is_some() || self.error {
            self.clear();
        }
        if self.entry.contains('.') {
            return;
        }
        if self.entry.is_empty() {
            self.entry.push('0');
        }
        self.entry.push('.');
    }

    /// Commits the entry (or chains from the previous result) and
    /// appends an operator. Ignored when there is nothing to operate on.
    pub fn input_op(&mut self, op: Op) {
        if self.error {
            self.clear();
            return;
        }
        if let Some(result) = self.result.take() {
            // Continue calculating from the result.
            self.tokens = vec![Token::Number(result)];
            self.tokens.push(Token::Op(op));
            return;
        }
        if !self.entry.is_empty() {
            if self.commit_entry().is_err() {
                return;
            }
            self.tokens.push(Token::Op(op));
        } else if matches!(self.tokens.last(), Some(Token::Number(_))) {
            self.tokens.push(Token::Op(op));
        }
        // Trailing operator already present: ignore, as phones do.
    }

    /// Toggles the sign of the current entry.
    pub fn toggle_sign(&mut self) {
        if self.entry.starts_with('-') {
            self.entry.remove(0);
        } else if !self.entry.is_empty() {
            self.entry.insert(0, '-');
        }
    }

    /// Divides the current entry by one hundred.
    pub fn percent(&mut self) {
        if let Ok(value) = self.entry.parse::<f64>() {
            self.entry = format_number(value / 100.0);
        }
    }

    /// Clears everything back to `0`.
    pub fn clear(&mut self) {
        *self = Calculator::new();
    }

    /// Evaluates the expression. A trailing operator or empty expression
    /// is a silent no-op; arithmetic failures latch the error display.
    pub fn equals(&mut self) {
        if self.error || self.result.is_some() {
            return;
        }
        if !self.entry.is_empty() && self.commit_entry().is_err() {
            self.error = true;
            return;
        }
        if !matches!(self.tokens.last(), Some(Token::Number(_))) {
            return;
        }
        match evaluate(&self.tokens) {
            Ok(value) => {
                debug!(value, "evaluated");
                self.result = Some(value);
            }
            Err(err) => {
                debug!(%err, "evaluation failed");
                self.error = true;
            }
        }
    }

    /// The big display line.
    pub fn display(&self) -> String {
        if self.error {
            return "Error".to_string();
        }
        if let Some(result) = self.result {
            return format_number(result);
        }
        if self.entry.is_empty() {
            "0".to_string()
        } else {
            self.entry.clone()
        }
    }

    /// The small expression line above the display.
    pub fn expression(&self) -> String {
        let mut parts: Vec<String> = self
            .tokens
            .iter()
            .map(|t| match t {
                Token::Number(n) => format_number(*n),
                Token::Op(op) => op.to_string(),
            })
            .collect();
        if !self.entry.is_empty() {
            parts.push(self.entry.clone());
        }
        if self.result.is_some() {
            parts.push("=".to_string());
        }
        parts.join(" ")
    }

    fn commit_entry(&mut self) -> Result<(), CalcError> {
        let value: f64 = self.entry.parse().map_err(|_| CalcError::BadNumber)?;
        self.entry.clear();
        self.tokens.push(Token::Number(value));
        Ok(())
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-pass evaluation: fold × and ÷ first, then + and -.
fn evaluate(tokens: &[Token]) -> Result<f64, CalcError> {
    let mut numbers: Vec<f64> = Vec::new();
    let mut ops: Vec<Op> = Vec::new();

    let mut expect_number = true;
    for token in tokens {
        match (token, expect_number) {
            (Token::Number(n), true) => {
                numbers.push(*n);
                expect_number = false;
            }
            (Token::Op(op), false) => {
                ops.push(*op);
                expect_number = true;
            }
            _ => return Err(CalcError::Incomplete),
        }
    }
    if expect_number || numbers.is_empty() {
        return Err(CalcError::Incomplete);
    }

    // Pass 1: contract multiplicative runs in place.
    let mut folded_numbers = vec![numbers[0]];
    let mut folded_ops = Vec::new();
    for (op, rhs) in ops.iter().zip(numbers[1..].iter()) {
        if op.binds_tighter() {
            let lhs = folded_numbers.pop().expect("non-empty by construction");
            folded_numbers.push(op.apply(lhs, *rhs)?);
        } else {
            folded_ops.push(*op);
            folded_numbers.push(*rhs);
        }
    }

    // Pass 2: left-to-right over what remains.
    let mut acc = folded_numbers[0];
    for (op, rhs) in folded_ops.iter().zip(folded_numbers[1..].iter()) {
        acc = op.apply(acc, *rhs)?;
    }
    Ok(acc)
}

/// Trims trailing zeros so `6` renders as `6`, not `6.000000`.
fn format_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
