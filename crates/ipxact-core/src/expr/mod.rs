// Dweve IPXACT - IEEE 1685 Document Model
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Constant expression evaluation.
//!
//! Numeric fields of IP-XACT documents (bit offsets, ranges, presence flags,
//! enumeration values) hold SystemVerilog constant expressions such as
//! `"4-3"`, `"'h1F"` or `"$clog2(WIDTH)"`. [`SystemVerilogParser`] evaluates
//! them to a printable value plus a validity flag.
//!
//! # Examples
//!
//! ```rust
//! use ipxact_core::expr::{ExpressionParser, SystemVerilogParser};
//!
//! let parser = SystemVerilogParser::new();
//! assert_eq!(parser.parse_expression("1+1.12").value, "2.12");
//! assert!(!parser.parse_expression("ff").valid);
//! ```

mod eval;
pub(crate) mod lexer;
mod parser;
mod value;

pub use eval::{SystemVerilogParser, MAX_SYMBOL_DEPTH};
pub use parser::MAX_NESTING_DEPTH;
pub use value::Value;

use lexer::Lexer;
use thiserror::Error;

/// Reasons an expression fails to evaluate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
    #[error("expression is empty")]
    Empty,
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("unexpected token {0}")]
    UnexpectedToken(String),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("unterminated string literal")]
    UnclosedString,
    #[error("invalid literal '{0}'")]
    InvalidLiteral(String),
    #[error("unknown identifier '{0}'")]
    UnknownSymbol(String),
    #[error("unknown function '${0}'")]
    UnknownFunction(String),
    #[error("function '${function}' expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
    },
    #[error("invalid argument to '${0}'")]
    InvalidArgument(String),
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {0}")]
    Overflow(String),
    #[error("reference depth exceeded while resolving '{0}'")]
    RecursionLimit(String),
    #[error("expression nesting exceeds {0} levels")]
    NestingLimit(usize),
}

/// Printable result of evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub value: String,
    pub valid: bool,
}

impl Evaluation {
    /// Value printed for expressions that cannot be evaluated.
    pub const UNKNOWN: &'static str = "x";

    pub fn valid(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            valid: true,
        }
    }

    pub fn invalid() -> Self {
        Self {
            value: Self::UNKNOWN.to_string(),
            valid: false,
        }
    }

    /// Numeric value truncated to an integer, for valid numeric results.
    pub fn as_i64(&self) -> Option<i64> {
        if !self.valid {
            return None;
        }
        self.value
            .parse::<i64>()
            .ok()
            .or_else(|| self.value.parse::<f64>().ok().map(|v| v as i64))
    }

    pub fn as_f64(&self) -> Option<f64> {
        if !self.valid {
            return None;
        }
        self.value.parse::<f64>().ok()
    }
}

impl From<Result<Value, ExpressionError>> for Evaluation {
    fn from(result: Result<Value, ExpressionError>) -> Self {
        match result {
            Ok(value) => Evaluation::valid(value.to_string()),
            Err(_) => Evaluation::invalid(),
        }
    }
}

/// Evaluates expression text. Injected into validators.
pub trait ExpressionParser: Send + Sync {
    /// Evaluate `expression`; the result is invalid with value `x` on failure.
    fn parse_expression(&self, expression: &str) -> Evaluation;

    /// True when `expression` is a single literal without operators.
    fn is_plain_value(&self, expression: &str) -> bool {
        is_plain_value(expression)
    }

    /// Largest numeric base of the literals in `expression`; 0 for strings.
    fn base_for_expression(&self, expression: &str) -> u32 {
        base_for_expression(expression)
    }

    /// True when `expression` is a valid integer of any sign.
    fn is_valid_integer(&self, expression: &str) -> bool {
        self.evaluate_i64(expression).is_some()
    }

    /// Evaluated value if it is an integer.
    fn evaluate_i64(&self, expression: &str) -> Option<i64> {
        let evaluation = self.parse_expression(expression);
        if evaluation.valid {
            evaluation.value.parse::<i64>().ok()
        } else {
            None
        }
    }

    /// Evaluated value if it is a non-negative integer.
    fn evaluate_u64(&self, expression: &str) -> Option<u64> {
        self.evaluate_i64(expression)
            .and_then(|v| u64::try_from(v).ok())
    }

    /// Evaluated value if it is exactly 0 or 1.
    fn evaluate_bool_flag(&self, expression: &str) -> Option<bool> {
        match self.evaluate_i64(expression) {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        }
    }
}

fn is_plain_value(expression: &str) -> bool {
    let Ok(tokens) = Lexer::new(expression).tokenize() else {
        return false;
    };
    match tokens.as_slice() {
        [] => true,
        [literal] | [lexer::Token::Op(lexer::Op::Sub), literal] => literal.base().is_some(),
        _ => false,
    }
}

fn base_for_expression(expression: &str) -> u32 {
    let Ok(tokens) = Lexer::new(expression).tokenize() else {
        return 0;
    };
    tokens
        .iter()
        .filter_map(lexer::Token::base)
        .max()
        .unwrap_or(10)
}
