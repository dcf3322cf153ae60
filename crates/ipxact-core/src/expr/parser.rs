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

//! Recursive-descent parser producing an expression tree.
//!
//! ```text
//! ternary = binary ("?" ternary ":" ternary)?
//! binary  = unary (op unary)*          -- precedence climbing, left associative
//! unary   = ("-" | "+" | "~" | "!") unary | primary
//! primary = literal | identifier | system "(" args ")" | "(" ternary ")" | "{" args "}"
//! ```

use super::lexer::{Op, Token};
use super::value::Value;
use super::ExpressionError;

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Literal(Value),
    Symbol(String),
    Unary {
        op: Op,
        operand: Box<Expr>,
    },
    Binary {
        op: Op,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Ternary {
        condition: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    Call {
        function: String,
        args: Vec<Expr>,
    },
    Array(Vec<Expr>),
}

/// Binding strength of an infix operator, higher binds tighter.
fn precedence(op: Op) -> Option<u8> {
    let level = match op {
        Op::Or => 1,
        Op::And => 2,
        Op::BitOr => 3,
        Op::BitXor => 4,
        Op::BitAnd => 5,
        Op::Eq | Op::Ne => 6,
        Op::Lt | Op::Le | Op::Gt | Op::Ge => 7,
        Op::Shl | Op::Shr => 8,
        Op::Add | Op::Sub => 9,
        Op::Mul | Op::Div | Op::Mod => 10,
        Op::Pow => 11,
        Op::BitNot | Op::Not => return None,
    };
    Some(level)
}

/// Maximum depth of the expression tree. Parentheses, unary operators,
/// ternaries and each infix operator of a chain count one level.
pub const MAX_NESTING_DEPTH: usize = 128;

pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parse the full token stream as one expression.
    pub(crate) fn parse(mut self) -> Result<Expr, ExpressionError> {
        if self.tokens.is_empty() {
            return Err(ExpressionError::Empty);
        }
        let expr = self.parse_ternary()?;
        match self.peek() {
            None => Ok(expr),
            Some(Token::RParen) => Err(ExpressionError::UnbalancedParentheses),
            Some(token) => Err(ExpressionError::UnexpectedToken(format!("{:?}", token))),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    fn expect(&mut self, expected: Token) -> Result<(), ExpressionError> {
        match self.advance() {
            Some(token) if token == expected => Ok(()),
            Some(token) => Err(ExpressionError::UnexpectedToken(format!("{:?}", token))),
            None if expected == Token::RParen => Err(ExpressionError::UnbalancedParentheses),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }

    /// Takes one nesting level, failing past [`MAX_NESTING_DEPTH`].
    fn descend(&mut self) -> Result<(), ExpressionError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ExpressionError::NestingLimit(MAX_NESTING_DEPTH));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_ternary(&mut self) -> Result<Expr, ExpressionError> {
        self.descend()?;
        let result = self.ternary();
        self.depth -= 1;
        result
    }

    fn ternary(&mut self) -> Result<Expr, ExpressionError> {
        let condition = self.parse_binary(0)?;
        if self.peek() != Some(&Token::Question) {
            return Ok(condition);
        }
        self.advance();
        let then = self.parse_ternary()?;
        self.expect(Token::Colon)?;
        let otherwise = self.parse_ternary()?;
        Ok(Expr::Ternary {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        })
    }

    fn parse_binary(&mut self, min_level: u8) -> Result<Expr, ExpressionError> {
        let entry_depth = self.depth;
        let result = self.binary(min_level);
        self.depth = entry_depth;
        result
    }

    /// Every operator applied deepens the left-leaning tree by one level.
    fn binary(&mut self, min_level: u8) -> Result<Expr, ExpressionError> {
        let mut lhs = self.parse_unary()?;

        while let Some(Token::Op(op)) = self.peek() {
            let op = *op;
            let Some(level) = precedence(op) else {
                break;
            };
            if level <= min_level {
                break;
            }
            self.advance();
            self.descend()?;
            let rhs = self.parse_binary(level)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, ExpressionError> {
        self.descend()?;
        let result = self.unary();
        self.depth -= 1;
        result
    }

    fn unary(&mut self) -> Result<Expr, ExpressionError> {
        match self.peek() {
            Some(Token::Op(op @ (Op::Sub | Op::Add | Op::BitNot | Op::Not))) => {
                let op = *op;
                self.advance();
                let operand = self.parse_unary()?;
                Ok(Expr::Unary {
                    op,
                    operand: Box::new(operand),
                })
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ExpressionError> {
        let token = self.advance().ok_or(ExpressionError::UnexpectedEnd)?;
        match token {
            Token::Decimal(digits) => Ok(Expr::Literal(
                digits
                    .parse::<i64>()
                    .map(Value::Int)
                    .or_else(|_| digits.parse::<f64>().map(|v| Value::real(v, 0)))
                    .map_err(|_| ExpressionError::InvalidLiteral(digits.clone()))?,
            )),
            Token::Real { value, precision } => Ok(Expr::Literal(Value::real(value, precision))),
            Token::Based { value, .. } => Ok(Expr::Literal(Value::Int(value))),
            Token::Str(text) => Ok(Expr::Literal(Value::Str(text))),
            Token::Ident(name) => {
                if name.eq_ignore_ascii_case("true") {
                    Ok(Expr::Literal(Value::Int(1)))
                } else if name.eq_ignore_ascii_case("false") {
                    Ok(Expr::Literal(Value::Int(0)))
                } else {
                    Ok(Expr::Symbol(name))
                }
            }
            Token::System(function) => {
                self.expect(Token::LParen)?;
                let args = self.parse_list(Token::RParen)?;
                Ok(Expr::Call { function, args })
            }
            Token::LParen => {
                let inner = self.parse_ternary()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            Token::LBrace => Ok(Expr::Array(self.parse_list(Token::RBrace)?)),
            Token::RParen => Err(ExpressionError::UnbalancedParentheses),
            other => Err(ExpressionError::UnexpectedToken(format!("{:?}", other))),
        }
    }

    /// Comma separated expressions up to `close`, which is consumed.
    fn parse_list(&mut self, close: Token) -> Result<Vec<Expr>, ExpressionError> {
        let mut items = Vec::new();
        if self.peek() == Some(&close) {
            self.advance();
            return Ok(items);
        }
        loop {
            items.push(self.parse_ternary()?);
            match self.advance() {
                Some(Token::Comma) => continue,
                Some(token) if token == close => return Ok(items),
                Some(token) => {
                    return Err(ExpressionError::UnexpectedToken(format!("{:?}", token)))
                }
                None => return Err(ExpressionError::UnexpectedEnd),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::lexer::Lexer;

    fn parse(s: &str) -> Result<Expr, ExpressionError> {
        Parser::new(Lexer::new(s).tokenize()?).parse()
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let expr = parse("1 + 2 * 3").unwrap();
        match expr {
            Expr::Binary { op: Op::Add, rhs, .. } => {
                assert!(matches!(*rhs, Expr::Binary { op: Op::Mul, .. }));
            }
            other => panic!("unexpected tree {:?}", other),
        }
    }

    #[test]
    fn test_unary_applies_to_primary() {
        let expr = parse("-2**2").unwrap();
        assert!(matches!(expr, Expr::Binary { op: Op::Pow, .. }));
    }

    #[test]
    fn test_ternary_nests_right() {
        let expr = parse("1?11:2?12:0").unwrap();
        match expr {
            Expr::Ternary { otherwise, .. } => {
                assert!(matches!(*otherwise, Expr::Ternary { .. }));
            }
            other => panic!("unexpected tree {:?}", other),
        }
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(parse(""), Err(ExpressionError::Empty));
        assert_eq!(parse("((1)"), Err(ExpressionError::UnbalancedParentheses));
        assert_eq!(parse("(1))"), Err(ExpressionError::UnbalancedParentheses));
        assert_eq!(parse("1+"), Err(ExpressionError::UnexpectedEnd));
        assert!(parse("(3+2)?(4+6)").is_err());
        assert!(parse(",1}").is_err());
    }

    #[test]
    fn test_nesting_limit() {
        let limit = Err(ExpressionError::NestingLimit(MAX_NESTING_DEPTH));

        let deep = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert_eq!(parse(&deep), limit);
        assert_eq!(parse(&"-".repeat(100_000)), limit);
        assert_eq!(parse(&format!("{}1", "1?1:".repeat(100_000))), limit);
        assert_eq!(parse(&format!("1{}", "+1".repeat(100_000))), limit);

        let shallow = format!("{}1{}", "(".repeat(16), ")".repeat(16));
        assert_eq!(parse(&shallow), Ok(Expr::Literal(Value::Int(1))));
        assert!(parse(&format!("1{}", "+1".repeat(40))).is_ok());
    }
}
