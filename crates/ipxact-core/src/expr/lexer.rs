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

//! Tokenizer for SystemVerilog-style constant expressions.

use super::ExpressionError;

/// A lexical token of an expression.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// Unsized decimal integer, `_` separators removed.
    Decimal(String),
    /// Real literal with the number of fraction digits written.
    Real { value: f64, precision: usize },
    /// Based literal such as `8'sh1F`, already converted.
    Based { value: i64, base: u32 },
    /// String literal, including its quotes.
    Str(String),
    Ident(String),
    /// System function such as `$clog2`.
    System(String),
    Op(Op),
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Question,
    Colon,
}

/// Operators recognised by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Shl,
    Shr,
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    Not,
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Token {
    /// Numeric base of a literal token; strings report 0.
    pub(crate) fn base(&self) -> Option<u32> {
        match self {
            Token::Decimal(_) | Token::Real { .. } => Some(10),
            Token::Based { base, .. } => Some(*base),
            Token::Str(_) => Some(0),
            _ => None,
        }
    }
}

pub(crate) struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub(crate) fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.pos += 1;
        }
    }

    /// Tokenize the whole input.
    pub(crate) fn tokenize(mut self) -> Result<Vec<Token>, ExpressionError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let Some(ch) = self.peek() else {
                return Ok(tokens);
            };

            let token = match ch {
                '0'..='9' => self.lex_number()?,
                '\'' => self.lex_based()?,
                '"' => self.lex_string()?,
                '$' => {
                    self.advance();
                    let name = self.lex_word();
                    if name.is_empty() {
                        return Err(ExpressionError::UnexpectedCharacter('$'));
                    }
                    Token::System(name)
                }
                c if c.is_ascii_alphabetic() || c == '_' => Token::Ident(self.lex_word()),
                _ => self.lex_symbol(ch)?,
            };
            tokens.push(token);
        }
    }

    fn lex_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                word.push(ch);
                self.pos += 1;
            } else {
                break;
            }
        }
        word
    }

    fn lex_digits(&mut self) -> String {
        let mut digits = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
            } else if ch != '_' {
                break;
            }
            self.pos += 1;
        }
        digits
    }

    fn lex_number(&mut self) -> Result<Token, ExpressionError> {
        let integral = self.lex_digits();

        if self.peek() == Some('\'') {
            return self.lex_based();
        }

        let mut text = integral;
        let mut precision = None;
        if self.peek() == Some('.') && matches!(self.peek_at(1), Some(c) if c.is_ascii_digit()) {
            self.advance();
            let fraction = self.lex_digits();
            precision = Some(fraction.len());
            text.push('.');
            text.push_str(&fraction);
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let sign = matches!(self.peek_at(1), Some('+' | '-'));
            let digit_at = if sign { 2 } else { 1 };
            if matches!(self.peek_at(digit_at), Some(c) if c.is_ascii_digit()) {
                text.push('e');
                self.advance();
                if sign {
                    if let Some(s) = self.advance() {
                        text.push(s);
                    }
                }
                text.push_str(&self.lex_digits());
                precision.get_or_insert(0);
            }
        }

        match precision {
            Some(precision) => {
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ExpressionError::InvalidLiteral(text.clone()))?;
                Ok(Token::Real { value, precision })
            }
            None => Ok(Token::Decimal(text)),
        }
    }

    /// Based literal `[size]'[s][base]digits`; any size prefix is already consumed.
    fn lex_based(&mut self) -> Result<Token, ExpressionError> {
        self.advance();
        if matches!(self.peek(), Some('s' | 'S')) {
            self.advance();
        }

        let base = match self.peek() {
            Some('d' | 'D') => 10,
            Some('b' | 'B') => 2,
            Some('o' | 'O') => 8,
            Some('h' | 'H') => 16,
            Some(c) if c.is_ascii_digit() => 0,
            Some(c) => return Err(ExpressionError::UnexpectedCharacter(c)),
            None => return Err(ExpressionError::UnexpectedEnd),
        };
        let base = if base == 0 {
            10
        } else {
            self.advance();
            base
        };

        let mut digits = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() {
                digits.push(ch);
            } else if ch != '_' {
                break;
            }
            self.pos += 1;
        }

        let value = i64::from_str_radix(&digits, base)
            .map_err(|_| ExpressionError::InvalidLiteral(digits.clone()))?;
        Ok(Token::Based { value, base })
    }

    fn lex_string(&mut self) -> Result<Token, ExpressionError> {
        let mut text = String::new();
        if let Some(quote) = self.advance() {
            text.push(quote);
        }
        loop {
            match self.advance() {
                Some('"') => {
                    text.push('"');
                    return Ok(Token::Str(text));
                }
                Some(ch) => text.push(ch),
                None => return Err(ExpressionError::UnclosedString),
            }
        }
    }

    fn lex_symbol(&mut self, ch: char) -> Result<Token, ExpressionError> {
        let next = self.peek_at(1);
        let (token, width) = match (ch, next) {
            ('*', Some('*')) => (Token::Op(Op::Pow), 2),
            ('<', Some('<')) => (Token::Op(Op::Shl), 2),
            ('>', Some('>')) => (Token::Op(Op::Shr), 2),
            ('<', Some('=')) => (Token::Op(Op::Le), 2),
            ('>', Some('=')) => (Token::Op(Op::Ge), 2),
            ('=', Some('=')) => (Token::Op(Op::Eq), 2),
            ('!', Some('=')) => (Token::Op(Op::Ne), 2),
            ('&', Some('&')) => (Token::Op(Op::And), 2),
            ('|', Some('|')) => (Token::Op(Op::Or), 2),
            ('+', _) => (Token::Op(Op::Add), 1),
            ('-', _) => (Token::Op(Op::Sub), 1),
            ('*', _) => (Token::Op(Op::Mul), 1),
            ('/', _) => (Token::Op(Op::Div), 1),
            ('%', _) => (Token::Op(Op::Mod), 1),
            ('<', _) => (Token::Op(Op::Lt), 1),
            ('>', _) => (Token::Op(Op::Gt), 1),
            ('&', _) => (Token::Op(Op::BitAnd), 1),
            ('|', _) => (Token::Op(Op::BitOr), 1),
            ('^', _) => (Token::Op(Op::BitXor), 1),
            ('~', _) => (Token::Op(Op::BitNot), 1),
            ('!', _) => (Token::Op(Op::Not), 1),
            ('(', _) => (Token::LParen, 1),
            (')', _) => (Token::RParen, 1),
            ('{', _) => (Token::LBrace, 1),
            ('}', _) => (Token::RBrace, 1),
            (',', _) => (Token::Comma, 1),
            ('?', _) => (Token::Question, 1),
            (':', _) => (Token::Colon, 1),
            (other, _) => return Err(ExpressionError::UnexpectedCharacter(other)),
        };
        self.pos += width;
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(s: &str) -> Vec<Token> {
        Lexer::new(s).tokenize().unwrap()
    }

    #[test]
    fn test_decimal_with_separators() {
        assert_eq!(lex("10_000"), vec![Token::Decimal("10000".to_string())]);
    }

    #[test]
    fn test_based_literals() {
        assert_eq!(lex("'hA"), vec![Token::Based { value: 10, base: 16 }]);
        assert_eq!(lex("8'sh1F"), vec![Token::Based { value: 31, base: 16 }]);
        assert_eq!(lex("3'o011"), vec![Token::Based { value: 9, base: 8 }]);
        assert_eq!(lex("'b1_001"), vec![Token::Based { value: 9, base: 2 }]);
        assert_eq!(lex("'2"), vec![Token::Based { value: 2, base: 10 }]);
    }

    #[test]
    fn test_real_precision() {
        assert_eq!(
            lex("0.250"),
            vec![Token::Real {
                value: 0.25,
                precision: 3
            }]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            lex("2**3<<1"),
            vec![
                Token::Decimal("2".to_string()),
                Token::Op(Op::Pow),
                Token::Decimal("3".to_string()),
                Token::Op(Op::Shl),
                Token::Decimal("1".to_string()),
            ]
        );
    }

    #[test]
    fn test_errors() {
        assert!(Lexer::new("\"text").tokenize().is_err());
        assert!(Lexer::new("1 # 2").tokenize().is_err());
        assert!(Lexer::new("'hZZ").tokenize().is_err());
    }
}
