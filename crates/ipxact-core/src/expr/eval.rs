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

//! Tree-walking evaluator with optional symbol resolution.

use super::lexer::Lexer;
use super::parser::{Expr, Parser};
use super::value::Value;
use super::{Evaluation, ExpressionError, ExpressionParser};
use std::collections::HashMap;

/// Maximum nesting of symbol references before resolution gives up.
pub const MAX_SYMBOL_DEPTH: usize = 32;

/// Evaluator for SystemVerilog constant expressions.
///
/// Identifiers resolve through an optional symbol table mapping an id (for
/// example a parameter's `parameterId`) to its own expression text.
#[derive(Debug, Clone, Default)]
pub struct SystemVerilogParser {
    symbols: HashMap<String, String>,
}

impl SystemVerilogParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator resolving identifiers through `symbols`.
    pub fn with_symbols(symbols: HashMap<String, String>) -> Self {
        Self { symbols }
    }

    /// Add or replace one symbol.
    pub fn define(&mut self, id: impl Into<String>, expression: impl Into<String>) {
        self.symbols.insert(id.into(), expression.into());
    }

    pub fn has_symbol(&self, id: &str) -> bool {
        self.symbols.contains_key(id)
    }

    /// Evaluate `expression` to a typed value.
    pub fn evaluate(&self, expression: &str) -> Result<Value, ExpressionError> {
        self.evaluate_at(expression, 0)
    }

    fn evaluate_at(&self, expression: &str, depth: usize) -> Result<Value, ExpressionError> {
        let tokens = Lexer::new(expression).tokenize()?;
        let tree = Parser::new(tokens).parse()?;
        self.eval(&tree, depth)
    }

    fn eval(&self, expr: &Expr, depth: usize) -> Result<Value, ExpressionError> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Symbol(name) => {
                let text = self
                    .symbols
                    .get(name)
                    .ok_or_else(|| ExpressionError::UnknownSymbol(name.clone()))?;
                if depth >= MAX_SYMBOL_DEPTH {
                    return Err(ExpressionError::RecursionLimit(name.clone()));
                }
                self.evaluate_at(text, depth + 1)
            }
            Expr::Unary { op, operand } => Value::unary(*op, self.eval(operand, depth)?),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = self.eval(lhs, depth)?;
                let rhs = self.eval(rhs, depth)?;
                Value::binary(*op, lhs, rhs)
            }
            Expr::Ternary {
                condition,
                then,
                otherwise,
            } => {
                if self.eval(condition, depth)?.is_truthy()? {
                    self.eval(then, depth)
                } else {
                    self.eval(otherwise, depth)
                }
            }
            Expr::Call { function, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.eval(arg, depth))
                    .collect::<Result<Vec<_>, _>>()?;
                call(function, args)
            }
            Expr::Array(items) => items
                .iter()
                .map(|item| self.eval(item, depth))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
        }
    }
}

impl ExpressionParser for SystemVerilogParser {
    fn parse_expression(&self, expression: &str) -> Evaluation {
        self.evaluate(expression).into()
    }
}

fn call(function: &str, args: Vec<Value>) -> Result<Value, ExpressionError> {
    let expected = match function {
        "pow" => 2,
        "clog2" | "sqrt" | "exp" => 1,
        other => return Err(ExpressionError::UnknownFunction(other.to_string())),
    };
    if args.len() != expected {
        return Err(ExpressionError::ArgumentCount {
            function: function.to_string(),
            expected,
            actual: args.len(),
        });
    }

    let invalid = || ExpressionError::InvalidArgument(function.to_string());
    let mut numbers = args.iter().map(Value::as_f64);
    let first = numbers.next().flatten().ok_or_else(invalid)?;

    match function {
        "clog2" => {
            if first < 0.0 {
                return Err(invalid());
            }
            if first <= 1.0 {
                return Ok(Value::Int(0));
            }
            Ok(Value::Int(first.log2().ceil() as i64))
        }
        "sqrt" => {
            if first < 0.0 {
                return Err(invalid());
            }
            Ok(Value::general(first.sqrt()))
        }
        "exp" => Ok(Value::general(first.exp())),
        _ => {
            let mut args = args.into_iter();
            match (args.next(), args.next()) {
                (Some(base), Some(exp)) => Value::binary(super::lexer::Op::Pow, base, exp),
                _ => Err(invalid()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> Evaluation {
        SystemVerilogParser::new().parse_expression(s)
    }

    fn assert_value(s: &str, expected: &str) {
        let result = eval(s);
        assert!(result.valid, "'{}' should be valid", s);
        assert_eq!(result.value, expected, "evaluating '{}'", s);
    }

    fn assert_invalid(s: &str) {
        let result = eval(s);
        assert!(!result.valid, "'{}' should be invalid", s);
        assert_eq!(result.value, "x");
    }

    #[test]
    fn test_literals() {
        assert_value("0", "0");
        assert_value("+1", "1");
        assert_value("-1", "-1");
        assert_value("'d2", "2");
        assert_value("'SD3", "3");
        assert_value("1'd3", "3");
        assert_value("'sd10_000", "10000");
        assert_value("32'h00000001", "1");
        assert_value("4'b0111", "7");
        assert_value("3'o011", "9");
        assert_value("0.25", "0.25");
        assert_value("-1.0", "-1.0");
        assert_value("TRUe", "1");
        assert_value("fALSe", "0");
        assert_value("\" text \"", "\" text \"");
    }

    #[test]
    fn test_invalid_inputs() {
        assert_invalid("");
        assert_invalid("   ");
        assert_invalid("-");
        assert_invalid("ff");
        assert_invalid("text + 2");
        assert_invalid("1+");
        assert_invalid("\"text");
        assert_invalid("{1,1,#}");
        assert_invalid("((1)");
        assert_invalid("(1))");
        assert_invalid(")1(");
        assert_invalid("?");
        assert_invalid("(3+2):(4+6)");
    }

    #[test]
    fn test_arithmetic() {
        assert_value("4-3", "1");
        assert_value("1+1.12", "2.12");
        assert_value("8'sd8 + 8'sd9", "17");
        assert_value("'hA + 'b1010 + 'o12 + 10", "40");
        assert_value("0.25 + 0.25 + 0.25 + 0.25", "1.00");
        assert_value("1000004.012 + 1.84444444", "1000005.85644444");
        assert_value("0.5 - 2.0", "-1.5");
        assert_value("-2*-2", "4");
        assert_value("0.240*0.21", "0.050");
        assert_value("10000.1 * 20002", "200022000.2");
        assert_value("7 + 2*4*1 - 2*1 - 5*2", "3");
        assert_value("6/2*4*3/1", "36");
    }

    #[test]
    fn test_division() {
        assert_value("3/2", "1");
        assert_value("-2/2", "-1");
        assert_value("3/2.0", "1");
        assert_value("3.0/2", "1.5");
        assert_value("10.0/3", "3.3");
        assert_value("1 / 7", "0");
        assert_value("1.0 / 7", "0.1");
        assert_value("1.0000 / 7", "0.1429");
        assert_value("10000.1 / 20002", "0.5");
        assert_invalid("1/0");
        assert_invalid("3.0/0.0");
        assert_invalid("5 % 0");
        assert_value("7 % 3", "1");
    }

    #[test]
    fn test_power() {
        assert_value("0**0", "1");
        assert_value("-1**-1", "-1");
        assert_value("-1**-2", "1");
        assert_value("2 ** -1", "0");
        assert_value("-2**2", "4");
        assert_value("-2**3", "-8");
        assert_value("2**2**2", "16");
        assert_value("'h02 ** 'b0010 ** 'o2 ** 2", "256");
        assert_value("2.0 ** -1", "0.5");
        assert_value("2.50 ** 2", "6.25");
        assert_value("10000.1 ** 2", "100002000.0");
        assert_value("10000.1**3", "1000030000300.0");
        assert_invalid("0**-2");
    }

    #[test]
    fn test_arrays() {
        assert_value("{1,1}", "{1,1}");
        assert_value("{true,false}", "{1,0}");
        assert_value("{'h10,'h14}", "{16,20}");
        assert_value("{{1,1},1}", "{{1,1},1}");
        assert_value("{1,2**3,1}", "{1,8,1}");
        assert_value("{$clog2(3),1,1,1}", "{2,1,1,1}");
        assert_invalid("{1,1}+{1,1}");
        assert_invalid("{1,1} * 1");
        assert_invalid("1 / {1,1}");
    }

    #[test]
    fn test_functions() {
        for (input, expected) in [
            ("$clog2(0)", "0"),
            ("$clog2(1)", "0"),
            ("$clog2(2)", "1"),
            ("$clog2(3)", "2"),
            ("$clog2(128)", "7"),
            ("$clog2(129)", "8"),
            ("$clog2('hFF)", "8"),
            ("$clog2($clog2(256))", "3"),
            ("$pow(2, 3)", "8"),
            ("$sqrt(0)", "0"),
            ("$sqrt(4)", "2"),
            ("$exp(0)", "1"),
            ("$exp(1)", "2.71828"),
            ("$exp(-2)", "0.135335"),
            ("(2 + 2)*3*$clog2(4*2*2) + 2", "50"),
            ("-$clog2(32)-($sqrt(25)-(-$pow(2,2)))", "-14"),
        ] {
            assert_value(input, expected);
        }
        assert_invalid("$clog2(-1)");
        assert_invalid("$sqrt(-2)");
        assert_invalid("$unknown(1)");
        assert_invalid("$pow(2)");
    }

    #[test]
    fn test_comparisons_and_logic() {
        assert_value("14*2 > 2-3*2+8", "1");
        assert_value("5>5", "0");
        assert_value("1==(8==8)", "1");
        assert_value("10/2>=11+1*10", "0");
        assert_value("2*3-1!=10/2", "0");
        assert_value("\"string1\"==\"string1\"", "1");
        assert_value("\"string1\"!=\"string2\"", "1");
        assert_value("1 && 0", "0");
        assert_value("1 || 0", "1");
        assert_value("!0", "1");
        assert_invalid("\"a\" + 1");
    }

    #[test]
    fn test_bitwise() {
        assert_value("~4'b001", "-2");
        assert_value("4'b0010 << 2", "8");
        assert_value("4'b1000 >> 3", "1");
        assert_value("'b1100 & 'b1010", "8");
        assert_value("'b1100 | 'b1010", "14");
        assert_value("'b1100 ^ 'b1010", "6");
        assert_invalid("1.5 << 1");
    }

    #[test]
    fn test_ternary() {
        assert_value("true?1:0", "1");
        assert_value("1-1?2:3+1", "4");
        assert_value("(3+2)?((3+3)?(4+7):1):0", "11");
        assert_value("3+2?3+3?4+7:1:0", "11");
        assert_value("1>2?3+3?4+7:1:0", "0");
        assert_value("1?11:2?12:0", "11");
        assert_value("1?12?1:0:22", "1");
    }

    #[test]
    fn test_symbols() {
        let mut symbols = HashMap::new();
        symbols.insert("id_width".to_string(), "8".to_string());
        symbols.insert("id_double".to_string(), "id_width * 2".to_string());
        let parser = SystemVerilogParser::with_symbols(symbols);

        assert_eq!(parser.parse_expression("id_double - 1").value, "15");
        assert!(!parser.parse_expression("id_missing").valid);
    }

    #[test]
    fn test_symbol_cycle_is_invalid() {
        let mut parser = SystemVerilogParser::new();
        parser.define("a", "b + 1");
        parser.define("b", "a + 1");
        assert!(parser.has_symbol("a"));
        assert!(matches!(
            parser.evaluate("a"),
            Err(ExpressionError::RecursionLimit(_))
        ));
        assert!(!parser.parse_expression("a").valid);
    }

    #[test]
    fn test_deep_nesting_is_invalid() {
        let parser = SystemVerilogParser::new();
        let text = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        let evaluation = parser.parse_expression(&text);
        assert!(!evaluation.valid);
        assert_eq!(evaluation.value, "x");
    }
}
