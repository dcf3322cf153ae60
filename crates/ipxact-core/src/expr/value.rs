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

//! Evaluated expression values and their arithmetic.

use super::lexer::Op;
use super::ExpressionError;
use std::cmp::Ordering;
use std::fmt;

/// Result of evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    /// Real number printed with `precision` fraction digits.
    Real { value: f64, precision: usize },
    /// String literal including its quotes.
    Str(String),
    Array(Vec<Value>),
}

impl Value {
    pub fn real(value: f64, precision: usize) -> Self {
        Value::Real { value, precision }
    }

    /// Real with "general" formatting: six significant digits, trailing zeros removed.
    ///
    /// Integral results collapse to [`Value::Int`].
    pub fn general(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            return Value::Int(value as i64);
        }
        let magnitude = if value == 0.0 {
            0
        } else {
            value.abs().log10().floor() as i32
        };
        let digits = (5 - magnitude).clamp(0, 17) as usize;
        let text = format!("{:.*}", digits, value);
        let precision = match text.split_once('.') {
            Some((_, fraction)) => fraction.trim_end_matches('0').len(),
            None => 0,
        };
        Value::real(value, precision)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Real { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Real { value, .. } => Some(*value as i64),
            _ => None,
        }
    }

    fn precision(&self) -> usize {
        match self {
            Value::Real { precision, .. } => *precision,
            _ => 0,
        }
    }

    fn is_real(&self) -> bool {
        matches!(self, Value::Real { .. })
    }

    fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Real { .. })
    }

    /// Truth value used by `?:`, `&&`, `||` and `!`.
    pub fn is_truthy(&self) -> Result<bool, ExpressionError> {
        self.as_f64()
            .map(|v| v != 0.0)
            .ok_or_else(|| ExpressionError::TypeMismatch("condition must be numeric".to_string()))
    }

    /// Apply a prefix operator.
    pub(crate) fn unary(op: Op, operand: Value) -> Result<Value, ExpressionError> {
        match (op, operand) {
            (Op::Add, v) if v.is_numeric() => Ok(v),
            (Op::Sub, Value::Int(v)) => Ok(v
                .checked_neg()
                .map(Value::Int)
                .unwrap_or_else(|| Value::real(-(v as f64), 0))),
            (Op::Sub, Value::Real { value, precision }) => Ok(Value::real(-value, precision)),
            (Op::BitNot, Value::Int(v)) => Ok(Value::Int(!v)),
            (Op::Not, v) if v.is_numeric() => Ok(Value::from_bool(!v.is_truthy()?)),
            (op, v) => Err(ExpressionError::TypeMismatch(format!(
                "operator {:?} is not defined for {}",
                op,
                v.kind()
            ))),
        }
    }

    /// Apply an infix operator.
    pub(crate) fn binary(op: Op, lhs: Value, rhs: Value) -> Result<Value, ExpressionError> {
        if matches!(lhs, Value::Array(_)) || matches!(rhs, Value::Array(_)) {
            return Err(ExpressionError::TypeMismatch(
                "arrays cannot be used as operands".to_string(),
            ));
        }

        if let (Value::Str(l), Value::Str(r)) = (&lhs, &rhs) {
            return match op {
                Op::Eq => Ok(Value::from_bool(l == r)),
                Op::Ne => Ok(Value::from_bool(l != r)),
                _ => Err(ExpressionError::TypeMismatch(format!(
                    "operator {:?} is not defined for strings",
                    op
                ))),
            };
        }
        if !lhs.is_numeric() || !rhs.is_numeric() {
            return Err(ExpressionError::TypeMismatch(
                "strings can only be compared with strings".to_string(),
            ));
        }

        match op {
            Op::Add => Ok(arithmetic(&lhs, &rhs, i64::checked_add, |a, b| a + b)),
            Op::Sub => Ok(arithmetic(&lhs, &rhs, i64::checked_sub, |a, b| a - b)),
            Op::Mul => Ok(arithmetic(&lhs, &rhs, i64::checked_mul, |a, b| a * b)),
            Op::Div => divide(&lhs, &rhs),
            Op::Pow => power(&lhs, &rhs),
            Op::Mod | Op::Shl | Op::Shr | Op::BitAnd | Op::BitOr | Op::BitXor => {
                integral(op, &lhs, &rhs)
            }
            Op::And => Ok(Value::from_bool(lhs.is_truthy()? && rhs.is_truthy()?)),
            Op::Or => Ok(Value::from_bool(lhs.is_truthy()? || rhs.is_truthy()?)),
            Op::Eq | Op::Ne | Op::Lt | Op::Le | Op::Gt | Op::Ge => {
                let ordering = compare(&lhs, &rhs)?;
                let result = match op {
                    Op::Eq => ordering == Ordering::Equal,
                    Op::Ne => ordering != Ordering::Equal,
                    Op::Lt => ordering == Ordering::Less,
                    Op::Le => ordering != Ordering::Greater,
                    Op::Gt => ordering == Ordering::Greater,
                    _ => ordering != Ordering::Less,
                };
                Ok(Value::from_bool(result))
            }
            Op::BitNot | Op::Not => Err(ExpressionError::UnexpectedToken(format!("{:?}", op))),
        }
    }

    pub fn from_bool(b: bool) -> Self {
        Value::Int(i64::from(b))
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "integers",
            Value::Real { .. } => "reals",
            Value::Str(_) => "strings",
            Value::Array(_) => "arrays",
        }
    }
}

fn arithmetic(
    lhs: &Value,
    rhs: &Value,
    int_op: fn(i64, i64) -> Option<i64>,
    real_op: fn(f64, f64) -> f64,
) -> Value {
    if let (Value::Int(l), Value::Int(r)) = (lhs, rhs) {
        if let Some(v) = int_op(*l, *r) {
            return Value::Int(v);
        }
    }
    let (l, r) = (lhs.as_f64().unwrap_or(0.0), rhs.as_f64().unwrap_or(0.0));
    Value::real(real_op(l, r), lhs.precision().max(rhs.precision()))
}

fn divide(lhs: &Value, rhs: &Value) -> Result<Value, ExpressionError> {
    let divisor = rhs.as_f64().unwrap_or(0.0);
    if divisor == 0.0 {
        return Err(ExpressionError::DivisionByZero);
    }
    match (lhs, rhs) {
        (Value::Int(l), Value::Int(r)) => Ok(l
            .checked_div(*r)
            .map(Value::Int)
            .unwrap_or_else(|| Value::real(*l as f64 / *r as f64, 0))),
        // Integer dividend truncates towards zero.
        (Value::Int(l), _) => Ok(Value::Int((*l as f64 / divisor).trunc() as i64)),
        (Value::Real { value, .. }, _) => Ok(Value::real(
            value / divisor,
            lhs.precision().max(rhs.precision()),
        )),
        _ => Err(ExpressionError::TypeMismatch("division of non-numbers".to_string())),
    }
}

fn power(lhs: &Value, rhs: &Value) -> Result<Value, ExpressionError> {
    match (lhs, rhs) {
        (Value::Int(base), Value::Int(exp)) => {
            if *exp < 0 {
                return match base {
                    0 => Err(ExpressionError::DivisionByZero),
                    1 => Ok(Value::Int(1)),
                    -1 => Ok(Value::Int(if exp % 2 == 0 { 1 } else { -1 })),
                    _ => Ok(Value::Int(0)),
                };
            }
            let checked = u32::try_from(*exp)
                .ok()
                .and_then(|e| base.checked_pow(e));
            Ok(checked
                .map(Value::Int)
                .unwrap_or_else(|| Value::real((*base as f64).powf(*exp as f64), 0)))
        }
        _ => {
            let base = lhs.as_f64().unwrap_or(0.0);
            let exp = rhs.as_f64().unwrap_or(0.0);
            if base == 0.0 && exp < 0.0 {
                return Err(ExpressionError::DivisionByZero);
            }
            Ok(Value::real(
                base.powf(exp),
                lhs.precision().max(rhs.precision()),
            ))
        }
    }
}

fn integral(op: Op, lhs: &Value, rhs: &Value) -> Result<Value, ExpressionError> {
    let (Value::Int(l), Value::Int(r)) = (lhs, rhs) else {
        return Err(ExpressionError::TypeMismatch(format!(
            "operator {:?} requires integer operands",
            op
        )));
    };
    let (l, r) = (*l, *r);
    let result = match op {
        Op::Mod => {
            if r == 0 {
                return Err(ExpressionError::DivisionByZero);
            }
            l.checked_rem(r)
        }
        Op::Shl => u32::try_from(r).ok().and_then(|s| l.checked_shl(s)),
        Op::Shr => u32::try_from(r).ok().and_then(|s| l.checked_shr(s)),
        Op::BitAnd => Some(l & r),
        Op::BitOr => Some(l | r),
        _ => Some(l ^ r),
    };
    result
        .map(Value::Int)
        .ok_or_else(|| ExpressionError::Overflow(format!("{:?}", op)))
}

fn compare(lhs: &Value, rhs: &Value) -> Result<Ordering, ExpressionError> {
    if let (Value::Int(l), Value::Int(r)) = (lhs, rhs) {
        return Ok(l.cmp(r));
    }
    let (l, r) = (lhs.as_f64().unwrap_or(0.0), rhs.as_f64().unwrap_or(0.0));
    l.partial_cmp(&r)
        .ok_or_else(|| ExpressionError::TypeMismatch("cannot compare NaN".to_string()))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Real { value, precision } => write!(f, "{:.*}", precision, value),
            Value::Str(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("}")
            }
        }
    }
}
