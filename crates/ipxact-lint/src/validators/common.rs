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

//! Checks shared by several validators.

use ipxact_core::model::Parameter;
use ipxact_core::{duplicate_names, ExpressionParser, Revision, SystemVerilogParser};
use std::collections::HashMap;

/// Values accepted for `access` elements.
pub const ACCESS_VALUES: [&str; 5] = [
    "read-write",
    "read-only",
    "write-only",
    "read-writeOnce",
    "writeOnce",
];

/// Evaluator resolving both parameter ids and parameter names to their values.
pub fn parser_for(parameters: &[Parameter]) -> SystemVerilogParser {
    let mut symbols = HashMap::new();
    for parameter in parameters {
        if !parameter.name().is_empty() {
            symbols.insert(parameter.name().to_string(), parameter.value.clone());
        }
        if !parameter.value_id.is_empty() {
            symbols.insert(parameter.value_id.clone(), parameter.value.clone());
        }
    }
    SystemVerilogParser::with_symbols(symbols)
}

/// isPresent exists only in 2014 documents, where it must be empty or 0/1.
pub fn is_valid_presence(parser: &dyn ExpressionParser, is_present: &str, revision: Revision) -> bool {
    revision.is_std22() || is_present.is_empty() || parser.evaluate_bool_flag(is_present).is_some()
}

pub fn is_empty_or_valid(parser: &dyn ExpressionParser, expression: &str) -> bool {
    expression.is_empty() || parser.parse_expression(expression).valid
}

pub fn is_positive(parser: &dyn ExpressionParser, expression: &str) -> bool {
    parser.evaluate_i64(expression).is_some_and(|value| value > 0)
}

pub fn is_non_negative(parser: &dyn ExpressionParser, expression: &str) -> bool {
    parser.evaluate_u64(expression).is_some()
}

pub fn is_empty_or_non_negative(parser: &dyn ExpressionParser, expression: &str) -> bool {
    expression.is_empty() || is_non_negative(parser, expression)
}

/// `true`, `false` or nothing.
pub fn is_optional_bool(value: &str) -> bool {
    matches!(value, "" | "true" | "false")
}

pub fn is_valid_access(access: &str) -> bool {
    access.is_empty() || ACCESS_VALUES.contains(&access)
}

/// Appends `message(name)` once for every name occurring more than once.
pub fn report_duplicates<'a, I, F>(errors: &mut Vec<String>, names: I, message: F)
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(&str) -> String,
{
    for name in duplicate_names(names) {
        errors.push(message(name));
    }
}

pub fn has_duplicates<'a, I>(names: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    !duplicate_names(names).is_empty()
}

/// Inclusive `[low, high]` bounds of two evaluated expressions.
pub fn bounds(parser: &dyn ExpressionParser, left: &str, right: &str) -> Option<(i64, i64)> {
    let left = parser.evaluate_i64(left)?;
    let right = parser.evaluate_i64(right)?;
    Some((left.min(right), left.max(right)))
}

/// Number of address units a register of `size` bits occupies.
pub fn address_units(size_bits: u64, address_unit_bits: u64) -> u64 {
    if address_unit_bits == 0 {
        return size_bits;
    }
    (size_bits + address_unit_bits - 1) / address_unit_bits
}
