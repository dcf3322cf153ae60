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

//! Eval command - SystemVerilog expression evaluation

use crate::error::CliError;
use ipxact_core::{ExpressionParser, SystemVerilogParser};
use std::collections::HashMap;

/// Split `NAME=VALUE` symbol definitions.
pub fn parse_defines(defines: &[String]) -> Result<HashMap<String, String>, CliError> {
    defines
        .iter()
        .map(|define| match define.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok((name.trim().to_string(), value.trim().to_string()))
            }
            _ => Err(CliError::InvalidInput(format!(
                "symbol definition '{}' must have the form NAME=VALUE",
                define
            ))),
        })
        .collect()
}

/// Evaluate an expression and print its value.
///
/// # Examples
///
/// ```no_run
/// use ipxact_cli::commands::eval;
///
/// # fn main() -> Result<(), ipxact_cli::error::CliError> {
/// eval("$clog2(WIDTH) + 1", &["WIDTH=32".to_string()])?;
/// # Ok(())
/// # }
/// ```
pub fn eval(expression: &str, defines: &[String]) -> Result<(), CliError> {
    let parser = SystemVerilogParser::with_symbols(parse_defines(defines)?);
    let evaluation = parser.parse_expression(expression);
    if !evaluation.valid {
        return Err(CliError::InvalidExpression(expression.to_string()));
    }
    println!("{}", evaluation.value);
    Ok(())
}
