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

//! Format command - canonical rewrite of an IP-XACT document

use super::{read_file, write_output};
use crate::error::CliError;
use ipxact_xml::{read_document, write_document, ToXmlConfig};
use std::path::PathBuf;

/// Rewrite an IP-XACT document in canonical form.
///
/// The canonical form is what the writer produces for the parsed document:
/// standard element order, tab indentation and the namespace header of the
/// document's revision.
///
/// # Arguments
///
/// * `file` - Path to the document
/// * `output` - Optional output file path. If `None`, writes to stdout
/// * `check` - Only report whether the file is already canonical
///
/// # Errors
///
/// Returns `Err` when the file cannot be read or parsed, when writing fails,
/// or in check mode when the file differs from its canonical form.
///
/// # Examples
///
/// ```no_run
/// use ipxact_cli::commands::format;
///
/// # fn main() -> Result<(), ipxact_cli::error::CliError> {
/// format("uart.xml", Some("uart.canonical.xml"), false)?;
/// format("uart.canonical.xml", None, true)?;
/// # Ok(())
/// # }
/// ```
pub fn format(file: &str, output: Option<&str>, check: bool) -> Result<(), CliError> {
    let content = read_file(file)?;
    let document = read_document(&content).map_err(|e| CliError::parse(file, e))?;
    let canonical = write_document(&document, &ToXmlConfig::default())?;

    if check {
        let normalized_original = content.replace("\r\n", "\n");
        if canonical.trim() != normalized_original.trim() {
            return Err(CliError::NotCanonical(PathBuf::from(file)));
        }
        println!("File is in canonical form");
        Ok(())
    } else {
        write_output(&canonical, output)
    }
}
