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

//! Validate command - lint one IP-XACT document

use super::{load_library, read_document, OutputFormat};
use crate::error::CliError;
use colored::Colorize;
use ipxact_core::model::{EmptyLibrary, MemoryLibrary};
use ipxact_core::{DocumentLibrary, Revision};
use ipxact_lint::{document_context, lint_document, LintConfig};
use std::path::PathBuf;

/// Validate an IP-XACT document.
///
/// # Arguments
///
/// * `file` - Path to the document
/// * `format` - Text (colored, human readable) or JSON output
/// * `revision` - Validate as this revision instead of the declared one
/// * `library` - Directory whose documents resolve cross-document references
///
/// # Errors
///
/// Returns `Err` when the file cannot be read or parsed, or when the document
/// has at least one validation error.
///
/// # Examples
///
/// ```no_run
/// use ipxact_cli::commands::{validate, OutputFormat};
/// use ipxact_core::Revision;
///
/// # fn main() -> Result<(), ipxact_cli::error::CliError> {
/// validate("uart.xml", OutputFormat::Text, None, None)?;
/// validate("uart.xml", OutputFormat::Json, Some(Revision::Std22), Some("library/"))?;
/// # Ok(())
/// # }
/// ```
pub fn validate(
    file: &str,
    format: OutputFormat,
    revision: Option<Revision>,
    library: Option<&str>,
) -> Result<(), CliError> {
    let document = read_document(file)?;

    let loaded: Option<MemoryLibrary> = library.map(load_library).transpose()?;
    let library: &dyn DocumentLibrary = match &loaded {
        Some(library) => library,
        None => &EmptyLibrary,
    };

    let config = LintConfig {
        revision_override: revision,
        ..LintConfig::default()
    };
    let errors = lint_document(&document, library, &config);
    let revision = revision.unwrap_or_else(|| document.revision());
    let context = document_context(&document);

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "file": file,
                "document": context,
                "revision": revision.to_string(),
                "valid": errors.is_empty(),
                "errors": errors,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            if errors.is_empty() {
                println!("{} {}", "✓".green().bold(), file);
                println!("  Document: {}", context);
                println!("  Revision: {}", revision);
            } else {
                println!(
                    "{} {} - {} error(s) found:",
                    "✗".red().bold(),
                    file,
                    errors.len()
                );
                for error in &errors {
                    println!("  {}: {}", "error".red(), error);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            path: PathBuf::from(file),
            count: errors.len(),
        })
    }
}
