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

//! CLI command implementations

mod eval;
mod format;
mod inspect;
mod validate;

pub use eval::eval;
pub use format::format;
pub use inspect::inspect;
pub use validate::validate;

use crate::error::CliError;
use clap::ValueEnum;
use ipxact_core::model::MemoryLibrary;
use ipxact_core::Document;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Default maximum input size (100 MB).
/// Can be overridden via the IPXACT_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Report format of the validate command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn get_max_file_size() -> u64 {
    std::env::var("IPXACT_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than `IPXACT_MAX_FILE_SIZE` bytes are rejected before any
/// memory is allocated for them.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Read and parse an IP-XACT document.
pub fn read_document(path: &str) -> Result<Document, CliError> {
    let content = read_file(path)?;
    ipxact_xml::read_document(&content).map_err(|e| CliError::parse(path, e))
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Every IP-XACT document among the `.xml` files directly inside `dir`.
///
/// Files that do not parse are skipped with a warning; an unreadable directory
/// is an error.
pub fn load_library(dir: &str) -> Result<MemoryLibrary, CliError> {
    let entries = fs::read_dir(dir).map_err(|e| CliError::io_error(dir, e))?;

    let mut library = MemoryLibrary::new();
    for entry in entries {
        let path = entry.map_err(|e| CliError::io_error(dir, e))?.path();
        if !is_xml_file(&path) {
            continue;
        }
        let name = path.to_string_lossy();
        match read_document(&name) {
            Ok(document) => {
                debug!(file = %name, vlnv = %document.vlnv(), "library document");
                library.insert(document);
            }
            Err(error) => warn!(file = %name, %error, "skipping library file"),
        }
    }
    Ok(library)
}

fn is_xml_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("xml"))
}
