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

//! Structured error types for the IP-XACT CLI.
//!
//! All commands return `Result<T, CliError>`; `main` prints the error and exits
//! with a failure status.

use ipxact_xml::XmlError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for IP-XACT CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use ipxact_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// The file is not a readable IP-XACT document.
    #[error("Parse error in '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    /// Writing the document back to XML failed.
    #[error("Write error: {0}")]
    Write(String),

    /// Linting found problems in the document.
    #[error("{count} validation error(s) found in '{path}'")]
    ValidationFailed { path: PathBuf, count: usize },

    /// Returned by `format --check`.
    #[error("File '{0}' is not in canonical form")]
    NotCanonical(PathBuf),

    /// The expression given to `eval` does not evaluate.
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    /// JSON serialization failed.
    #[error("JSON format error: {0}")]
    Json(String),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: XmlError) -> Self {
        Self::Parse {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<XmlError> for CliError {
    fn from(error: XmlError) -> Self {
        Self::Write(error.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}
