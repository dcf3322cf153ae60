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

//! Error types for XML reading and writing

use thiserror::Error;

/// Errors raised at the XML boundary.
///
/// Entity readers never fail on missing or malformed optional content; only
/// the document entry points and the writers produce these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum XmlError {
    /// The input is not well-formed XML.
    #[error("XML parse error at {line}:{column}: {message}")]
    Parse {
        /// Description of the parsing error
        message: String,
        /// 1-based line of the error
        line: u32,
        /// 1-based column of the error
        column: u32,
    },

    /// Writing to the output sink failed.
    #[error("Failed to write {context}: {message}")]
    Write {
        /// Element or construct being written
        context: String,
        /// Underlying error message
        message: String,
    },

    /// The root element does not name a supported document type.
    #[error("unsupported document root '{0}'")]
    UnknownRoot(String),

    /// The root element is not in a known IP-XACT namespace.
    #[error("unsupported IP-XACT namespace '{0}'")]
    UnknownNamespace(String),

    /// Output bytes were not valid UTF-8.
    #[error("invalid UTF-8 in XML output: {0}")]
    Utf8(String),
}

impl XmlError {
    pub(crate) fn write(context: &str, error: impl std::fmt::Display) -> Self {
        XmlError::Write {
            context: context.to_string(),
            message: error.to_string(),
        }
    }
}

impl From<roxmltree::Error> for XmlError {
    fn from(err: roxmltree::Error) -> Self {
        let pos = err.pos();
        XmlError::Parse {
            message: err.to_string(),
            line: pos.row,
            column: pos.col,
        }
    }
}

impl From<std::string::FromUtf8Error> for XmlError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        XmlError::Utf8(err.to_string())
    }
}

/// Result alias for XML operations.
pub type XmlResult<T> = Result<T, XmlError>;
