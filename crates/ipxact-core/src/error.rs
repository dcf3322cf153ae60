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

//! Error types for the IP-XACT document model.

use std::fmt;
use thiserror::Error;

/// The kind of error raised while building model values from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelErrorKind {
    /// Malformed `vendor:library:name:version` identifier.
    Vlnv,
    /// Unknown schema namespace or revision name.
    Revision,
    /// Unknown document type name.
    DocumentType,
}

impl fmt::Display for ModelErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vlnv => write!(f, "VlnvError"),
            Self::Revision => write!(f, "RevisionError"),
            Self::DocumentType => write!(f, "DocumentTypeError"),
        }
    }
}

/// An error raised while converting text into model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ModelError {
    /// The kind of error.
    pub kind: ModelErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl ModelError {
    /// Create a new error.
    pub fn new(kind: ModelErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn vlnv(message: impl Into<String>) -> Self {
        Self::new(ModelErrorKind::Vlnv, message)
    }

    pub fn revision(message: impl Into<String>) -> Self {
        Self::new(ModelErrorKind::Revision, message)
    }

    pub fn document_type(message: impl Into<String>) -> Self {
        Self::new(ModelErrorKind::DocumentType, message)
    }
}

/// Result alias for model conversions.
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_kind() {
        let err = ModelError::vlnv("expected four parts");
        assert_eq!(err.to_string(), "VlnvError: expected four parts");
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        assert_ne!(
            ModelError::revision("x").kind,
            ModelError::document_type("x").kind
        );
    }
}
