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

//! VLNV identifiers.

use crate::error::{ModelError, ModelResult};
use std::fmt;
use std::str::FromStr;

/// Type of document a VLNV identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocumentType {
    AbstractionDefinition,
    BusDefinition,
    Component,
    ComDefinition,
    ApiDefinition,
    #[default]
    Invalid,
}

impl DocumentType {
    /// Qualified name of the root element for the document type.
    pub fn root_element(self) -> Option<&'static str> {
        match self {
            DocumentType::AbstractionDefinition => Some("ipxact:abstractionDefinition"),
            DocumentType::BusDefinition => Some("ipxact:busDefinition"),
            DocumentType::Component => Some("ipxact:component"),
            DocumentType::ComDefinition => Some("kactus2:comDefinition"),
            DocumentType::ApiDefinition => Some("kactus2:apiDefinition"),
            DocumentType::Invalid => None,
        }
    }

    /// Document type for a qualified root element name.
    pub fn from_root_element(name: &str) -> ModelResult<Self> {
        match name {
            "ipxact:abstractionDefinition" => Ok(DocumentType::AbstractionDefinition),
            "ipxact:busDefinition" => Ok(DocumentType::BusDefinition),
            "ipxact:component" => Ok(DocumentType::Component),
            "kactus2:comDefinition" => Ok(DocumentType::ComDefinition),
            "kactus2:apiDefinition" => Ok(DocumentType::ApiDefinition),
            other => Err(ModelError::document_type(format!(
                "unsupported document root '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentType::AbstractionDefinition => "abstraction definition",
            DocumentType::BusDefinition => "bus definition",
            DocumentType::Component => "component",
            DocumentType::ComDefinition => "COM definition",
            DocumentType::ApiDefinition => "API definition",
            DocumentType::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// Vendor, library, name and version: the identity of a library document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vlnv {
    pub document_type: DocumentType,
    pub vendor: String,
    pub library: String,
    pub name: String,
    pub version: String,
}

impl Vlnv {
    pub fn new(
        document_type: DocumentType,
        vendor: impl Into<String>,
        library: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            document_type,
            vendor: vendor.into(),
            library: library.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Same identifier with a different document type.
    pub fn with_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = document_type;
        self
    }

    /// True when no part of the identifier is set.
    pub fn is_empty(&self) -> bool {
        self.vendor.is_empty()
            && self.library.is_empty()
            && self.name.is_empty()
            && self.version.is_empty()
    }

    /// True when all four parts are non-empty and free of whitespace-only values.
    pub fn is_valid(&self) -> bool {
        [&self.vendor, &self.library, &self.name, &self.version]
            .iter()
            .all(|part| !part.trim().is_empty() && !part.contains(':'))
    }

    /// Errors describing every missing part, prefixed with `context`.
    pub fn find_errors(&self, errors: &mut Vec<String>, context: &str) {
        let parts = [
            ("vendor", &self.vendor),
            ("library", &self.library),
            ("name", &self.name),
            ("version", &self.version),
        ];
        for (label, value) in parts {
            if value.trim().is_empty() {
                errors.push(format!("No {} specified for VLNV in {}", label, context));
            } else if value.contains(':') {
                errors.push(format!(
                    "The {} '{}' of VLNV in {} contains an illegal character ':'",
                    label, value, context
                ));
            }
        }
    }

    /// Equality ignoring the document type.
    pub fn same_identity(&self, other: &Vlnv) -> bool {
        self.vendor == other.vendor
            && self.library == other.library
            && self.name == other.name
            && self.version == other.version
    }
}

impl fmt::Display for Vlnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.vendor, self.library, self.name, self.version
        )
    }
}

impl FromStr for Vlnv {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        match parts.as_slice() {
            [vendor, library, name, version] => Ok(Vlnv::new(
                DocumentType::Invalid,
                *vendor,
                *library,
                *name,
                *version,
            )),
            _ => Err(ModelError::vlnv(format!(
                "expected vendor:library:name:version, found '{}'",
                s
            ))),
        }
    }
}
