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

//! IP-XACT XML Reading and Writing
//!
//! Reads IEEE 1685-2014 and 1685-2022 documents into the `ipxact-core`
//! model and writes them back in the same element order.
//!
//! # Features
//!
//! - Abstraction definitions, bus definitions and components
//! - Kactus2 COM and API definitions
//! - Revision detection from the root namespace
//! - Vendor extensions preserved as generic trees
//! - Compact or indented output
//!
//! # Examples
//!
//! ```rust
//! use ipxact_core::model::{BusDefinition, Document};
//! use ipxact_core::{DocumentType, Revision, Vlnv};
//! use ipxact_xml::{read_document, write_document, ToXmlConfig};
//!
//! let vlnv = Vlnv::new(DocumentType::BusDefinition, "TUT", "ip", "bus", "1.0");
//! let mut bus = BusDefinition::new(vlnv, Revision::Std22);
//! bus.direct_connection = "true".to_string();
//! bus.is_addressable = "false".to_string();
//!
//! let xml = write_document(&Document::BusDefinition(bus), &ToXmlConfig::default()).unwrap();
//! let document = read_document(&xml).unwrap();
//! assert_eq!(document.revision(), Revision::Std22);
//! ```

mod config;
mod document;
mod dom;
mod emit;
mod error;
pub mod reader;
pub mod writer;

pub use config::ToXmlConfig;
pub use document::{read_document, write_document};
pub use error::{XmlError, XmlResult};

/// Re-exported so callers can hand parsed nodes to the element readers.
pub use roxmltree;
pub use quick_xml;

use ipxact_core::Document;

/// Parse a document and write it back with the default configuration.
pub fn reformat(xml: &str) -> XmlResult<String> {
    let document: Document = read_document(xml)?;
    write_document(&document, &ToXmlConfig::default())
}
