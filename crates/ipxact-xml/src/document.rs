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

//! Whole-document entry points.

use crate::config::ToXmlConfig;
use crate::error::{XmlError, XmlResult};
use crate::reader;
use crate::writer;
use ipxact_core::{Document, DocumentType, Revision, KACTUS2_NAMESPACE};
use quick_xml::events::{BytesDecl, Event};
use tracing::debug;

/// Root element name normalized to the `ipxact:` or `kactus2:` prefix.
fn root_kind(root: roxmltree::Node<'_, '_>) -> XmlResult<(DocumentType, Revision)> {
    let tag = root.tag_name();
    let Some(namespace) = tag.namespace() else {
        return Err(XmlError::UnknownNamespace(String::new()));
    };

    if namespace == KACTUS2_NAMESPACE {
        let name = format!("kactus2:{}", tag.name());
        let document_type =
            DocumentType::from_root_element(&name).map_err(|_| XmlError::UnknownRoot(name))?;
        return Ok((document_type, Revision::Std14));
    }

    let revision = Revision::from_namespace(namespace)
        .map_err(|_| XmlError::UnknownNamespace(namespace.to_string()))?;
    let name = format!("ipxact:{}", tag.name());
    match DocumentType::from_root_element(&name) {
        Ok(document_type @ (DocumentType::AbstractionDefinition
        | DocumentType::BusDefinition
        | DocumentType::Component)) => Ok((document_type, revision)),
        _ => Err(XmlError::UnknownRoot(name)),
    }
}

/// Parses an IP-XACT or Kactus2 document.
///
/// The revision is taken from the namespace of the root element.
///
/// # Examples
///
/// ```
/// use ipxact_xml::read_document;
///
/// let xml = r#"<?xml version="1.0"?>
/// <ipxact:busDefinition xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2014">
///     <ipxact:vendor>TUT</ipxact:vendor>
///     <ipxact:library>ip</ipxact:library>
///     <ipxact:name>bus</ipxact:name>
///     <ipxact:version>1.0</ipxact:version>
///     <ipxact:directConnection>true</ipxact:directConnection>
///     <ipxact:isAddressable>false</ipxact:isAddressable>
/// </ipxact:busDefinition>"#;
///
/// let document = read_document(xml).unwrap();
/// assert_eq!(document.vlnv().to_string(), "TUT:ip:bus:1.0");
/// ```
pub fn read_document(xml: &str) -> XmlResult<Document> {
    let tree = roxmltree::Document::parse(xml)?;
    let root = tree.root_element();
    let (document_type, revision) = root_kind(root)?;
    debug!(%document_type, %revision, "reading document");

    let document = match document_type {
        DocumentType::AbstractionDefinition => {
            Document::AbstractionDefinition(reader::read_abstraction_definition(root, revision))
        }
        DocumentType::BusDefinition => {
            Document::BusDefinition(reader::read_bus_definition(root, revision))
        }
        DocumentType::Component => Document::Component(reader::read_component(root, revision)),
        DocumentType::ComDefinition => Document::ComDefinition(reader::read_com_definition(root)),
        DocumentType::ApiDefinition => Document::ApiDefinition(reader::read_api_definition(root)),
        DocumentType::Invalid => return Err(XmlError::UnknownRoot(root.tag_name().name().to_string())),
    };
    Ok(document)
}

/// Serializes a document, preceded by `<?xml version="1.0"?>` when the
/// configuration asks for it. The output ends with a newline.
pub fn write_document(document: &Document, config: &ToXmlConfig) -> XmlResult<String> {
    debug!(vlnv = %document.vlnv(), pretty = config.pretty, "writing document");

    let mut xml = writer::write_fragment(config, |w| {
        if config.include_declaration {
            w.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))
                .map_err(|e| XmlError::write("declaration", e))?;
        }
        match document {
            Document::AbstractionDefinition(d) => writer::write_abstraction_definition(w, d),
            Document::BusDefinition(d) => writer::write_bus_definition(w, d),
            Document::Component(d) => writer::write_component(w, d),
            Document::ComDefinition(d) => writer::write_com_definition(w, d),
            Document::ApiDefinition(d) => writer::write_api_definition(w, d),
        }
    })?;
    xml.push('\n');
    Ok(xml)
}
