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

//! Exact output checks against hand-written documents.

use ipxact_core::model::{AbstractionDefinition, BusDefinition, Component};
use ipxact_core::{Document, DocumentType, Revision, Vlnv};
use ipxact_xml::{read_document, reformat, write_document, ToXmlConfig, XmlError};
use std::fs;
use tempfile::TempDir;

const NAMESPACES_14: &str = "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
    xmlns:ipxact=\"http://www.accellera.org/XMLSchema/IPXACT/1685-2014\" \
    xmlns:kactus2=\"http://kactus2.cs.tut.fi\" \
    xsi:schemaLocation=\"http://www.accellera.org/XMLSchema/IPXACT/1685-2014 \
    http://www.accellera.org/XMLSchema/IPXACT/1685-2014/index.xsd\"";

fn minimal_abstraction() -> AbstractionDefinition {
    let vlnv = Vlnv::new(DocumentType::AbstractionDefinition, "TUT", "TestLibrary", "MinimalAbsDef", "1.0");
    let mut definition = AbstractionDefinition::new(vlnv, Revision::Std14);
    definition.bus_type = Vlnv::new(DocumentType::BusDefinition, "TUT", "TestLibrary", "TargetBusDef", "1.0");
    definition
}

#[test]
fn minimal_abstraction_definition() {
    let mut definition = minimal_abstraction();
    definition.name_group.description = "This is a description".to_string();

    let xml = write_document(&Document::AbstractionDefinition(definition), &ToXmlConfig::compact()).unwrap();
    assert_eq!(
        xml,
        format!(
            "<?xml version=\"1.0\"?>\
             <ipxact:abstractionDefinition {}>\
                <ipxact:vendor>TUT</ipxact:vendor>\
                <ipxact:library>TestLibrary</ipxact:library>\
                <ipxact:name>MinimalAbsDef</ipxact:name>\
                <ipxact:version>1.0</ipxact:version>\
                <ipxact:busType vendor=\"TUT\" library=\"TestLibrary\" name=\"TargetBusDef\" version=\"1.0\"/>\
                <ipxact:description>This is a description</ipxact:description>\
             </ipxact:abstractionDefinition>\n",
            NAMESPACES_14
        )
    );
}

#[test]
fn top_comments_follow_declaration() {
    let mut definition = minimal_abstraction();
    definition.top_comments.push("Commented section".to_string());

    let xml = write_document(&Document::AbstractionDefinition(definition), &ToXmlConfig::compact()).unwrap();
    assert!(xml.starts_with(
        "<?xml version=\"1.0\"?><!--Commented section--><ipxact:abstractionDefinition "
    ));
}

#[test]
fn minimal_bus_definition() {
    let vlnv = Vlnv::new(DocumentType::BusDefinition, "TUT", "TestLibrary", "MinimalBus", "1.0");
    let mut bus = BusDefinition::new(vlnv, Revision::Std14);
    bus.direct_connection = "true".to_string();
    bus.is_addressable = "false".to_string();

    let xml = write_document(&Document::BusDefinition(bus), &ToXmlConfig::compact()).unwrap();
    assert_eq!(
        xml,
        format!(
            "<?xml version=\"1.0\"?>\
             <ipxact:busDefinition {}>\
                <ipxact:vendor>TUT</ipxact:vendor>\
                <ipxact:library>TestLibrary</ipxact:library>\
                <ipxact:name>MinimalBus</ipxact:name>\
                <ipxact:version>1.0</ipxact:version>\
                <ipxact:directConnection>true</ipxact:directConnection>\
                <ipxact:isAddressable>false</ipxact:isAddressable>\
             </ipxact:busDefinition>\n",
            NAMESPACES_14
        )
    );
}

#[test]
fn pretty_component_uses_tabs() {
    let vlnv = Vlnv::new(DocumentType::Component, "tuni.fi", "TestLibrary", "TestComponent", "0.11");
    let mut component = Component::new(vlnv, Revision::Std14);
    component.kactus_version = "3.0.0".to_string();

    let xml = write_document(&Document::Component(component), &ToXmlConfig::default()).unwrap();
    assert_eq!(
        xml,
        format!(
            "<?xml version=\"1.0\"?>\n\
             <ipxact:component {}>\n\
             \t<ipxact:vendor>tuni.fi</ipxact:vendor>\n\
             \t<ipxact:library>TestLibrary</ipxact:library>\n\
             \t<ipxact:name>TestComponent</ipxact:name>\n\
             \t<ipxact:version>0.11</ipxact:version>\n\
             \t<ipxact:vendorExtensions>\n\
             \t\t<kactus2:version>3.0.0</kactus2:version>\n\
             \t</ipxact:vendorExtensions>\n\
             </ipxact:component>\n",
            NAMESPACES_14
        )
    );
}

#[test]
fn reformat_reads_hand_written_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bus.xml");
    fs::write(
        &path,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- Created by hand -->
<ip:busDefinition xmlns:ip="http://www.accellera.org/XMLSchema/IPXACT/1685-2022">
  <ip:vendor>TUT</ip:vendor>
  <ip:library>TestLibrary</ip:library>
  <ip:name>HandBus</ip:name>
  <ip:version>1.0</ip:version>
  <ip:directConnection>false</ip:directConnection>
  <ip:isAddressable>true</ip:isAddressable>
  <ip:maxInitiators>2</ip:maxInitiators>
</ip:busDefinition>
"#,
    )
    .unwrap();

    let xml = fs::read_to_string(&path).unwrap();
    let document = read_document(&xml).unwrap();
    let bus = document.as_bus_definition().unwrap();
    assert_eq!(bus.revision, Revision::Std22);
    assert_eq!(bus.max_initiators, "2");
    assert_eq!(bus.top_comments, vec![" Created by hand "]);

    let formatted = reformat(&xml).unwrap();
    assert!(formatted.contains("\t<ipxact:maxInitiators>2</ipxact:maxInitiators>\n"));
    assert!(formatted.contains("<!-- Created by hand -->"));
}

#[test]
fn errors_carry_context() {
    let error = read_document("<ipxact:component xmlns:ipxact=\"urn:unknown\"/>").unwrap_err();
    assert_eq!(error, XmlError::UnknownNamespace("urn:unknown".to_string()));
    assert_eq!(error.to_string(), "unsupported IP-XACT namespace 'urn:unknown'");
}

#[test]
fn vendor_extensions_survive_rewrite() {
    let xml = r#"<?xml version="1.0"?>
<ipxact:busDefinition xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2014"
    xmlns:kactus2="http://kactus2.cs.tut.fi" xmlns:other="urn:other">
  <ipxact:vendor>TUT</ipxact:vendor>
  <ipxact:library>TestLibrary</ipxact:library>
  <ipxact:name>ExtBus</ipxact:name>
  <ipxact:version>1.0</ipxact:version>
  <ipxact:directConnection>true</ipxact:directConnection>
  <ipxact:isAddressable>false</ipxact:isAddressable>
  <ipxact:vendorExtensions>
    <kactus2:version>3.10.0</kactus2:version>
    <kactus2:wrap other:kind="x"><other:inner>v</other:inner></kactus2:wrap>
    <kactus2:doc>see <kactus2:ref>r1</kactus2:ref> then</kactus2:doc>
  </ipxact:vendorExtensions>
</ipxact:busDefinition>
"#;
    let document = read_document(xml).unwrap();

    for config in [ToXmlConfig::default(), ToXmlConfig::compact()] {
        let written = write_document(&document, &config).unwrap();
        let reread = read_document(&written).unwrap();
        assert_eq!(reread, document);
        assert_eq!(write_document(&reread, &config).unwrap(), written);
    }

    let bus = document.as_bus_definition().unwrap();
    let doc = &bus.vendor_extensions[1];
    assert_eq!(doc.text, "see");
    assert_eq!(doc.children[0].tail, "then");
}
