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

//! Abstraction definition reader.

use super::common::{
    read_choices, read_is_present, read_name_group, read_parameters, read_vlnv_attributes,
    read_vlnv_elements, read_vlnv_reference,
};
use crate::dom::{
    attribute, child, child_text, children, is_true, nested, take_extension, text, top_comments,
    vendor_extensions,
};
use ipxact_core::model::{
    AbstractionDefinition, Assertion, PortAbstraction, Qualifier, QualifierType,
    TransactionalAbstraction, TransactionalPort, WireAbstraction, WirePort,
};
use ipxact_core::{DocumentType, NameGroup, Revision};
use roxmltree::Node;
use tracing::debug;

fn master_element(revision: Revision) -> &'static str {
    if revision.is_std22() {
        "ipxact:onInitiator"
    } else {
        "ipxact:onMaster"
    }
}

fn slave_element(revision: Revision) -> &'static str {
    if revision.is_std22() {
        "ipxact:onTarget"
    } else {
        "ipxact:onSlave"
    }
}

/// Reads the `ipxact:qualifier` child of `node`, if any.
pub fn read_qualifier(node: Node<'_, '_>) -> Qualifier {
    let mut qualifier = Qualifier::new();
    let Some(element) = child(node, "ipxact:qualifier") else {
        return qualifier;
    };

    for flag in element.children().filter(Node::is_element) {
        let Some(qualifier_type) = QualifierType::from_element_name(flag.tag_name().name()) else {
            debug!(element = flag.tag_name().name(), "skipping unknown qualifier");
            continue;
        };
        if !is_true(&text(flag)) {
            continue;
        }
        qualifier.set_type(qualifier_type);
        for (qualifier_attribute, xml_name) in qualifier_type.attributes() {
            qualifier.set_attribute(*qualifier_attribute, attribute(flag, xml_name));
        }
    }
    qualifier
}

fn read_wire_port(node: Node<'_, '_>) -> WirePort {
    let width = child(node, "ipxact:width");
    WirePort {
        group: child_text(node, "ipxact:group"),
        presence: child_text(node, "ipxact:presence"),
        width: width.map(text).unwrap_or_default(),
        all_bits: width.map(|w| is_true(&attribute(w, "allBits"))).unwrap_or(false),
        direction: child_text(node, "ipxact:direction"),
    }
}

pub fn read_wire_abstraction(node: Node<'_, '_>, revision: Revision) -> WireAbstraction {
    let requires_driver = child(node, "ipxact:requiresDriver");
    WireAbstraction {
        qualifier: read_qualifier(node),
        system_ports: children(node, "ipxact:onSystem").map(read_wire_port).collect(),
        master_port: child(node, master_element(revision)).map(read_wire_port),
        slave_port: child(node, slave_element(revision)).map(read_wire_port),
        default_value: child_text(node, "ipxact:defaultValue"),
        requires_driver: requires_driver.map(|r| is_true(&text(r))).unwrap_or(false),
        driver_type: requires_driver
            .map(|r| attribute(r, "driverType"))
            .unwrap_or_default(),
    }
}

fn read_transactional_port(node: Node<'_, '_>) -> TransactionalPort {
    let kind = child(node, "ipxact:kind");
    TransactionalPort {
        group: child_text(node, "ipxact:group"),
        presence: child_text(node, "ipxact:presence"),
        initiative: child_text(node, "ipxact:initiative"),
        kind: kind.map(text).unwrap_or_default(),
        custom_kind: kind.map(|k| attribute(k, "custom")).unwrap_or_default(),
        bus_width: child_text(node, "ipxact:busWidth"),
    }
}

pub fn read_transactional_abstraction(
    node: Node<'_, '_>,
    revision: Revision,
) -> TransactionalAbstraction {
    TransactionalAbstraction {
        qualifier: read_qualifier(node),
        system_ports: children(node, "ipxact:onSystem")
            .map(read_transactional_port)
            .collect(),
        master_port: child(node, master_element(revision)).map(read_transactional_port),
        slave_port: child(node, slave_element(revision)).map(read_transactional_port),
    }
}

/// Reads a logical `ipxact:port` of an abstraction definition.
pub fn read_port_abstraction(node: Node<'_, '_>, revision: Revision) -> PortAbstraction {
    PortAbstraction {
        name_group: NameGroup {
            name: child_text(node, "ipxact:logicalName"),
            display_name: child_text(node, "ipxact:displayName"),
            short_description: child_text(node, "ipxact:shortDescription"),
            description: child_text(node, "ipxact:description"),
        },
        is_present: read_is_present(node),
        match_: is_true(&child_text(node, "ipxact:match")),
        wire: child(node, "ipxact:wire").map(|w| read_wire_abstraction(w, revision)),
        transactional: child(node, "ipxact:transactional")
            .map(|t| read_transactional_abstraction(t, revision)),
        vendor_extensions: vendor_extensions(node),
    }
}

fn read_assertion(node: Node<'_, '_>) -> Assertion {
    Assertion {
        name_group: read_name_group(node),
        assert: child_text(node, "ipxact:assert"),
    }
}

/// Reads an `ipxact:abstractionDefinition` root element.
pub fn read_abstraction_definition(root: Node<'_, '_>, revision: Revision) -> AbstractionDefinition {
    let mut extensions = vendor_extensions(root);
    let kactus_version = take_extension(&mut extensions, "kactus2:version")
        .map(|v| v.text)
        .unwrap_or_default();

    AbstractionDefinition {
        vlnv: read_vlnv_elements(root, DocumentType::AbstractionDefinition),
        revision,
        name_group: read_name_group(root),
        bus_type: child(root, "ipxact:busType")
            .map(|bus| read_vlnv_attributes(bus, DocumentType::BusDefinition))
            .unwrap_or_default(),
        extends: read_vlnv_reference(root, "ipxact:extends", DocumentType::AbstractionDefinition),
        ports: nested(root, "ipxact:ports", "ipxact:port")
            .into_iter()
            .map(|port| read_port_abstraction(port, revision))
            .collect(),
        choices: read_choices(root),
        parameters: read_parameters(root, revision),
        assertions: nested(root, "ipxact:assertions", "ipxact:assertion")
            .into_iter()
            .map(read_assertion)
            .collect(),
        vendor_extensions: extensions,
        kactus_version,
        top_comments: top_comments(root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipxact_core::model::QualifierAttribute;

    fn parse(xml: &str) -> AbstractionDefinition {
        let doc = roxmltree::Document::parse(xml).unwrap();
        let root = doc.root_element();
        let revision = Revision::from_namespace(root.tag_name().namespace().unwrap()).unwrap();
        read_abstraction_definition(root, revision)
    }

    #[test]
    fn test_read_std14_definition() {
        let definition = parse(
            r#"<?xml version="1.0"?>
<!--Header comment-->
<ipxact:abstractionDefinition xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2014"
    xmlns:kactus2="http://kactus2.cs.tut.fi">
    <ipxact:vendor>TUT</ipxact:vendor>
    <ipxact:library>TestLibrary</ipxact:library>
    <ipxact:name>TestAbsDef</ipxact:name>
    <ipxact:version>1.0</ipxact:version>
    <ipxact:busType vendor="TUT" library="TestLibrary" name="TargetBusDef" version="1.0"/>
    <ipxact:extends vendor="TUT" library="TestLibrary" name="extended" version="1.0"/>
    <ipxact:ports>
        <ipxact:port>
            <ipxact:isPresent>1</ipxact:isPresent>
            <ipxact:logicalName>reset</ipxact:logicalName>
            <ipxact:wire>
                <ipxact:qualifier>
                    <ipxact:isReset level="low">true</ipxact:isReset>
                </ipxact:qualifier>
                <ipxact:onSystem>
                    <ipxact:group>system1</ipxact:group>
                    <ipxact:presence>required</ipxact:presence>
                </ipxact:onSystem>
                <ipxact:onMaster>
                    <ipxact:width>1</ipxact:width>
                    <ipxact:direction>out</ipxact:direction>
                </ipxact:onMaster>
                <ipxact:requiresDriver driverType="singleShot">true</ipxact:requiresDriver>
            </ipxact:wire>
        </ipxact:port>
    </ipxact:ports>
    <ipxact:description>This is a description</ipxact:description>
    <ipxact:vendorExtensions>
        <kactus2:version>3.0.0</kactus2:version>
    </ipxact:vendorExtensions>
</ipxact:abstractionDefinition>"#,
        );

        assert_eq!(definition.top_comments, vec!["Header comment"]);
        assert_eq!(definition.vlnv.to_string(), "TUT:TestLibrary:TestAbsDef:1.0");
        assert_eq!(definition.bus_type.name, "TargetBusDef");
        assert_eq!(definition.bus_type.document_type, DocumentType::BusDefinition);
        assert_eq!(definition.extends.as_ref().unwrap().name, "extended");
        assert_eq!(definition.name_group.description, "This is a description");
        assert_eq!(definition.kactus_version, "3.0.0");
        assert!(definition.vendor_extensions.is_empty());

        let port = definition.port("reset").unwrap();
        assert_eq!(port.is_present, "1");
        let wire = port.wire.as_ref().unwrap();
        assert!(wire.qualifier.has_type(QualifierType::Reset));
        assert_eq!(wire.qualifier.attribute(QualifierAttribute::ResetLevel), "low");
        assert_eq!(wire.system_ports[0].group, "system1");
        assert_eq!(wire.master_port.as_ref().unwrap().direction, "out");
        assert!(wire.slave_port.is_none());
        assert!(wire.requires_driver);
        assert_eq!(wire.driver_type, "singleShot");
    }

    #[test]
    fn test_read_std22_transactional_port() {
        let definition = parse(
            r#"<ipxact:abstractionDefinition xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2022">
    <ipxact:vendor>TUT</ipxact:vendor>
    <ipxact:library>TestLibrary</ipxact:library>
    <ipxact:name>tlm</ipxact:name>
    <ipxact:version>1.0</ipxact:version>
    <ipxact:shortDescription>short</ipxact:shortDescription>
    <ipxact:busType vendor="TUT" library="TestLibrary" name="tlmBus" version="1.0"/>
    <ipxact:ports>
        <ipxact:port>
            <ipxact:logicalName>socket</ipxact:logicalName>
            <ipxact:match>true</ipxact:match>
            <ipxact:transactional>
                <ipxact:onInitiator>
                    <ipxact:initiative>requires</ipxact:initiative>
                    <ipxact:kind custom="customKind">custom</ipxact:kind>
                </ipxact:onInitiator>
            </ipxact:transactional>
        </ipxact:port>
    </ipxact:ports>
</ipxact:abstractionDefinition>"#,
        );

        assert_eq!(definition.revision, Revision::Std22);
        assert_eq!(definition.name_group.short_description, "short");
        let port = definition.port("socket").unwrap();
        assert!(port.match_);
        let master = port
            .transactional
            .as_ref()
            .and_then(|t| t.master_port.as_ref())
            .unwrap();
        assert_eq!(master.initiative, "requires");
        assert_eq!(master.kind, "custom");
        assert_eq!(master.custom_kind, "customKind");
    }
}
