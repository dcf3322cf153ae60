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

//! Abstraction definition writer.

use super::common::{
    write_choices, write_document_start, write_is_present, write_kactus_version, write_name_group,
    write_parameters, write_vlnv_attributes, write_vlnv_elements,
};
use crate::emit::{present, XmlWriterExt};
use crate::error::XmlResult;
use ipxact_core::model::{
    AbstractionDefinition, Assertion, PortAbstraction, Qualifier, TransactionalAbstraction,
    TransactionalPort, WireAbstraction, WirePort,
};
use ipxact_core::Revision;
use quick_xml::Writer;
use std::io::Write;

const ROOT: &str = "ipxact:abstractionDefinition";

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

/// Writes `ipxact:qualifier` with one flag element per set type.
pub fn write_qualifier<W: Write>(writer: &mut Writer<W>, qualifier: &Qualifier) -> XmlResult<()> {
    if !qualifier.is_set() {
        return Ok(());
    }

    writer.start("ipxact:qualifier")?;
    for qualifier_type in qualifier.types() {
        let attributes: Vec<(&str, &str)> = qualifier_type
            .attributes()
            .iter()
            .map(|(attribute, xml_name)| (*xml_name, qualifier.attribute(*attribute)))
            .collect();
        let element = format!("ipxact:{}", qualifier_type.element_name());
        writer.text_element_with(&element, &present(&attributes), "true")?;
    }
    writer.end("ipxact:qualifier")
}

fn write_wire_port<W: Write>(
    writer: &mut Writer<W>,
    element: &str,
    port: &WirePort,
    revision: Revision,
) -> XmlResult<()> {
    writer.start(element)?;
    if element == "ipxact:onSystem" {
        writer.text_element("ipxact:group", &port.group)?;
    }
    writer.optional_element("ipxact:presence", &port.presence)?;
    if port.all_bits && revision.is_std22() {
        writer.text_element_with("ipxact:width", &[("allBits", "true")], &port.width)?;
    } else {
        writer.optional_element("ipxact:width", &port.width)?;
    }
    writer.optional_element("ipxact:direction", &port.direction)?;
    writer.end(element)
}

pub fn write_wire_abstraction<W: Write>(
    writer: &mut Writer<W>,
    wire: &WireAbstraction,
    revision: Revision,
) -> XmlResult<()> {
    writer.start("ipxact:wire")?;
    write_qualifier(writer, &wire.qualifier)?;

    for port in &wire.system_ports {
        write_wire_port(writer, "ipxact:onSystem", port, revision)?;
    }
    if let Some(port) = &wire.master_port {
        write_wire_port(writer, master_element(revision), port, revision)?;
    }
    if let Some(port) = &wire.slave_port {
        write_wire_port(writer, slave_element(revision), port, revision)?;
    }

    writer.optional_element("ipxact:defaultValue", &wire.default_value)?;
    if wire.requires_driver {
        let driver_type = if wire.driver_type.is_empty() {
            "any"
        } else {
            wire.driver_type.as_str()
        };
        writer.text_element_with("ipxact:requiresDriver", &[("driverType", driver_type)], "true")?;
    }
    writer.end("ipxact:wire")
}

fn write_transactional_port<W: Write>(
    writer: &mut Writer<W>,
    element: &str,
    port: &TransactionalPort,
) -> XmlResult<()> {
    writer.start(element)?;
    if element == "ipxact:onSystem" {
        writer.text_element("ipxact:group", &port.group)?;
    }
    writer.optional_element("ipxact:presence", &port.presence)?;
    writer.optional_element("ipxact:initiative", &port.initiative)?;
    if !port.custom_kind.is_empty() {
        writer.text_element_with("ipxact:kind", &[("custom", port.custom_kind.as_str())], &port.kind)?;
    } else {
        writer.optional_element("ipxact:kind", &port.kind)?;
    }
    writer.optional_element("ipxact:busWidth", &port.bus_width)?;
    writer.end(element)
}

pub fn write_transactional_abstraction<W: Write>(
    writer: &mut Writer<W>,
    transactional: &TransactionalAbstraction,
    revision: Revision,
) -> XmlResult<()> {
    writer.start("ipxact:transactional")?;
    write_qualifier(writer, &transactional.qualifier)?;
    for port in &transactional.system_ports {
        write_transactional_port(writer, "ipxact:onSystem", port)?;
    }
    if let Some(port) = &transactional.master_port {
        write_transactional_port(writer, master_element(revision), port)?;
    }
    if let Some(port) = &transactional.slave_port {
        write_transactional_port(writer, slave_element(revision), port)?;
    }
    writer.end("ipxact:transactional")
}

/// Writes a logical `ipxact:port` of an abstraction definition.
pub fn write_port_abstraction<W: Write>(
    writer: &mut Writer<W>,
    port: &PortAbstraction,
    revision: Revision,
) -> XmlResult<()> {
    let group = &port.name_group;

    writer.start("ipxact:port")?;
    write_is_present(writer, &port.is_present, revision)?;
    writer.text_element("ipxact:logicalName", &group.name)?;
    writer.optional_element("ipxact:displayName", &group.display_name)?;
    if revision.is_std22() {
        writer.optional_element("ipxact:shortDescription", &group.short_description)?;
    }
    writer.optional_element("ipxact:description", &group.description)?;
    if revision.is_std22() && port.match_ {
        writer.text_element("ipxact:match", "true")?;
    }

    if let Some(wire) = &port.wire {
        write_wire_abstraction(writer, wire, revision)?;
    } else if let Some(transactional) = &port.transactional {
        write_transactional_abstraction(writer, transactional, revision)?;
    }

    super::common::write_vendor_extensions(writer, &port.vendor_extensions)?;
    writer.end("ipxact:port")
}

fn write_assertions<W: Write>(
    writer: &mut Writer<W>,
    assertions: &[Assertion],
    revision: Revision,
) -> XmlResult<()> {
    if assertions.is_empty() {
        return Ok(());
    }
    writer.start("ipxact:assertions")?;
    for assertion in assertions {
        writer.start("ipxact:assertion")?;
        write_name_group(writer, &assertion.name_group, revision)?;
        writer.text_element("ipxact:assert", &assertion.assert)?;
        writer.end("ipxact:assertion")?;
    }
    writer.end("ipxact:assertions")
}

/// Writes the `ipxact:abstractionDefinition` root with its top comments.
pub fn write_abstraction_definition<W: Write>(
    writer: &mut Writer<W>,
    definition: &AbstractionDefinition,
) -> XmlResult<()> {
    let revision = definition.revision;
    let group = &definition.name_group;

    write_document_start(writer, ROOT, revision, &definition.top_comments)?;
    write_vlnv_elements(writer, &definition.vlnv)?;
    if revision.is_std22() {
        writer.optional_element("ipxact:displayName", &group.display_name)?;
        writer.optional_element("ipxact:shortDescription", &group.short_description)?;
        writer.optional_element("ipxact:description", &group.description)?;
    }

    write_vlnv_attributes(writer, "ipxact:busType", &definition.bus_type)?;
    if let Some(extends) = &definition.extends {
        write_vlnv_attributes(writer, "ipxact:extends", extends)?;
    }

    if !definition.ports.is_empty() {
        writer.start("ipxact:ports")?;
        for port in &definition.ports {
            write_port_abstraction(writer, port, revision)?;
        }
        writer.end("ipxact:ports")?;
    }

    if revision.is_std22() {
        write_choices(writer, &definition.choices)?;
    } else {
        writer.optional_element("ipxact:description", &group.description)?;
    }
    write_parameters(writer, &definition.parameters, revision)?;
    write_assertions(writer, &definition.assertions, revision)?;

    if !definition.kactus_version.is_empty() || !definition.vendor_extensions.is_empty() {
        writer.start("ipxact:vendorExtensions")?;
        write_kactus_version(writer, &definition.kactus_version)?;
        for extension in &definition.vendor_extensions {
            writer.extension(extension)?;
        }
        writer.end("ipxact:vendorExtensions")?;
    }
    writer.end(ROOT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::write_fragment;
    use crate::ToXmlConfig;
    use ipxact_core::model::QualifierAttribute;
    use ipxact_core::model::QualifierType;
    use ipxact_core::{DocumentType, VendorExtension, Vlnv};

    const HEADER14: &str = "<ipxact:abstractionDefinition \
        xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
        xmlns:ipxact=\"http://www.accellera.org/XMLSchema/IPXACT/1685-2014\" \
        xmlns:kactus2=\"http://kactus2.cs.tut.fi\" \
        xsi:schemaLocation=\"http://www.accellera.org/XMLSchema/IPXACT/1685-2014 \
        http://www.accellera.org/XMLSchema/IPXACT/1685-2014/index.xsd\">";

    fn definition(revision: Revision) -> AbstractionDefinition {
        let vlnv = Vlnv::new(DocumentType::AbstractionDefinition, "TUT", "TestLibrary", "TestAbsDef", "1.0");
        let mut definition = AbstractionDefinition::new(vlnv, revision);
        definition.bus_type = Vlnv::new(DocumentType::BusDefinition, "TUT", "TestLibrary", "TargetBusDef", "1.0");
        definition
    }

    fn render(definition: &AbstractionDefinition) -> String {
        write_fragment(&ToXmlConfig::compact(), |w| write_abstraction_definition(w, definition)).unwrap()
    }

    const VLNV_AND_BUS: &str = "<ipxact:vendor>TUT</ipxact:vendor>\
        <ipxact:library>TestLibrary</ipxact:library>\
        <ipxact:name>TestAbsDef</ipxact:name>\
        <ipxact:version>1.0</ipxact:version>\
        <ipxact:busType vendor=\"TUT\" library=\"TestLibrary\" name=\"TargetBusDef\" version=\"1.0\"/>";

    #[test]
    fn test_minimal_definition_with_description() {
        let mut definition = definition(Revision::Std14);
        definition.name_group.description = "This is a description".to_string();

        assert_eq!(
            render(&definition),
            format!(
                "{}{}<ipxact:description>This is a description</ipxact:description>\
                 </ipxact:abstractionDefinition>",
                HEADER14, VLNV_AND_BUS
            )
        );
    }

    #[test]
    fn test_wire_port_with_qualifier_and_extension() {
        let mut definition = definition(Revision::Std14);
        let mut port = PortAbstraction::new("testPort");
        port.is_present = "1".to_string();
        port.name_group.display_name = "test wire port".to_string();
        port.name_group.description = "This is a description for testPort".to_string();
        port.wire = Some(WireAbstraction {
            qualifier: Qualifier::new().with_type(QualifierType::Data),
            default_value: "0".to_string(),
            ..WireAbstraction::default()
        });
        port.vendor_extensions.push(
            VendorExtension::new("kactus2:testExtension")
                .with_text("testValue")
                .with_attribute("vendorAttribute", "extension"),
        );
        definition.ports.push(port);

        let expected = format!(
            "{}{}<ipxact:ports><ipxact:port>\
                <ipxact:isPresent>1</ipxact:isPresent>\
                <ipxact:logicalName>testPort</ipxact:logicalName>\
                <ipxact:displayName>test wire port</ipxact:displayName>\
                <ipxact:description>This is a description for testPort</ipxact:description>\
                <ipxact:wire>\
                    <ipxact:qualifier><ipxact:isData>true</ipxact:isData></ipxact:qualifier>\
                    <ipxact:defaultValue>0</ipxact:defaultValue>\
                </ipxact:wire>\
                <ipxact:vendorExtensions>\
                    <kactus2:testExtension vendorAttribute=\"extension\">testValue</kactus2:testExtension>\
                </ipxact:vendorExtensions>\
             </ipxact:port></ipxact:ports></ipxact:abstractionDefinition>",
            HEADER14, VLNV_AND_BUS
        );
        assert_eq!(render(&definition), expected);
    }

    #[test]
    fn test_wire_port_directions_and_driver() {
        let mut definition = definition(Revision::Std14);
        let mut port = PortAbstraction::new("reset");
        port.wire = Some(WireAbstraction {
            qualifier: Qualifier::new().with_type(QualifierType::Reset),
            system_ports: vec![WirePort {
                group: "system1".to_string(),
                presence: "required".to_string(),
                width: "1".to_string(),
                direction: "inout".to_string(),
                ..WirePort::default()
            }],
            master_port: Some(WirePort {
                presence: "optional".to_string(),
                width: "expression".to_string(),
                direction: "in".to_string(),
                ..WirePort::default()
            }),
            slave_port: Some(WirePort {
                presence: "illegal".to_string(),
                direction: "out".to_string(),
                ..WirePort::default()
            }),
            requires_driver: true,
            driver_type: "singleShot".to_string(),
            ..WireAbstraction::default()
        });
        definition.ports.push(port);

        let xml = render(&definition);
        assert!(xml.contains(
            "<ipxact:wire>\
                <ipxact:qualifier><ipxact:isReset>true</ipxact:isReset></ipxact:qualifier>\
                <ipxact:onSystem>\
                    <ipxact:group>system1</ipxact:group>\
                    <ipxact:presence>required</ipxact:presence>\
                    <ipxact:width>1</ipxact:width>\
                    <ipxact:direction>inout</ipxact:direction>\
                </ipxact:onSystem>\
                <ipxact:onMaster>\
                    <ipxact:presence>optional</ipxact:presence>\
                    <ipxact:width>expression</ipxact:width>\
                    <ipxact:direction>in</ipxact:direction>\
                </ipxact:onMaster>\
                <ipxact:onSlave>\
                    <ipxact:presence>illegal</ipxact:presence>\
                    <ipxact:direction>out</ipxact:direction>\
                </ipxact:onSlave>\
                <ipxact:requiresDriver driverType=\"singleShot\">true</ipxact:requiresDriver>\
             </ipxact:wire>"
        ));
    }

    #[test]
    fn test_transactional_custom_kind() {
        let mut definition = definition(Revision::Std14);
        let mut port = PortAbstraction::new("testPort");
        port.transactional = Some(TransactionalAbstraction {
            master_port: Some(TransactionalPort {
                presence: "optional".to_string(),
                initiative: "requires".to_string(),
                kind: "tlm_port".to_string(),
                bus_width: "32".to_string(),
                ..TransactionalPort::default()
            }),
            slave_port: Some(TransactionalPort {
                presence: "optional".to_string(),
                initiative: "provides".to_string(),
                kind: "custom".to_string(),
                custom_kind: "customKind".to_string(),
                ..TransactionalPort::default()
            }),
            ..TransactionalAbstraction::default()
        });
        definition.ports.push(port);

        let xml = render(&definition);
        assert!(xml.contains(
            "<ipxact:onMaster>\
                <ipxact:presence>optional</ipxact:presence>\
                <ipxact:initiative>requires</ipxact:initiative>\
                <ipxact:kind>tlm_port</ipxact:kind>\
                <ipxact:busWidth>32</ipxact:busWidth>\
             </ipxact:onMaster>\
             <ipxact:onSlave>\
                <ipxact:presence>optional</ipxact:presence>\
                <ipxact:initiative>provides</ipxact:initiative>\
                <ipxact:kind custom=\"customKind\">custom</ipxact:kind>\
             </ipxact:onSlave>"
        ));
    }

    #[test]
    fn test_std22_uses_initiator_and_target() {
        let mut definition = definition(Revision::Std22);
        let mut port = PortAbstraction::new("clk");
        port.match_ = true;
        port.wire = Some(WireAbstraction {
            master_port: Some(WirePort {
                width: "1".to_string(),
                all_bits: true,
                ..WirePort::default()
            }),
            slave_port: Some(WirePort::default()),
            ..WireAbstraction::default()
        });
        definition.ports.push(port);

        let xml = render(&definition);
        assert!(xml.contains("<ipxact:logicalName>clk</ipxact:logicalName><ipxact:match>true</ipxact:match>"));
        assert!(xml.contains("<ipxact:onInitiator><ipxact:width allBits=\"true\">1</ipxact:width></ipxact:onInitiator>"));
        assert!(xml.contains("<ipxact:onTarget></ipxact:onTarget>"));
        assert!(!xml.contains("onMaster"));
    }

    #[test]
    fn test_qualifier_attributes() {
        let mut qualifier = Qualifier::new()
            .with_type(QualifierType::Reset)
            .with_type(QualifierType::PowerEnable);
        qualifier.set_attribute(QualifierAttribute::ResetLevel, "high");
        qualifier.set_attribute(QualifierAttribute::PowerDomainReference, "pd0");

        let xml = write_fragment(&ToXmlConfig::compact(), |w| write_qualifier(w, &qualifier)).unwrap();
        assert_eq!(
            xml,
            "<ipxact:qualifier>\
                <ipxact:isReset level=\"high\">true</ipxact:isReset>\
                <ipxact:isPowerEn powerDomainRef=\"pd0\">true</ipxact:isPowerEn>\
             </ipxact:qualifier>"
        );
    }

    #[test]
    fn test_version_is_first_vendor_extension() {
        let mut definition = definition(Revision::Std14);
        definition.kactus_version = "3.0.0".to_string();
        definition.vendor_extensions.push(VendorExtension::new("kactus2:other").with_text("x"));

        assert!(render(&definition).ends_with(
            "<ipxact:vendorExtensions>\
                <kactus2:version>3.0.0</kactus2:version>\
                <kactus2:other>x</kactus2:other>\
             </ipxact:vendorExtensions></ipxact:abstractionDefinition>"
        ));
    }

    #[test]
    fn test_assertions() {
        let mut definition = definition(Revision::Std14);
        let mut assertion = Assertion::default();
        assertion.name_group.name = "testAssertion".to_string();
        assertion.name_group.display_name = "Display name for assertion.".to_string();
        assertion.assert = "1".to_string();
        definition.assertions.push(assertion);

        assert!(render(&definition).contains(
            "<ipxact:assertions><ipxact:assertion>\
                <ipxact:name>testAssertion</ipxact:name>\
                <ipxact:displayName>Display name for assertion.</ipxact:displayName>\
                <ipxact:assert>1</ipxact:assert>\
             </ipxact:assertion></ipxact:assertions>"
        ));
    }
}
