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

//! Bus definition writer.

use super::common::{
    write_choices, write_document_start, write_kactus_version, write_parameters,
    write_vlnv_attributes, write_vlnv_elements,
};
use crate::emit::XmlWriterExt;
use crate::error::XmlResult;
use ipxact_core::model::BusDefinition;
use quick_xml::Writer;
use std::io::Write;

const ROOT: &str = "ipxact:busDefinition";

/// Writes the `ipxact:busDefinition` root with its top comments.
pub fn write_bus_definition<W: Write>(
    writer: &mut Writer<W>,
    definition: &BusDefinition,
) -> XmlResult<()> {
    let revision = definition.revision;
    let group = &definition.name_group;
    let std22 = revision.is_std22();

    write_document_start(writer, ROOT, revision, &definition.top_comments)?;
    write_vlnv_elements(writer, &definition.vlnv)?;
    if std22 {
        writer.optional_element("ipxact:displayName", &group.display_name)?;
        writer.optional_element("ipxact:shortDescription", &group.short_description)?;
        writer.optional_element("ipxact:description", &group.description)?;
    }

    writer.text_element("ipxact:directConnection", &definition.direct_connection)?;
    writer.optional_element("ipxact:broadcast", &definition.broadcast)?;
    writer.text_element("ipxact:isAddressable", &definition.is_addressable)?;
    if let Some(extends) = &definition.extends {
        write_vlnv_attributes(writer, "ipxact:extends", extends)?;
    }

    let (max_initiators, max_targets) = if std22 {
        ("ipxact:maxInitiators", "ipxact:maxTargets")
    } else {
        ("ipxact:maxMasters", "ipxact:maxSlaves")
    };
    writer.optional_element(max_initiators, &definition.max_initiators)?;
    writer.optional_element(max_targets, &definition.max_targets)?;

    if !definition.system_group_names.is_empty() {
        writer.start("ipxact:systemGroupNames")?;
        for name in &definition.system_group_names {
            writer.text_element("ipxact:systemGroupName", name)?;
        }
        writer.end("ipxact:systemGroupNames")?;
    }

    if std22 {
        write_choices(writer, &definition.choices)?;
    } else {
        writer.optional_element("ipxact:description", &group.description)?;
    }
    write_parameters(writer, &definition.parameters, revision)?;

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
    use ipxact_core::model::Parameter;
    use ipxact_core::{DocumentType, Revision, Vlnv};

    fn bus(revision: Revision) -> BusDefinition {
        let vlnv = Vlnv::new(DocumentType::BusDefinition, "TUT", "TestLibrary", "TestBus", "1.0");
        let mut bus = BusDefinition::new(vlnv, revision);
        bus.direct_connection = "true".to_string();
        bus.is_addressable = "true".to_string();
        bus
    }

    fn body(bus: &BusDefinition) -> String {
        let xml = write_fragment(&ToXmlConfig::compact(), |w| write_bus_definition(w, bus)).unwrap();
        let start = xml.find("<ipxact:vendor>").unwrap();
        xml[start..].to_string()
    }

    #[test]
    fn test_system_group_names() {
        let mut bus = bus(Revision::Std14);
        bus.system_group_names = vec!["system1".into(), "system2".into(), "system3".into()];

        assert_eq!(
            body(&bus),
            "<ipxact:vendor>TUT</ipxact:vendor>\
             <ipxact:library>TestLibrary</ipxact:library>\
             <ipxact:name>TestBus</ipxact:name>\
             <ipxact:version>1.0</ipxact:version>\
             <ipxact:directConnection>true</ipxact:directConnection>\
             <ipxact:isAddressable>true</ipxact:isAddressable>\
             <ipxact:systemGroupNames>\
                <ipxact:systemGroupName>system1</ipxact:systemGroupName>\
                <ipxact:systemGroupName>system2</ipxact:systemGroupName>\
                <ipxact:systemGroupName>system3</ipxact:systemGroupName>\
             </ipxact:systemGroupNames>\
             </ipxact:busDefinition>"
        );
    }

    #[test]
    fn test_broadcast_and_limits() {
        let mut bus = bus(Revision::Std14);
        bus.broadcast = "true".to_string();
        bus.max_initiators = "1".to_string();
        bus.max_targets = "4".to_string();

        let xml = body(&bus);
        assert!(xml.contains(
            "<ipxact:directConnection>true</ipxact:directConnection>\
             <ipxact:broadcast>true</ipxact:broadcast>\
             <ipxact:isAddressable>true</ipxact:isAddressable>\
             <ipxact:maxMasters>1</ipxact:maxMasters>\
             <ipxact:maxSlaves>4</ipxact:maxSlaves>"
        ));
    }

    #[test]
    fn test_std22_ordering() {
        let mut bus = bus(Revision::Std22);
        bus.name_group.description = "desc".to_string();
        bus.max_initiators = "2".to_string();
        bus.parameters.push(Parameter::new("p", "1"));
        bus.kactus_version = "3.13.0".to_string();

        let xml = body(&bus);
        assert!(xml.starts_with(
            "<ipxact:vendor>TUT</ipxact:vendor>\
             <ipxact:library>TestLibrary</ipxact:library>\
             <ipxact:name>TestBus</ipxact:name>\
             <ipxact:version>1.0</ipxact:version>\
             <ipxact:description>desc</ipxact:description>\
             <ipxact:directConnection>true</ipxact:directConnection>"
        ));
        assert!(xml.contains("<ipxact:maxInitiators>2</ipxact:maxInitiators>"));
        assert!(xml.ends_with(
            "</ipxact:parameters>\
             <ipxact:vendorExtensions><kactus2:version>3.13.0</kactus2:version></ipxact:vendorExtensions>\
             </ipxact:busDefinition>"
        ));
    }

    #[test]
    fn test_extends() {
        let mut bus = bus(Revision::Std14);
        bus.extends = Some(Vlnv::new(DocumentType::BusDefinition, "TUT", "TestLibrary", "base", "1.0"));
        assert!(body(&bus).contains(
            "<ipxact:isAddressable>true</ipxact:isAddressable>\
             <ipxact:extends vendor=\"TUT\" library=\"TestLibrary\" name=\"base\" version=\"1.0\"/>"
        ));
    }
}
