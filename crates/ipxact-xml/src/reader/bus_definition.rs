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

//! Bus definition reader.

use super::common::{read_choices, read_name_group, read_parameters, read_vlnv_elements, read_vlnv_reference};
use crate::dom::{child_text, nested, take_extension, text, top_comments, vendor_extensions};
use ipxact_core::model::BusDefinition;
use ipxact_core::{DocumentType, Revision};
use roxmltree::Node;

/// Reads an `ipxact:busDefinition` root element.
pub fn read_bus_definition(root: Node<'_, '_>, revision: Revision) -> BusDefinition {
    let mut extensions = vendor_extensions(root);
    let kactus_version = take_extension(&mut extensions, "kactus2:version")
        .map(|v| v.text)
        .unwrap_or_default();

    let (max_initiators, max_targets) = if revision.is_std22() {
        ("ipxact:maxInitiators", "ipxact:maxTargets")
    } else {
        ("ipxact:maxMasters", "ipxact:maxSlaves")
    };

    BusDefinition {
        vlnv: read_vlnv_elements(root, DocumentType::BusDefinition),
        revision,
        name_group: read_name_group(root),
        direct_connection: child_text(root, "ipxact:directConnection"),
        broadcast: child_text(root, "ipxact:broadcast"),
        is_addressable: child_text(root, "ipxact:isAddressable"),
        extends: read_vlnv_reference(root, "ipxact:extends", DocumentType::BusDefinition),
        max_initiators: child_text(root, max_initiators),
        max_targets: child_text(root, max_targets),
        system_group_names: nested(root, "ipxact:systemGroupNames", "ipxact:systemGroupName")
            .into_iter()
            .map(text)
            .collect(),
        choices: read_choices(root),
        parameters: read_parameters(root, revision),
        vendor_extensions: extensions,
        kactus_version,
        top_comments: top_comments(root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bus_definition() {
        let xml = r#"<?xml version="1.0"?>
<ipxact:busDefinition xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2014"
    xmlns:kactus2="http://kactus2.cs.tut.fi">
    <ipxact:vendor>TUT</ipxact:vendor>
    <ipxact:library>TestLibrary</ipxact:library>
    <ipxact:name>TestBus</ipxact:name>
    <ipxact:version>1.0</ipxact:version>
    <ipxact:directConnection>true</ipxact:directConnection>
    <ipxact:isAddressable>false</ipxact:isAddressable>
    <ipxact:maxMasters>1</ipxact:maxMasters>
    <ipxact:systemGroupNames>
        <ipxact:systemGroupName>system1</ipxact:systemGroupName>
        <ipxact:systemGroupName>system2</ipxact:systemGroupName>
    </ipxact:systemGroupNames>
    <ipxact:parameters>
        <ipxact:parameter parameterId="id" type="int">
            <ipxact:name>WIDTH</ipxact:name>
            <ipxact:value>8</ipxact:value>
        </ipxact:parameter>
    </ipxact:parameters>
    <ipxact:vendorExtensions>
        <kactus2:version>3.0.0</kactus2:version>
    </ipxact:vendorExtensions>
</ipxact:busDefinition>"#;

        let doc = roxmltree::Document::parse(xml).unwrap();
        let bus = read_bus_definition(doc.root_element(), Revision::Std14);

        assert_eq!(bus.vlnv.name, "TestBus");
        assert_eq!(bus.direct_connection, "true");
        assert_eq!(bus.is_addressable, "false");
        assert_eq!(bus.max_initiators, "1");
        assert_eq!(bus.max_targets, "");
        assert_eq!(bus.system_group_names, vec!["system1", "system2"]);
        assert_eq!(bus.parameters[0].value, "8");
        assert_eq!(bus.kactus_version, "3.0.0");
        assert!(bus.vendor_extensions.is_empty());
    }
}
