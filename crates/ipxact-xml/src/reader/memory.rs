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

//! Memory map, address block, register and field readers.

use super::common::{read_is_present, read_name_group, read_parameters};
use crate::dom::{
    attribute, child, child_text, children, is_element, nested, skip_unrecognised, text,
    vendor_extensions,
};
use ipxact_core::model::{
    AccessPolicy, AddressBlockData, BlockKind, EnumeratedValue, Field, FieldReset, MemoryBlock,
    MemoryMap, ModeRef, Register, SubspaceMapData,
};
use ipxact_core::Revision;
use roxmltree::Node;

fn read_access_policy(node: Node<'_, '_>) -> AccessPolicy {
    AccessPolicy {
        mode_refs: children(node, "ipxact:modeRef")
            .map(|m| ModeRef {
                reference: text(m),
                priority: attribute(m, "priority"),
            })
            .collect(),
        access: child_text(node, "ipxact:access"),
    }
}

fn read_access_policies(node: Node<'_, '_>) -> Vec<AccessPolicy> {
    nested(node, "ipxact:accessPolicies", "ipxact:accessPolicy")
        .into_iter()
        .map(read_access_policy)
        .collect()
}

const MEMORY_MAP_CHILDREN: &[&str] = &[
    "name",
    "displayName",
    "shortDescription",
    "description",
    "isPresent",
    "addressBlock",
    "subspaceMap",
    "addressUnitBits",
    "shared",
    "vendorExtensions",
];

const ADDRESS_BLOCK_CHILDREN: &[&str] = &[
    "name",
    "displayName",
    "shortDescription",
    "description",
    "isPresent",
    "baseAddress",
    "typeIdentifier",
    "range",
    "width",
    "usage",
    "volatile",
    "access",
    "accessPolicies",
    "parameters",
    "register",
    "vendorExtensions",
];

/// Reads an `ipxact:memoryMap` or `ipxact:localMemoryMap` element.
pub fn read_memory_map(node: Node<'_, '_>, revision: Revision) -> MemoryMap {
    skip_unrecognised(node, MEMORY_MAP_CHILDREN);
    MemoryMap {
        name_group: read_name_group(node),
        is_present: read_is_present(node),
        blocks: read_memory_blocks(node, revision),
        address_unit_bits: child_text(node, "ipxact:addressUnitBits"),
        shared: child_text(node, "ipxact:shared"),
        vendor_extensions: vendor_extensions(node),
    }
}

fn read_memory_blocks(node: Node<'_, '_>, revision: Revision) -> Vec<MemoryBlock> {
    node.children()
        .filter(|c| is_element(*c, "ipxact:addressBlock") || is_element(*c, "ipxact:subspaceMap"))
        .map(|c| read_memory_block(c, revision))
        .collect()
}

/// Reads an `ipxact:addressBlock` or `ipxact:subspaceMap` element.
pub fn read_memory_block(node: Node<'_, '_>, revision: Revision) -> MemoryBlock {
    let kind = if is_element(node, "ipxact:subspaceMap") {
        let initiator = match revision {
            Revision::Std14 => "masterRef",
            Revision::Std22 => "initiatorRef",
        };
        BlockKind::SubspaceMap(SubspaceMapData {
            initiator_ref: attribute(node, initiator),
            segment_ref: attribute(node, "segmentRef"),
        })
    } else {
        skip_unrecognised(node, ADDRESS_BLOCK_CHILDREN);
        BlockKind::AddressBlock(AddressBlockData {
            type_identifier: child_text(node, "ipxact:typeIdentifier"),
            range: child_text(node, "ipxact:range"),
            width: child_text(node, "ipxact:width"),
            usage: child_text(node, "ipxact:usage"),
            volatile: child_text(node, "ipxact:volatile"),
            access: child_text(node, "ipxact:access"),
            access_policies: read_access_policies(node),
            registers: children(node, "ipxact:register")
                .map(|r| read_register(r, revision))
                .collect(),
        })
    };

    MemoryBlock {
        name_group: read_name_group(node),
        is_present: read_is_present(node),
        base_address: child_text(node, "ipxact:baseAddress"),
        parameters: read_parameters(node, revision),
        vendor_extensions: vendor_extensions(node),
        kind,
    }
}

pub fn read_register(node: Node<'_, '_>, revision: Revision) -> Register {
    Register {
        name_group: read_name_group(node),
        is_present: read_is_present(node),
        dimension: child_text(node, "ipxact:dim"),
        address_offset: child_text(node, "ipxact:addressOffset"),
        type_identifier: child_text(node, "ipxact:typeIdentifier"),
        size: child_text(node, "ipxact:size"),
        volatile: child_text(node, "ipxact:volatile"),
        access: child_text(node, "ipxact:access"),
        access_policies: read_access_policies(node),
        fields: children(node, "ipxact:field")
            .map(|f| read_field(f, revision))
            .collect(),
        parameters: read_parameters(node, revision),
        vendor_extensions: vendor_extensions(node),
    }
}

pub fn read_field(node: Node<'_, '_>, revision: Revision) -> Field {
    let mut field = Field {
        name_group: read_name_group(node),
        field_id: attribute(node, "fieldID"),
        is_present: read_is_present(node),
        bit_offset: child_text(node, "ipxact:bitOffset"),
        resets: nested(node, "ipxact:resets", "ipxact:reset")
            .into_iter()
            .map(|r| FieldReset {
                reset_type_ref: attribute(r, "resetTypeRef"),
                value: child_text(r, "ipxact:value"),
                mask: child_text(r, "ipxact:mask"),
            })
            .collect(),
        type_identifier: child_text(node, "ipxact:typeIdentifier"),
        bit_width: child_text(node, "ipxact:bitWidth"),
        volatile: child_text(node, "ipxact:volatile"),
        enumerated_values: nested(node, "ipxact:enumeratedValues", "ipxact:enumeratedValue")
            .into_iter()
            .map(|e| EnumeratedValue {
                name_group: read_name_group(e),
                usage: attribute(e, "usage"),
                value: child_text(e, "ipxact:value"),
            })
            .collect(),
        parameters: read_parameters(node, revision),
        vendor_extensions: vendor_extensions(node),
        ..Field::default()
    };

    match revision {
        Revision::Std14 => {
            field.access = child_text(node, "ipxact:access");
            field.modified_write_value = child_text(node, "ipxact:modifiedWriteValue");
        }
        Revision::Std22 => {
            let policies = nested(node, "ipxact:fieldAccessPolicies", "ipxact:fieldAccessPolicy");
            field.modified_write_value = policies
                .iter()
                .find_map(|p| child(*p, "ipxact:modifiedWriteValue"))
                .map(text)
                .unwrap_or_default();
            field.access_policies = policies
                .into_iter()
                .map(read_access_policy)
                .filter(|p| !p.mode_refs.is_empty() || !p.access.is_empty())
                .collect();
        }
    }

    field
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS14: &str = r#"xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2014""#;
    const NS22: &str = r#"xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2022""#;

    #[test]
    fn test_read_memory_map_with_blocks_in_order() {
        let xml = format!(
            r#"<ipxact:memoryMap {}>
                <ipxact:name>map</ipxact:name>
                <ipxact:isPresent>1</ipxact:isPresent>
                <ipxact:addressBlock>
                    <ipxact:name>regs</ipxact:name>
                    <ipxact:baseAddress>'h1000</ipxact:baseAddress>
                    <ipxact:range>16</ipxact:range>
                    <ipxact:width>32</ipxact:width>
                    <ipxact:usage>register</ipxact:usage>
                    <ipxact:access>read-write</ipxact:access>
                    <ipxact:register>
                        <ipxact:name>ctrl</ipxact:name>
                        <ipxact:addressOffset>0</ipxact:addressOffset>
                        <ipxact:size>32</ipxact:size>
                        <ipxact:field fieldID="f0">
                            <ipxact:name>enable</ipxact:name>
                            <ipxact:bitOffset>0</ipxact:bitOffset>
                            <ipxact:resets>
                                <ipxact:reset resetTypeRef="soft"><ipxact:value>0</ipxact:value><ipxact:mask>1</ipxact:mask></ipxact:reset>
                            </ipxact:resets>
                            <ipxact:bitWidth>1</ipxact:bitWidth>
                            <ipxact:access>read-only</ipxact:access>
                            <ipxact:enumeratedValues>
                                <ipxact:enumeratedValue usage="read"><ipxact:name>on</ipxact:name><ipxact:value>1</ipxact:value></ipxact:enumeratedValue>
                            </ipxact:enumeratedValues>
                            <ipxact:modifiedWriteValue>oneToClear</ipxact:modifiedWriteValue>
                        </ipxact:field>
                    </ipxact:register>
                </ipxact:addressBlock>
                <ipxact:subspaceMap masterRef="cpu" segmentRef="seg">
                    <ipxact:name>window</ipxact:name>
                    <ipxact:baseAddress>0</ipxact:baseAddress>
                </ipxact:subspaceMap>
                <ipxact:addressUnitBits>8</ipxact:addressUnitBits>
                <ipxact:shared>no</ipxact:shared>
            </ipxact:memoryMap>"#,
            NS14
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let map = read_memory_map(doc.root_element(), Revision::Std14);

        assert_eq!(map.name(), "map");
        assert_eq!(map.is_present, "1");
        assert_eq!(map.address_unit_bits, "8");
        assert_eq!(map.shared, "no");
        assert_eq!(map.blocks.len(), 2);

        let block = map.address_block("regs").unwrap();
        assert_eq!(block.range, "16");
        assert_eq!(block.usage, "register");
        assert_eq!(block.access, "read-write");

        let field = block.register("ctrl").unwrap().field("enable").unwrap();
        assert_eq!(field.field_id, "f0");
        assert_eq!(field.bit_width, "1");
        assert_eq!(field.resets[0].reset_type_ref, "soft");
        assert_eq!(field.resets[0].mask, "1");
        assert_eq!(field.access, "read-only");
        assert_eq!(field.enumerated_values[0].usage, "read");
        assert_eq!(field.enumerated_values[0].name_group.name, "on");
        assert_eq!(field.modified_write_value, "oneToClear");

        match &map.blocks[1].kind {
            BlockKind::SubspaceMap(data) => {
                assert_eq!(data.initiator_ref, "cpu");
                assert_eq!(data.segment_ref, "seg");
            }
            other => panic!("expected subspace map, got {:?}", other),
        }
    }

    #[test]
    fn test_unmodelled_children_are_skipped() {
        let xml = format!(
            r#"<ipxact:memoryMap {}>
                <ipxact:name>map</ipxact:name>
                <ipxact:bank bankAlignment="serial"><ipxact:name>b</ipxact:name></ipxact:bank>
                <ipxact:addressBlock>
                    <ipxact:name>regs</ipxact:name>
                    <ipxact:baseAddress>0</ipxact:baseAddress>
                    <ipxact:range>8</ipxact:range>
                    <ipxact:width>32</ipxact:width>
                    <ipxact:registerFile><ipxact:name>file</ipxact:name></ipxact:registerFile>
                    <ipxact:register>
                        <ipxact:name>ctrl</ipxact:name>
                        <ipxact:addressOffset>0</ipxact:addressOffset>
                        <ipxact:size>32</ipxact:size>
                    </ipxact:register>
                </ipxact:addressBlock>
            </ipxact:memoryMap>"#,
            NS14
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let root = doc.root_element();
        assert_eq!(skip_unrecognised(root, MEMORY_MAP_CHILDREN), 1);

        let map = read_memory_map(root, Revision::Std14);
        assert_eq!(map.blocks.len(), 1);
        let block = map.blocks[0].as_address_block().unwrap();
        assert_eq!(block.registers.len(), 1);
        assert_eq!(block.registers[0].name(), "ctrl");
    }

    #[test]
    fn test_read_field_access_policies() {
        let xml = format!(
            r#"<ipxact:field {}>
                <ipxact:name>f</ipxact:name>
                <ipxact:bitOffset>0</ipxact:bitOffset>
                <ipxact:bitWidth>4</ipxact:bitWidth>
                <ipxact:fieldAccessPolicies>
                    <ipxact:fieldAccessPolicy>
                        <ipxact:modeRef priority="0">normal</ipxact:modeRef>
                        <ipxact:access>read-write</ipxact:access>
                        <ipxact:modifiedWriteValue>clear</ipxact:modifiedWriteValue>
                    </ipxact:fieldAccessPolicy>
                </ipxact:fieldAccessPolicies>
            </ipxact:field>"#,
            NS22
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let field = read_field(doc.root_element(), Revision::Std22);

        assert_eq!(field.access_policies.len(), 1);
        assert_eq!(field.access_policies[0].access, "read-write");
        assert_eq!(field.access_policies[0].mode_refs[0].reference, "normal");
        assert_eq!(field.access_policies[0].mode_refs[0].priority, "0");
        assert_eq!(field.modified_write_value, "clear");
        assert!(field.access.is_empty());
    }
}
