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

//! Memory map, address block, register and field writers.

use super::common::{write_is_present, write_name_group, write_parameters, write_vendor_extensions};
use crate::emit::{present, XmlWriterExt};
use crate::error::XmlResult;
use ipxact_core::model::{
    AccessPolicy, AddressBlockData, BlockKind, Field, MemoryBlock, MemoryMap, Register,
};
use ipxact_core::Revision;
use quick_xml::Writer;
use std::io::Write;

fn write_policy_body<W: Write>(writer: &mut Writer<W>, policy: &AccessPolicy) -> XmlResult<()> {
    for mode_ref in &policy.mode_refs {
        writer.text_element_with(
            "ipxact:modeRef",
            &present(&[("priority", mode_ref.priority.as_str())]),
            &mode_ref.reference,
        )?;
    }
    writer.optional_element("ipxact:access", &policy.access)
}

/// `access` for 2014, `accessPolicies` for 2022.
fn write_access<W: Write>(
    writer: &mut Writer<W>,
    access: &str,
    policies: &[AccessPolicy],
    revision: Revision,
) -> XmlResult<()> {
    match revision {
        Revision::Std14 => writer.optional_element("ipxact:access", access),
        Revision::Std22 => {
            if policies.is_empty() {
                return Ok(());
            }
            writer.start("ipxact:accessPolicies")?;
            for policy in policies {
                writer.start("ipxact:accessPolicy")?;
                write_policy_body(writer, policy)?;
                writer.end("ipxact:accessPolicy")?;
            }
            writer.end("ipxact:accessPolicies")
        }
    }
}

/// Writes an `ipxact:memoryMap` element.
pub fn write_memory_map<W: Write>(
    writer: &mut Writer<W>,
    map: &MemoryMap,
    revision: Revision,
) -> XmlResult<()> {
    writer.start("ipxact:memoryMap")?;
    write_name_group(writer, &map.name_group, revision)?;
    write_is_present(writer, &map.is_present, revision)?;
    for block in &map.blocks {
        write_memory_block(writer, block, revision)?;
    }
    writer.optional_element("ipxact:addressUnitBits", &map.address_unit_bits)?;
    writer.optional_element("ipxact:shared", &map.shared)?;
    write_vendor_extensions(writer, &map.vendor_extensions)?;
    writer.end("ipxact:memoryMap")
}

/// Writes the `ipxact:localMemoryMap` of an address space.
pub(crate) fn write_local_memory_map<W: Write>(
    writer: &mut Writer<W>,
    map: &MemoryMap,
    revision: Revision,
) -> XmlResult<()> {
    writer.start("ipxact:localMemoryMap")?;
    write_name_group(writer, &map.name_group, revision)?;
    write_is_present(writer, &map.is_present, revision)?;
    for block in &map.blocks {
        write_memory_block(writer, block, revision)?;
    }
    writer.end("ipxact:localMemoryMap")
}

/// Writes an `ipxact:addressBlock` or `ipxact:subspaceMap` element.
pub fn write_memory_block<W: Write>(
    writer: &mut Writer<W>,
    block: &MemoryBlock,
    revision: Revision,
) -> XmlResult<()> {
    match &block.kind {
        BlockKind::AddressBlock(data) => write_address_block(writer, block, data, revision),
        BlockKind::SubspaceMap(data) => {
            let initiator = match revision {
                Revision::Std14 => "masterRef",
                Revision::Std22 => "initiatorRef",
            };
            let attributes = present(&[
                (initiator, data.initiator_ref.as_str()),
                ("segmentRef", data.segment_ref.as_str()),
            ]);
            writer.start_with("ipxact:subspaceMap", &attributes)?;
            write_name_group(writer, &block.name_group, revision)?;
            write_is_present(writer, &block.is_present, revision)?;
            writer.text_element("ipxact:baseAddress", &block.base_address)?;
            write_parameters(writer, &block.parameters, revision)?;
            write_vendor_extensions(writer, &block.vendor_extensions)?;
            writer.end("ipxact:subspaceMap")
        }
    }
}

fn write_address_block<W: Write>(
    writer: &mut Writer<W>,
    block: &MemoryBlock,
    data: &AddressBlockData,
    revision: Revision,
) -> XmlResult<()> {
    writer.start("ipxact:addressBlock")?;
    write_name_group(writer, &block.name_group, revision)?;
    write_is_present(writer, &block.is_present, revision)?;
    writer.text_element("ipxact:baseAddress", &block.base_address)?;
    writer.optional_element("ipxact:typeIdentifier", &data.type_identifier)?;
    writer.text_element("ipxact:range", &data.range)?;
    writer.text_element("ipxact:width", &data.width)?;
    writer.optional_element("ipxact:usage", &data.usage)?;
    writer.optional_element("ipxact:volatile", &data.volatile)?;
    write_access(writer, &data.access, &data.access_policies, revision)?;
    write_parameters(writer, &block.parameters, revision)?;
    for register in &data.registers {
        write_register(writer, register, revision)?;
    }
    write_vendor_extensions(writer, &block.vendor_extensions)?;
    writer.end("ipxact:addressBlock")
}

pub fn write_register<W: Write>(
    writer: &mut Writer<W>,
    register: &Register,
    revision: Revision,
) -> XmlResult<()> {
    writer.start("ipxact:register")?;
    write_name_group(writer, &register.name_group, revision)?;
    write_is_present(writer, &register.is_present, revision)?;
    writer.optional_element("ipxact:dim", &register.dimension)?;
    writer.text_element("ipxact:addressOffset", &register.address_offset)?;
    writer.optional_element("ipxact:typeIdentifier", &register.type_identifier)?;
    writer.text_element("ipxact:size", &register.size)?;
    writer.optional_element("ipxact:volatile", &register.volatile)?;
    write_access(writer, &register.access, &register.access_policies, revision)?;
    for field in &register.fields {
        write_field(writer, field, revision)?;
    }
    write_parameters(writer, &register.parameters, revision)?;
    write_vendor_extensions(writer, &register.vendor_extensions)?;
    writer.end("ipxact:register")
}

pub fn write_field<W: Write>(
    writer: &mut Writer<W>,
    field: &Field,
    revision: Revision,
) -> XmlResult<()> {
    writer.start_with("ipxact:field", &present(&[("fieldID", field.field_id.as_str())]))?;
    write_name_group(writer, &field.name_group, revision)?;
    write_is_present(writer, &field.is_present, revision)?;
    writer.text_element("ipxact:bitOffset", &field.bit_offset)?;

    if !field.resets.is_empty() {
        writer.start("ipxact:resets")?;
        for reset in &field.resets {
            writer.start_with(
                "ipxact:reset",
                &present(&[("resetTypeRef", reset.reset_type_ref.as_str())]),
            )?;
            writer.text_element("ipxact:value", &reset.value)?;
            writer.optional_element("ipxact:mask", &reset.mask)?;
            writer.end("ipxact:reset")?;
        }
        writer.end("ipxact:resets")?;
    }

    writer.optional_element("ipxact:typeIdentifier", &field.type_identifier)?;
    writer.text_element("ipxact:bitWidth", &field.bit_width)?;
    writer.optional_element("ipxact:volatile", &field.volatile)?;

    match revision {
        Revision::Std14 => {
            writer.optional_element("ipxact:access", &field.access)?;
            write_enumerated_values(writer, field, revision)?;
            writer.optional_element("ipxact:modifiedWriteValue", &field.modified_write_value)?;
        }
        Revision::Std22 => {
            write_field_access_policies(writer, field)?;
            write_enumerated_values(writer, field, revision)?;
        }
    }

    write_parameters(writer, &field.parameters, revision)?;
    write_vendor_extensions(writer, &field.vendor_extensions)?;
    writer.end("ipxact:field")
}

/// The modified write value rides on the first policy, which is created
/// for it when the field has none.
fn write_field_access_policies<W: Write>(writer: &mut Writer<W>, field: &Field) -> XmlResult<()> {
    let carrier = AccessPolicy::default();
    let policies: &[AccessPolicy] = if field.access_policies.is_empty() {
        if field.modified_write_value.is_empty() {
            return Ok(());
        }
        std::slice::from_ref(&carrier)
    } else {
        &field.access_policies
    };

    writer.start("ipxact:fieldAccessPolicies")?;
    for (index, policy) in policies.iter().enumerate() {
        writer.start("ipxact:fieldAccessPolicy")?;
        write_policy_body(writer, policy)?;
        if index == 0 {
            writer.optional_element("ipxact:modifiedWriteValue", &field.modified_write_value)?;
        }
        writer.end("ipxact:fieldAccessPolicy")?;
    }
    writer.end("ipxact:fieldAccessPolicies")
}

fn write_enumerated_values<W: Write>(
    writer: &mut Writer<W>,
    field: &Field,
    revision: Revision,
) -> XmlResult<()> {
    if field.enumerated_values.is_empty() {
        return Ok(());
    }
    writer.start("ipxact:enumeratedValues")?;
    for value in &field.enumerated_values {
        writer.start_with(
            "ipxact:enumeratedValue",
            &present(&[("usage", value.usage.as_str())]),
        )?;
        write_name_group(writer, &value.name_group, revision)?;
        writer.text_element("ipxact:value", &value.value)?;
        writer.end("ipxact:enumeratedValue")?;
    }
    writer.end("ipxact:enumeratedValues")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::write_fragment;
    use crate::ToXmlConfig;
    use ipxact_core::model::{FieldReset, ModeRef};

    #[test]
    fn test_write_field_2014() {
        let mut field = Field::new("enable", "0", "1");
        field.field_id = "f0".to_string();
        field.is_present = "1".to_string();
        field.access = "read-write".to_string();
        field.resets.push(FieldReset {
            reset_type_ref: String::new(),
            value: "0".to_string(),
            mask: String::new(),
        });

        let xml = write_fragment(&ToXmlConfig::compact(), |w| {
            write_field(w, &field, Revision::Std14)
        })
        .unwrap();
        assert_eq!(
            xml,
            "<ipxact:field fieldID=\"f0\">\
                <ipxact:name>enable</ipxact:name>\
                <ipxact:isPresent>1</ipxact:isPresent>\
                <ipxact:bitOffset>0</ipxact:bitOffset>\
                <ipxact:resets><ipxact:reset><ipxact:value>0</ipxact:value></ipxact:reset></ipxact:resets>\
                <ipxact:bitWidth>1</ipxact:bitWidth>\
                <ipxact:access>read-write</ipxact:access>\
             </ipxact:field>"
        );
    }

    #[test]
    fn test_write_field_2022_uses_access_policies() {
        let mut field = Field::new("enable", "0", "1");
        field.is_present = "1".to_string();
        field.modified_write_value = "oneToClear".to_string();
        field.access_policies.push(AccessPolicy {
            mode_refs: vec![ModeRef {
                reference: "normal".to_string(),
                priority: "1".to_string(),
            }],
            access: "read-only".to_string(),
        });

        let xml = write_fragment(&ToXmlConfig::compact(), |w| {
            write_field(w, &field, Revision::Std22)
        })
        .unwrap();
        assert_eq!(
            xml,
            "<ipxact:field>\
                <ipxact:name>enable</ipxact:name>\
                <ipxact:bitOffset>0</ipxact:bitOffset>\
                <ipxact:bitWidth>1</ipxact:bitWidth>\
                <ipxact:fieldAccessPolicies><ipxact:fieldAccessPolicy>\
                    <ipxact:modeRef priority=\"1\">normal</ipxact:modeRef>\
                    <ipxact:access>read-only</ipxact:access>\
                    <ipxact:modifiedWriteValue>oneToClear</ipxact:modifiedWriteValue>\
                </ipxact:fieldAccessPolicy></ipxact:fieldAccessPolicies>\
             </ipxact:field>"
        );
    }

    #[test]
    fn test_write_memory_map_with_subspace() {
        let mut map = MemoryMap::new("memoryMap");
        let mut block = MemoryBlock::address_block("regs", "0");
        if let Some(data) = block.as_address_block_mut() {
            data.range = "16".to_string();
            data.width = "32".to_string();
            data.registers.push(Register::new("ctrl", "0", "32"));
        }
        map.blocks.push(block);
        map.blocks.push(MemoryBlock::subspace_map("window", "'h100", "cpu"));
        map.address_unit_bits = "8".to_string();

        let std14 = write_fragment(&ToXmlConfig::compact(), |w| {
            write_memory_map(w, &map, Revision::Std14)
        })
        .unwrap();
        assert_eq!(
            std14,
            "<ipxact:memoryMap>\
                <ipxact:name>memoryMap</ipxact:name>\
                <ipxact:addressBlock>\
                    <ipxact:name>regs</ipxact:name>\
                    <ipxact:baseAddress>0</ipxact:baseAddress>\
                    <ipxact:range>16</ipxact:range>\
                    <ipxact:width>32</ipxact:width>\
                    <ipxact:register>\
                        <ipxact:name>ctrl</ipxact:name>\
                        <ipxact:addressOffset>0</ipxact:addressOffset>\
                        <ipxact:size>32</ipxact:size>\
                    </ipxact:register>\
                </ipxact:addressBlock>\
                <ipxact:subspaceMap masterRef=\"cpu\">\
                    <ipxact:name>window</ipxact:name>\
                    <ipxact:baseAddress>'h100</ipxact:baseAddress>\
                </ipxact:subspaceMap>\
                <ipxact:addressUnitBits>8</ipxact:addressUnitBits>\
             </ipxact:memoryMap>"
        );

        let std22 = write_fragment(&ToXmlConfig::compact(), |w| {
            write_memory_map(w, &map, Revision::Std22)
        })
        .unwrap();
        assert!(std22.contains("<ipxact:subspaceMap initiatorRef=\"cpu\">"));
    }
}
