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

//! Memory maps and the block, register and field hierarchy.

use super::parameter::Parameter;
use crate::extension::VendorExtension;
use crate::name_group::NameGroup;

/// Reference to a component mode, with its priority.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeRef {
    pub reference: String,
    pub priority: String,
}

/// Mode-dependent access (2022).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessPolicy {
    pub mode_refs: Vec<ModeRef>,
    pub access: String,
}

/// A named container of address and subspace blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryMap {
    pub name_group: NameGroup,
    pub is_present: String,
    pub blocks: Vec<MemoryBlock>,
    pub address_unit_bits: String,
    pub shared: String,
    pub vendor_extensions: Vec<VendorExtension>,
}

impl MemoryMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }

    pub fn block(&self, name: &str) -> Option<&MemoryBlock> {
        self.blocks.iter().find(|b| b.name() == name)
    }

    /// Address block named `name`, skipping subspace maps.
    pub fn address_block(&self, name: &str) -> Option<&AddressBlockData> {
        self.block(name).and_then(MemoryBlock::as_address_block)
    }
}

/// Fields shared by every block kind, plus the kind itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryBlock {
    pub name_group: NameGroup,
    pub is_present: String,
    pub base_address: String,
    pub parameters: Vec<Parameter>,
    pub vendor_extensions: Vec<VendorExtension>,
    pub kind: BlockKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    AddressBlock(AddressBlockData),
    SubspaceMap(SubspaceMapData),
}

impl Default for BlockKind {
    fn default() -> Self {
        BlockKind::AddressBlock(AddressBlockData::default())
    }
}

impl BlockKind {
    /// Element name, also used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::AddressBlock(_) => "address block",
            BlockKind::SubspaceMap(_) => "subspace map",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressBlockData {
    pub type_identifier: String,
    pub range: String,
    pub width: String,
    pub usage: String,
    pub volatile: String,
    /// 2014 access; 2022 documents use `access_policies`.
    pub access: String,
    pub access_policies: Vec<AccessPolicy>,
    pub registers: Vec<Register>,
}

impl AddressBlockData {
    pub fn register(&self, name: &str) -> Option<&Register> {
        self.registers.iter().find(|r| r.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubspaceMapData {
    /// `masterRef` in 2014, `initiatorRef` in 2022.
    pub initiator_ref: String,
    pub segment_ref: String,
}

impl MemoryBlock {
    pub fn address_block(name: impl Into<String>, base_address: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            base_address: base_address.into(),
            ..Self::default()
        }
    }

    pub fn subspace_map(
        name: impl Into<String>,
        base_address: impl Into<String>,
        initiator_ref: impl Into<String>,
    ) -> Self {
        Self {
            name_group: NameGroup::new(name),
            base_address: base_address.into(),
            kind: BlockKind::SubspaceMap(SubspaceMapData {
                initiator_ref: initiator_ref.into(),
                segment_ref: String::new(),
            }),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }

    pub fn as_address_block(&self) -> Option<&AddressBlockData> {
        match &self.kind {
            BlockKind::AddressBlock(data) => Some(data),
            BlockKind::SubspaceMap(_) => None,
        }
    }

    pub fn as_address_block_mut(&mut self) -> Option<&mut AddressBlockData> {
        match &mut self.kind {
            BlockKind::AddressBlock(data) => Some(data),
            BlockKind::SubspaceMap(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Register {
    pub name_group: NameGroup,
    pub is_present: String,
    pub dimension: String,
    pub address_offset: String,
    pub type_identifier: String,
    pub size: String,
    pub volatile: String,
    pub access: String,
    pub access_policies: Vec<AccessPolicy>,
    pub fields: Vec<Field>,
    pub parameters: Vec<Parameter>,
    pub vendor_extensions: Vec<VendorExtension>,
}

impl Register {
    pub fn new(
        name: impl Into<String>,
        address_offset: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            name_group: NameGroup::new(name),
            address_offset: address_offset.into(),
            size: size.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldReset {
    pub reset_type_ref: String,
    pub value: String,
    pub mask: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumeratedValue {
    pub name_group: NameGroup,
    pub usage: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub name_group: NameGroup,
    pub field_id: String,
    pub is_present: String,
    pub bit_offset: String,
    pub resets: Vec<FieldReset>,
    pub type_identifier: String,
    pub bit_width: String,
    pub volatile: String,
    pub access: String,
    pub access_policies: Vec<AccessPolicy>,
    pub enumerated_values: Vec<EnumeratedValue>,
    pub modified_write_value: String,
    pub parameters: Vec<Parameter>,
    pub vendor_extensions: Vec<VendorExtension>,
}

impl Field {
    pub fn new(
        name: impl Into<String>,
        bit_offset: impl Into<String>,
        bit_width: impl Into<String>,
    ) -> Self {
        Self {
            name_group: NameGroup::new(name),
            bit_offset: bit_offset.into(),
            bit_width: bit_width.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }
}
