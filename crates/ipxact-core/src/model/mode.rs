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

//! Component modes and the slices they reference (2022).

use crate::extension::VendorExtension;
use crate::name_group::NameGroup;

/// Bit range of a component port.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortSlice {
    pub name_group: NameGroup,
    pub port_ref: String,
    pub left: String,
    pub right: String,
}

/// Bit range of a register field, addressed by a chain of container names.
///
/// Exactly one of `address_space_ref` and `memory_map_ref` starts the chain.
/// With an address space the chain continues through its local memory map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSlice {
    pub name_group: NameGroup,
    pub address_space_ref: String,
    pub memory_map_ref: String,
    pub address_block_ref: String,
    pub register_ref: String,
    pub field_ref: String,
    pub left: String,
    pub right: String,
}

impl FieldSlice {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }

    pub fn with_range(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left = left.into();
        self.right = right.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mode {
    pub name_group: NameGroup,
    pub port_slices: Vec<PortSlice>,
    pub field_slices: Vec<FieldSlice>,
    pub condition: String,
    pub vendor_extensions: Vec<VendorExtension>,
}

impl Mode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }
}
