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

//! Address spaces and their segments.

use super::memory::MemoryMap;
use super::parameter::Parameter;
use crate::extension::VendorExtension;
use crate::name_group::NameGroup;

/// Named sub-range of an address space.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub name_group: NameGroup,
    pub is_present: String,
    pub offset: String,
    pub range: String,
    /// Attributes of the `addressOffset` element, kept in document order.
    pub offset_attributes: Vec<(String, String)>,
    pub range_attributes: Vec<(String, String)>,
    pub vendor_extensions: Vec<VendorExtension>,
}

impl Segment {
    pub fn new(
        name: impl Into<String>,
        offset: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        Self {
            name_group: NameGroup::new(name),
            offset: offset.into(),
            range: range.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressSpace {
    pub name_group: NameGroup,
    pub is_present: String,
    pub range: String,
    pub width: String,
    pub segments: Vec<Segment>,
    pub address_unit_bits: String,
    pub local_memory_map: Option<MemoryMap>,
    pub parameters: Vec<Parameter>,
    pub vendor_extensions: Vec<VendorExtension>,
}

impl AddressSpace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }

    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.name() == name)
    }
}
