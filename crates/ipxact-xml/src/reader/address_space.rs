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

//! Address space and segment readers.

use super::common::{read_is_present, read_name_group, read_parameters};
use super::memory::read_memory_map;
use crate::dom::{attributes, child, child_text, nested, text, vendor_extensions};
use ipxact_core::model::{AddressSpace, Segment};
use ipxact_core::Revision;
use roxmltree::Node;

/// Reads an `ipxact:addressSpace` element.
pub fn read_address_space(node: Node<'_, '_>, revision: Revision) -> AddressSpace {
    AddressSpace {
        name_group: read_name_group(node),
        is_present: read_is_present(node),
        range: child_text(node, "ipxact:range"),
        width: child_text(node, "ipxact:width"),
        segments: nested(node, "ipxact:segments", "ipxact:segment")
            .into_iter()
            .map(|s| read_segment(s, revision))
            .collect(),
        address_unit_bits: child_text(node, "ipxact:addressUnitBits"),
        local_memory_map: child(node, "ipxact:localMemoryMap")
            .map(|map| read_memory_map(map, revision)),
        parameters: read_parameters(node, revision),
        vendor_extensions: vendor_extensions(node),
    }
}

/// Reads an `ipxact:segment`; attributes on the offset and range elements
/// are kept verbatim.
pub fn read_segment(node: Node<'_, '_>, _revision: Revision) -> Segment {
    let offset = child(node, "ipxact:addressOffset");
    let range = child(node, "ipxact:range");

    Segment {
        name_group: read_name_group(node),
        is_present: read_is_present(node),
        offset: offset.map(text).unwrap_or_default(),
        range: range.map(text).unwrap_or_default(),
        offset_attributes: offset.map(attributes).unwrap_or_default(),
        range_attributes: range.map(attributes).unwrap_or_default(),
        vendor_extensions: vendor_extensions(node),
    }
}
