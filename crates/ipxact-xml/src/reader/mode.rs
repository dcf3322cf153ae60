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

//! Mode, port slice and field slice readers (2022).

use super::common::read_name_group;
use crate::dom::{attribute, child, child_text, children, vendor_extensions};
use ipxact_core::model::{FieldSlice, Mode, PortSlice};
use roxmltree::Node;

fn reference(node: Node<'_, '_>, element: &str, attr: &str) -> String {
    child(node, element)
        .map(|r| attribute(r, attr))
        .unwrap_or_default()
}

fn range(node: Node<'_, '_>) -> (String, String) {
    child(node, "ipxact:range")
        .map(|r| (child_text(r, "ipxact:left"), child_text(r, "ipxact:right")))
        .unwrap_or_default()
}

pub fn read_port_slice(node: Node<'_, '_>) -> PortSlice {
    let port_ref = child(node, "ipxact:portRef");
    let (left, right) = port_ref
        .and_then(|p| child(p, "ipxact:partSelect"))
        .map(range)
        .unwrap_or_default();

    PortSlice {
        name_group: read_name_group(node),
        port_ref: port_ref.map(|p| attribute(p, "portRef")).unwrap_or_default(),
        left,
        right,
    }
}

pub fn read_field_slice(node: Node<'_, '_>) -> FieldSlice {
    let (left, right) = range(node);
    FieldSlice {
        name_group: read_name_group(node),
        address_space_ref: reference(node, "ipxact:addressSpaceRef", "addressSpaceRef"),
        memory_map_ref: reference(node, "ipxact:memoryMapRef", "memoryMapRef"),
        address_block_ref: reference(node, "ipxact:addressBlockRef", "addressBlockRef"),
        register_ref: reference(node, "ipxact:registerRef", "registerRef"),
        field_ref: reference(node, "ipxact:fieldRef", "fieldRef"),
        left,
        right,
    }
}

/// Reads an `ipxact:mode` element.
pub fn read_mode(node: Node<'_, '_>) -> Mode {
    Mode {
        name_group: read_name_group(node),
        port_slices: children(node, "ipxact:portSlice").map(read_port_slice).collect(),
        field_slices: children(node, "ipxact:fieldSlice").map(read_field_slice).collect(),
        condition: child_text(node, "ipxact:condition"),
        vendor_extensions: vendor_extensions(node),
    }
}
