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

//! Component reader.

use super::address_space::read_address_space;
use super::common::{read_choices, read_name_group, read_parameters, read_vlnv_elements};
use super::kactus::read_com_properties;
use super::memory::read_memory_map;
use super::mode::read_mode;
use super::port::{read_port, read_view};
use super::power_domain::read_power_domain;
use crate::dom::{
    child, nested, skip_unrecognised, take_extension, top_comments, vendor_extensions,
};
use ipxact_core::model::Component;
use ipxact_core::{DocumentType, Revision};
use roxmltree::Node;

const COMPONENT_CHILDREN: &[&str] = &[
    "vendor",
    "library",
    "name",
    "version",
    "displayName",
    "shortDescription",
    "description",
    "powerDomains",
    "modes",
    "addressSpaces",
    "memoryMaps",
    "model",
    "choices",
    "parameters",
    "vendorExtensions",
];

/// Reads an `ipxact:component` root element. Sections without a model
/// counterpart (bus interfaces, file sets, ...) are skipped.
pub fn read_component(root: Node<'_, '_>, revision: Revision) -> Component {
    skip_unrecognised(root, COMPONENT_CHILDREN);
    let mut extensions = vendor_extensions(root);
    let kactus_version = take_extension(&mut extensions, "kactus2:version")
        .map(|v| v.text)
        .unwrap_or_default();
    take_extension(&mut extensions, "kactus2:properties");

    let properties = child(root, "ipxact:vendorExtensions")
        .map(read_com_properties)
        .unwrap_or_default();

    let model = child(root, "ipxact:model");
    let views = model
        .map(|m| nested(m, "ipxact:views", "ipxact:view").into_iter().map(read_view).collect())
        .unwrap_or_default();
    let ports = model
        .map(|m| {
            nested(m, "ipxact:ports", "ipxact:port")
                .into_iter()
                .map(|port| read_port(port, revision))
                .collect()
        })
        .unwrap_or_default();

    Component {
        vlnv: read_vlnv_elements(root, DocumentType::Component),
        revision,
        name_group: read_name_group(root),
        power_domains: nested(root, "ipxact:powerDomains", "ipxact:powerDomain")
            .into_iter()
            .map(read_power_domain)
            .collect(),
        modes: nested(root, "ipxact:modes", "ipxact:mode")
            .into_iter()
            .map(read_mode)
            .collect(),
        address_spaces: nested(root, "ipxact:addressSpaces", "ipxact:addressSpace")
            .into_iter()
            .map(|space| read_address_space(space, revision))
            .collect(),
        memory_maps: nested(root, "ipxact:memoryMaps", "ipxact:memoryMap")
            .into_iter()
            .map(|map| read_memory_map(map, revision))
            .collect(),
        views,
        ports,
        choices: read_choices(root),
        parameters: read_parameters(root, revision),
        vendor_extensions: extensions,
        kactus_version,
        properties,
        top_comments: top_comments(root),
    }
}
