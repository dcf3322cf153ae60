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

//! Component port and view readers.

use super::common::{read_arrays, read_is_present, read_name_group, read_vectors};
use crate::dom::{attribute, child, child_text, children, is_true, nested, text, vendor_extensions};
use ipxact_core::model::{Port, Transactional, View, Wire, WireTypeDef};
use ipxact_core::Revision;
use roxmltree::Node;

fn read_wire_type_def(node: Node<'_, '_>) -> WireTypeDef {
    let type_name = child(node, "ipxact:typeName");
    WireTypeDef {
        type_name: type_name.map(text).unwrap_or_default(),
        constrained: type_name
            .map(|t| is_true(&attribute(t, "constrained")))
            .unwrap_or(false),
        type_definitions: children(node, "ipxact:typeDefinition").map(text).collect(),
        view_refs: children(node, "ipxact:viewRef").map(text).collect(),
    }
}

fn read_wire(node: Node<'_, '_>, revision: Revision) -> Wire {
    let default_value = child(node, "ipxact:drivers")
        .and_then(|drivers| child(drivers, "ipxact:driver"))
        .map(|driver| child_text(driver, "ipxact:defaultValue"))
        .unwrap_or_default();

    Wire {
        all_logical_directions_allowed: is_true(&attribute(node, "allLogicalDirectionsAllowed")),
        direction: child_text(node, "ipxact:direction"),
        vectors: read_vectors(node, revision),
        type_defs: nested(node, "ipxact:wireTypeDefs", "ipxact:wireTypeDef")
            .into_iter()
            .map(read_wire_type_def)
            .collect(),
        default_value,
    }
}

fn read_transactional(node: Node<'_, '_>) -> Transactional {
    Transactional {
        all_logical_initiatives_allowed: is_true(&attribute(node, "allLogicalInitiativesAllowed")),
        initiative: child_text(node, "ipxact:initiative"),
        kind: child_text(node, "ipxact:kind"),
        bus_width: child_text(node, "ipxact:busWidth"),
    }
}

/// Reads a component `ipxact:port` element.
pub fn read_port(node: Node<'_, '_>, revision: Revision) -> Port {
    Port {
        name_group: read_name_group(node),
        is_present: read_is_present(node),
        wire: child(node, "ipxact:wire").map(|w| read_wire(w, revision)),
        transactional: child(node, "ipxact:transactional").map(read_transactional),
        arrays: read_arrays(node, revision),
        vendor_extensions: vendor_extensions(node),
    }
}

pub fn read_view(node: Node<'_, '_>) -> View {
    View {
        name_group: read_name_group(node),
        env_identifiers: children(node, "ipxact:envIdentifier").map(text).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_wire_port() {
        let xml = r#"<ipxact:port xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2014">
            <ipxact:name>data</ipxact:name>
            <ipxact:wire allLogicalDirectionsAllowed="true">
                <ipxact:direction>out</ipxact:direction>
                <ipxact:vectors>
                    <ipxact:vector><ipxact:left>7</ipxact:left><ipxact:right>0</ipxact:right></ipxact:vector>
                </ipxact:vectors>
                <ipxact:wireTypeDefs>
                    <ipxact:wireTypeDef>
                        <ipxact:typeName constrained="true">std_logic_vector</ipxact:typeName>
                        <ipxact:typeDefinition>IEEE.std_logic_1164.all</ipxact:typeDefinition>
                        <ipxact:viewRef>rtl</ipxact:viewRef>
                    </ipxact:wireTypeDef>
                </ipxact:wireTypeDefs>
                <ipxact:drivers>
                    <ipxact:driver><ipxact:defaultValue>0</ipxact:defaultValue></ipxact:driver>
                </ipxact:drivers>
            </ipxact:wire>
        </ipxact:port>"#;

        let doc = roxmltree::Document::parse(xml).unwrap();
        let port = read_port(doc.root_element(), Revision::Std14);

        assert_eq!(port.name(), "data");
        assert_eq!(port.vector_bounds(), Some(("7", "0")));
        let wire = port.wire.as_ref().unwrap();
        assert!(wire.all_logical_directions_allowed);
        assert_eq!(wire.direction, "out");
        assert_eq!(wire.default_value, "0");
        assert_eq!(wire.type_defs[0].type_name, "std_logic_vector");
        assert!(wire.type_defs[0].constrained);
        assert_eq!(wire.type_defs[0].view_refs, vec!["rtl"]);
        assert!(port.transactional.is_none());
    }

    #[test]
    fn test_read_view() {
        let xml = r#"<ipxact:view xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2014">
            <ipxact:name>rtl</ipxact:name>
            <ipxact:envIdentifier>:modelsim.mentor.com:</ipxact:envIdentifier>
        </ipxact:view>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        let view = read_view(doc.root_element());
        assert_eq!(view.name(), "rtl");
        assert_eq!(view.env_identifiers, vec![":modelsim.mentor.com:"]);
    }
}
