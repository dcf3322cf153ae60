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

//! Readers shared by every entity: name groups, VLNVs, parameters, choices.

use crate::dom::{attribute, child, child_text, children, nested, text, vendor_extensions};
use ipxact_core::model::{Array, Choice, Enumeration, Parameter, Vector};
use ipxact_core::{DocumentType, NameGroup, Revision, Vlnv};
use roxmltree::Node;

/// Reads `name`, `displayName`, `shortDescription` and `description`.
pub fn read_name_group(node: Node<'_, '_>) -> NameGroup {
    NameGroup {
        name: child_text(node, "ipxact:name"),
        display_name: child_text(node, "ipxact:displayName"),
        short_description: child_text(node, "ipxact:shortDescription"),
        description: child_text(node, "ipxact:description"),
    }
}

/// Reads a VLNV held as `vendor`/`library`/`name`/`version` attributes.
pub fn read_vlnv_attributes(node: Node<'_, '_>, document_type: DocumentType) -> Vlnv {
    Vlnv::new(
        document_type,
        attribute(node, "vendor"),
        attribute(node, "library"),
        attribute(node, "name"),
        attribute(node, "version"),
    )
}

/// Reads the document-level VLNV held as child elements.
pub fn read_vlnv_elements(node: Node<'_, '_>, document_type: DocumentType) -> Vlnv {
    Vlnv::new(
        document_type,
        child_text(node, "ipxact:vendor"),
        child_text(node, "ipxact:library"),
        child_text(node, "ipxact:name"),
        child_text(node, "ipxact:version"),
    )
}

pub(crate) fn read_is_present(node: Node<'_, '_>) -> String {
    child_text(node, "ipxact:isPresent")
}

fn read_bounds(node: Node<'_, '_>) -> (String, String) {
    (child_text(node, "ipxact:left"), child_text(node, "ipxact:right"))
}

pub(crate) fn read_vectors(node: Node<'_, '_>, revision: Revision) -> Vec<Vector> {
    nested(node, "ipxact:vectors", "ipxact:vector")
        .into_iter()
        .map(|vector| {
            let (left, right) = read_bounds(vector);
            let id = match revision {
                Revision::Std22 => attribute(vector, "vectorId"),
                Revision::Std14 => String::new(),
            };
            Vector { id, left, right }
        })
        .collect()
}

pub(crate) fn read_arrays(node: Node<'_, '_>, revision: Revision) -> Vec<Array> {
    nested(node, "ipxact:arrays", "ipxact:array")
        .into_iter()
        .map(|array| {
            let (left, right) = read_bounds(array);
            let id = match revision {
                Revision::Std22 => attribute(array, "arrayId"),
                Revision::Std14 => String::new(),
            };
            Array { id, left, right }
        })
        .collect()
}

/// Reads one `ipxact:parameter` (or `ipxact:moduleParameter`) element.
pub fn read_parameter(node: Node<'_, '_>, revision: Revision) -> Parameter {
    Parameter {
        name_group: read_name_group(node),
        value_id: attribute(node, "parameterId"),
        value: child_text(node, "ipxact:value"),
        parameter_type: attribute(node, "type"),
        prompt: attribute(node, "prompt"),
        resolve: attribute(node, "resolve"),
        choice_ref: attribute(node, "choiceRef"),
        order: attribute(node, "order"),
        minimum: attribute(node, "minimum"),
        maximum: attribute(node, "maximum"),
        sign: attribute(node, "sign"),
        unit: attribute(node, "unit"),
        vectors: read_vectors(node, revision),
        arrays: read_arrays(node, revision),
        vendor_extensions: vendor_extensions(node),
    }
}

/// Reads every `element` inside the `wrapper` child of `node`.
pub fn read_parameter_list(
    node: Node<'_, '_>,
    wrapper: &str,
    element: &'static str,
    revision: Revision,
) -> Vec<Parameter> {
    nested(node, wrapper, element)
        .into_iter()
        .map(|p| read_parameter(p, revision))
        .collect()
}

/// Reads the `ipxact:parameters` list of `node`.
pub fn read_parameters(node: Node<'_, '_>, revision: Revision) -> Vec<Parameter> {
    read_parameter_list(node, "ipxact:parameters", "ipxact:parameter", revision)
}

pub fn read_choice(node: Node<'_, '_>) -> Choice {
    Choice {
        name: child_text(node, "ipxact:name"),
        enumerations: children(node, "ipxact:enumeration")
            .map(|e| Enumeration {
                value: text(e),
                text: attribute(e, "text"),
                help: attribute(e, "help"),
            })
            .collect(),
    }
}

pub fn read_choices(node: Node<'_, '_>) -> Vec<Choice> {
    nested(node, "ipxact:choices", "ipxact:choice")
        .into_iter()
        .map(read_choice)
        .collect()
}

/// Reads an optional VLNV reference element such as `ipxact:extends`.
pub(crate) fn read_vlnv_reference(
    node: Node<'_, '_>,
    name: &str,
    document_type: DocumentType,
) -> Option<Vlnv> {
    child(node, name).map(|reference| read_vlnv_attributes(reference, document_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = r#"xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2022""#;

    #[test]
    fn test_read_parameter() {
        let xml = format!(
            r#"<ipxact:parameter {} parameterId="id_w" type="int" resolve="user" minimum="1">
                <ipxact:name>WIDTH</ipxact:name>
                <ipxact:description>bus width</ipxact:description>
                <ipxact:vectors>
                    <ipxact:vector vectorId="v0"><ipxact:left>7</ipxact:left><ipxact:right>0</ipxact:right></ipxact:vector>
                </ipxact:vectors>
                <ipxact:value>8</ipxact:value>
            </ipxact:parameter>"#,
            NS
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let parameter = read_parameter(doc.root_element(), Revision::Std22);

        assert_eq!(parameter.name(), "WIDTH");
        assert_eq!(parameter.name_group.description, "bus width");
        assert_eq!(parameter.value_id, "id_w");
        assert_eq!(parameter.value, "8");
        assert_eq!(parameter.parameter_type, "int");
        assert_eq!(parameter.resolve, "user");
        assert_eq!(parameter.minimum, "1");
        assert_eq!(parameter.vector_left(), "7");
        assert_eq!(parameter.vectors[0].id, "v0");

        let std14 = read_parameter(doc.root_element(), Revision::Std14);
        assert!(std14.vectors[0].id.is_empty());
    }

    #[test]
    fn test_read_choice() {
        let xml = format!(
            r#"<ipxact:choice {}>
                <ipxact:name>sizes</ipxact:name>
                <ipxact:enumeration text="small" help="tiny">4-3</ipxact:enumeration>
                <ipxact:enumeration>8</ipxact:enumeration>
            </ipxact:choice>"#,
            NS
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let choice = read_choice(doc.root_element());

        assert_eq!(choice.name, "sizes");
        assert_eq!(choice.enumerations.len(), 2);
        assert_eq!(choice.enumerations[0].value, "4-3");
        assert_eq!(choice.enumerations[0].text, "small");
        assert_eq!(choice.enumerations[0].help, "tiny");
        assert!(choice.enumerations[1].text.is_empty());
    }

    #[test]
    fn test_missing_children_are_empty() {
        let xml = format!("<ipxact:parameter {}/>", NS);
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let parameter = read_parameter(doc.root_element(), Revision::Std14);
        assert_eq!(parameter, Parameter::default());
    }
}
