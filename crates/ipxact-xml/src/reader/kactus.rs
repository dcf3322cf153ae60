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

//! Readers for the Kactus2 COM and API definition documents.

use super::common::{read_vlnv_elements, read_vlnv_reference};
use crate::dom::{attribute, child, child_text, children, is_true, nested, top_comments};
use ipxact_core::model::{
    ApiDefinition, ApiFunction, ApiFunctionParameter, ApiReturnValue, ComDefinition, ComProperty,
};
use ipxact_core::DocumentType;
use roxmltree::Node;

pub fn read_com_property(node: Node<'_, '_>) -> ComProperty {
    ComProperty {
        name: attribute(node, "name"),
        required: is_true(&attribute(node, "required")),
        property_type: attribute(node, "propertyType"),
        default_value: attribute(node, "defaultValue"),
        description: attribute(node, "description"),
    }
}

/// Reads the `kactus2:properties` list under `node`.
pub(crate) fn read_com_properties(node: Node<'_, '_>) -> Vec<ComProperty> {
    nested(node, "kactus2:properties", "kactus2:property")
        .into_iter()
        .map(read_com_property)
        .collect()
}

pub fn read_com_definition(root: Node<'_, '_>) -> ComDefinition {
    ComDefinition {
        vlnv: read_vlnv_elements(root, DocumentType::ComDefinition),
        transfer_types: nested(root, "kactus2:transferTypes", "kactus2:transferType")
            .into_iter()
            .map(|t| attribute(t, "name"))
            .collect(),
        properties: read_com_properties(root),
        top_comments: top_comments(root),
    }
}

pub fn read_api_function(node: Node<'_, '_>) -> ApiFunction {
    ApiFunction {
        name: attribute(node, "name"),
        description: attribute(node, "description"),
        return_value: child(node, "kactus2:returnValue").map(|r| ApiReturnValue {
            value_type: attribute(r, "type"),
            description: attribute(r, "description"),
        }),
        parameters: children(node, "kactus2:functionParameter")
            .map(|p| ApiFunctionParameter {
                name: attribute(p, "name"),
                value_type: attribute(p, "type"),
                com_transfer_type: attribute(p, "transferType"),
                description: attribute(p, "description"),
            })
            .collect(),
    }
}

pub fn read_api_definition(root: Node<'_, '_>) -> ApiDefinition {
    ApiDefinition {
        vlnv: read_vlnv_elements(root, DocumentType::ApiDefinition),
        language: child_text(root, "kactus2:language"),
        com_definition_ref: read_vlnv_reference(root, "kactus2:comDefinitionRef", DocumentType::ComDefinition),
        data_types: nested(root, "kactus2:dataTypes", "kactus2:dataType")
            .into_iter()
            .map(|t| attribute(t, "name"))
            .collect(),
        functions: nested(root, "kactus2:functions", "kactus2:function")
            .into_iter()
            .map(read_api_function)
            .collect(),
        top_comments: top_comments(root),
    }
}
