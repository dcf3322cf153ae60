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

//! Power domain reader.

use super::common::{read_name_group, read_parameters};
use crate::dom::{child_text, vendor_extensions};
use ipxact_core::model::PowerDomain;
use ipxact_core::Revision;
use roxmltree::Node;

/// Reads an `ipxact:powerDomain` element.
///
/// Power domains only exist in 2022 documents, so their parameters are
/// always read with 2022 rules.
pub fn read_power_domain(node: Node<'_, '_>) -> PowerDomain {
    PowerDomain {
        name_group: read_name_group(node),
        always_on: child_text(node, "ipxact:alwaysOn"),
        sub_domain_of: child_text(node, "ipxact:subDomainOf"),
        parameters: read_parameters(node, Revision::Std22),
        vendor_extensions: vendor_extensions(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_power_domain() {
        let xml = r#"<ipxact:powerDomain xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2022"
                xmlns:kactus2="http://kactus2.cs.tut.fi">
            <ipxact:name>core</ipxact:name>
            <ipxact:displayName>Core domain</ipxact:displayName>
            <ipxact:shortDescription>core</ipxact:shortDescription>
            <ipxact:alwaysOn>1</ipxact:alwaysOn>
            <ipxact:subDomainOf>top</ipxact:subDomainOf>
            <ipxact:parameters>
                <ipxact:parameter parameterId="p1">
                    <ipxact:name>voltage</ipxact:name>
                    <ipxact:value>5</ipxact:value>
                </ipxact:parameter>
            </ipxact:parameters>
            <ipxact:vendorExtensions>
                <kactus2:note>n</kactus2:note>
            </ipxact:vendorExtensions>
        </ipxact:powerDomain>"#;

        let doc = roxmltree::Document::parse(xml).unwrap();
        let domain = read_power_domain(doc.root_element());

        assert_eq!(domain.name(), "core");
        assert_eq!(domain.name_group.display_name, "Core domain");
        assert_eq!(domain.name_group.short_description, "core");
        assert_eq!(domain.always_on, "1");
        assert_eq!(domain.sub_domain_of, "top");
        assert_eq!(domain.parameters.len(), 1);
        assert_eq!(domain.parameters[0].value_id, "p1");
        assert_eq!(domain.vendor_extensions[0].name, "kactus2:note");
    }

    #[test]
    fn test_missing_optional_elements() {
        let xml = r#"<ipxact:powerDomain xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2022">
            <ipxact:name>bare</ipxact:name>
        </ipxact:powerDomain>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        let domain = read_power_domain(doc.root_element());
        assert_eq!(domain, PowerDomain::new("bare"));
    }
}
