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

//! Writers for the Kactus2 COM and API definition documents.
//!
//! Both documents are always written with the 2014 namespace.

use super::common::{write_document_start, write_vlnv_attributes, write_vlnv_elements};
use crate::emit::{present, XmlWriterExt};
use crate::error::XmlResult;
use ipxact_core::model::{ApiDefinition, ApiFunction, ComDefinition, ComProperty};
use ipxact_core::Revision;
use quick_xml::Writer;
use std::io::Write;

/// Writes a `kactus2:property` element.
pub fn write_com_property<W: Write>(writer: &mut Writer<W>, property: &ComProperty) -> XmlResult<()> {
    writer.empty_with(
        "kactus2:property",
        &[
            ("name", property.name.as_str()),
            ("required", if property.required { "true" } else { "false" }),
            ("propertyType", property.property_type.as_str()),
            ("defaultValue", property.default_value.as_str()),
            ("description", property.description.as_str()),
        ],
    )
}

pub(crate) fn write_com_properties<W: Write>(
    writer: &mut Writer<W>,
    properties: &[ComProperty],
) -> XmlResult<()> {
    if properties.is_empty() {
        return Ok(());
    }
    writer.start("kactus2:properties")?;
    for property in properties {
        write_com_property(writer, property)?;
    }
    writer.end("kactus2:properties")
}

pub fn write_com_definition<W: Write>(
    writer: &mut Writer<W>,
    definition: &ComDefinition,
) -> XmlResult<()> {
    const ROOT: &str = "kactus2:comDefinition";

    write_document_start(writer, ROOT, Revision::Std14, &definition.top_comments)?;
    write_vlnv_elements(writer, &definition.vlnv)?;

    if !definition.transfer_types.is_empty() {
        writer.start("kactus2:transferTypes")?;
        for transfer_type in &definition.transfer_types {
            writer.empty_with("kactus2:transferType", &[("name", transfer_type.as_str())])?;
        }
        writer.end("kactus2:transferTypes")?;
    }
    write_com_properties(writer, &definition.properties)?;
    writer.end(ROOT)
}

/// Writes a `kactus2:function` element with its return value and parameters.
pub fn write_api_function<W: Write>(writer: &mut Writer<W>, function: &ApiFunction) -> XmlResult<()> {
    let attributes = present(&[
        ("name", function.name.as_str()),
        ("description", function.description.as_str()),
    ]);
    writer.start_with("kactus2:function", &attributes)?;

    if let Some(return_value) = &function.return_value {
        writer.empty_with(
            "kactus2:returnValue",
            &present(&[
                ("type", return_value.value_type.as_str()),
                ("description", return_value.description.as_str()),
            ]),
        )?;
    }
    for parameter in &function.parameters {
        writer.empty_with(
            "kactus2:functionParameter",
            &present(&[
                ("name", parameter.name.as_str()),
                ("type", parameter.value_type.as_str()),
                ("transferType", parameter.com_transfer_type.as_str()),
                ("description", parameter.description.as_str()),
            ]),
        )?;
    }
    writer.end("kactus2:function")
}

pub fn write_api_definition<W: Write>(
    writer: &mut Writer<W>,
    definition: &ApiDefinition,
) -> XmlResult<()> {
    const ROOT: &str = "kactus2:apiDefinition";

    write_document_start(writer, ROOT, Revision::Std14, &definition.top_comments)?;
    write_vlnv_elements(writer, &definition.vlnv)?;
    writer.optional_element("kactus2:language", &definition.language)?;
    if let Some(reference) = &definition.com_definition_ref {
        write_vlnv_attributes(writer, "kactus2:comDefinitionRef", reference)?;
    }

    if !definition.data_types.is_empty() {
        writer.start("kactus2:dataTypes")?;
        for data_type in &definition.data_types {
            writer.empty_with("kactus2:dataType", &[("name", data_type.as_str())])?;
        }
        writer.end("kactus2:dataTypes")?;
    }

    if !definition.functions.is_empty() {
        writer.start("kactus2:functions")?;
        for function in &definition.functions {
            write_api_function(writer, function)?;
        }
        writer.end("kactus2:functions")?;
    }
    writer.end(ROOT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::write_fragment;
    use crate::ToXmlConfig;
    use ipxact_core::model::{ApiFunctionParameter, ApiReturnValue};
    use ipxact_core::{DocumentType, Vlnv};

    fn body(xml: String) -> String {
        let start = xml.find("<ipxact:vendor>").unwrap();
        xml[start..].to_string()
    }

    #[test]
    fn test_write_com_property() {
        let property = ComProperty {
            name: "Priority".to_string(),
            required: true,
            property_type: "override.".to_string(),
            default_value: "New behaviour".to_string(),
            description: "dictated".to_string(),
        };
        let xml = write_fragment(&ToXmlConfig::compact(), |w| write_com_property(w, &property)).unwrap();
        assert_eq!(
            xml,
            "<kactus2:property name=\"Priority\" required=\"true\" propertyType=\"override.\" \
             defaultValue=\"New behaviour\" description=\"dictated\"/>"
        );
    }

    #[test]
    fn test_write_com_definition() {
        let mut definition = ComDefinition::new(Vlnv::new(
            DocumentType::ComDefinition,
            "TUT",
            "com",
            "mcapi",
            "1.0",
        ));
        definition.transfer_types = vec!["int".to_string(), "char*".to_string()];
        definition.properties.push(ComProperty::new("port", "integer"));

        let xml = write_fragment(&ToXmlConfig::compact(), |w| write_com_definition(w, &definition)).unwrap();
        assert!(xml.starts_with("<kactus2:comDefinition xmlns:xsi="));
        assert!(xml.contains("xmlns:ipxact=\"http://www.accellera.org/XMLSchema/IPXACT/1685-2014\""));
        assert_eq!(
            body(xml),
            "<ipxact:vendor>TUT</ipxact:vendor>\
             <ipxact:library>com</ipxact:library>\
             <ipxact:name>mcapi</ipxact:name>\
             <ipxact:version>1.0</ipxact:version>\
             <kactus2:transferTypes>\
                <kactus2:transferType name=\"int\"/>\
                <kactus2:transferType name=\"char*\"/>\
             </kactus2:transferTypes>\
             <kactus2:properties>\
                <kactus2:property name=\"port\" required=\"false\" propertyType=\"integer\" defaultValue=\"\" description=\"\"/>\
             </kactus2:properties>\
             </kactus2:comDefinition>"
        );
    }

    #[test]
    fn test_write_api_definition() {
        let mut definition = ApiDefinition::new(Vlnv::new(
            DocumentType::ApiDefinition,
            "TUT",
            "api",
            "mcapi",
            "1.0",
        ));
        definition.language = "C".to_string();
        definition.com_definition_ref = Some(Vlnv::new(DocumentType::ComDefinition, "TUT", "com", "mcapi", "1.0"));
        definition.data_types.push("mcapi_status_t".to_string());
        let mut function = ApiFunction::new("mcapi_initialize");
        function.return_value = Some(ApiReturnValue {
            value_type: "void".to_string(),
            description: String::new(),
        });
        let mut parameter = ApiFunctionParameter::new("status", "mcapi_status_t*");
        parameter.com_transfer_type = "int".to_string();
        function.parameters.push(parameter);
        definition.functions.push(function);

        let xml = write_fragment(&ToXmlConfig::compact(), |w| write_api_definition(w, &definition)).unwrap();
        assert!(body(xml).ends_with(
            "<kactus2:language>C</kactus2:language>\
             <kactus2:comDefinitionRef vendor=\"TUT\" library=\"com\" name=\"mcapi\" version=\"1.0\"/>\
             <kactus2:dataTypes><kactus2:dataType name=\"mcapi_status_t\"/></kactus2:dataTypes>\
             <kactus2:functions>\
                <kactus2:function name=\"mcapi_initialize\">\
                    <kactus2:returnValue type=\"void\"/>\
                    <kactus2:functionParameter name=\"status\" type=\"mcapi_status_t*\" transferType=\"int\"/>\
                </kactus2:function>\
             </kactus2:functions>\
             </kactus2:apiDefinition>"
        ));
    }
}
