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

//! Writers shared by every entity: name groups, VLNVs, parameters, choices.

use crate::emit::{present, XmlWriterExt};
use crate::error::XmlResult;
use ipxact_core::model::{Array, Choice, Parameter, Vector};
use ipxact_core::{NameGroup, Revision, VendorExtension, Vlnv, KACTUS2_NAMESPACE, XSI_NAMESPACE};
use quick_xml::Writer;
use std::io::Write;

/// Writes `name`, `displayName`, `shortDescription` (2022 only) and
/// `description`, skipping empty optional parts.
pub fn write_name_group<W: Write>(
    writer: &mut Writer<W>,
    group: &NameGroup,
    revision: Revision,
) -> XmlResult<()> {
    writer.text_element("ipxact:name", &group.name)?;
    writer.optional_element("ipxact:displayName", &group.display_name)?;
    if revision.is_std22() {
        writer.optional_element("ipxact:shortDescription", &group.short_description)?;
    }
    writer.optional_element("ipxact:description", &group.description)
}

pub fn write_vlnv_elements<W: Write>(writer: &mut Writer<W>, vlnv: &Vlnv) -> XmlResult<()> {
    writer.text_element("ipxact:vendor", &vlnv.vendor)?;
    writer.text_element("ipxact:library", &vlnv.library)?;
    writer.text_element("ipxact:name", &vlnv.name)?;
    writer.text_element("ipxact:version", &vlnv.version)
}

/// Writes `<element vendor=".." library=".." name=".." version=".."/>`.
pub fn write_vlnv_attributes<W: Write>(
    writer: &mut Writer<W>,
    element: &str,
    vlnv: &Vlnv,
) -> XmlResult<()> {
    writer.empty_with(
        element,
        &[
            ("vendor", vlnv.vendor.as_str()),
            ("library", vlnv.library.as_str()),
            ("name", vlnv.name.as_str()),
            ("version", vlnv.version.as_str()),
        ],
    )
}

pub(crate) fn write_is_present<W: Write>(
    writer: &mut Writer<W>,
    is_present: &str,
    revision: Revision,
) -> XmlResult<()> {
    if revision.is_std22() {
        return Ok(());
    }
    writer.optional_element("ipxact:isPresent", is_present)
}

fn write_bounds<W: Write>(
    writer: &mut Writer<W>,
    element: &str,
    id_attribute: &str,
    id: &str,
    left: &str,
    right: &str,
    revision: Revision,
) -> XmlResult<()> {
    let id = if revision.is_std22() { id } else { "" };
    writer.start_with(element, &present(&[(id_attribute, id)]))?;
    writer.text_element("ipxact:left", left)?;
    writer.text_element("ipxact:right", right)?;
    writer.end(element)
}

pub(crate) fn write_vectors<W: Write>(
    writer: &mut Writer<W>,
    vectors: &[Vector],
    revision: Revision,
) -> XmlResult<()> {
    if vectors.is_empty() {
        return Ok(());
    }
    writer.start("ipxact:vectors")?;
    for v in vectors {
        write_bounds(writer, "ipxact:vector", "vectorId", &v.id, &v.left, &v.right, revision)?;
    }
    writer.end("ipxact:vectors")
}

pub(crate) fn write_arrays<W: Write>(
    writer: &mut Writer<W>,
    arrays: &[Array],
    revision: Revision,
) -> XmlResult<()> {
    if arrays.is_empty() {
        return Ok(());
    }
    writer.start("ipxact:arrays")?;
    for a in arrays {
        write_bounds(writer, "ipxact:array", "arrayId", &a.id, &a.left, &a.right, revision)?;
    }
    writer.end("ipxact:arrays")
}

/// Writes one parameter as `element` (`ipxact:parameter` or
/// `ipxact:moduleParameter`).
pub fn write_parameter<W: Write>(
    writer: &mut Writer<W>,
    parameter: &Parameter,
    element: &str,
    revision: Revision,
) -> XmlResult<()> {
    let attributes = present(&[
        ("parameterId", parameter.value_id.as_str()),
        ("prompt", parameter.prompt.as_str()),
        ("type", parameter.parameter_type.as_str()),
        ("resolve", parameter.resolve.as_str()),
        ("choiceRef", parameter.choice_ref.as_str()),
        ("order", parameter.order.as_str()),
        ("minimum", parameter.minimum.as_str()),
        ("maximum", parameter.maximum.as_str()),
        ("sign", parameter.sign.as_str()),
        ("unit", parameter.unit.as_str()),
    ]);

    writer.start_with(element, &attributes)?;
    write_name_group(writer, &parameter.name_group, revision)?;
    write_vectors(writer, &parameter.vectors, revision)?;
    write_arrays(writer, &parameter.arrays, revision)?;
    writer.text_element("ipxact:value", &parameter.value)?;
    write_vendor_extensions(writer, &parameter.vendor_extensions)?;
    writer.end(element)
}

/// Writes `parameters` wrapped in `wrapper`, or nothing when empty.
pub fn write_parameter_list<W: Write>(
    writer: &mut Writer<W>,
    parameters: &[Parameter],
    wrapper: &str,
    element: &str,
    revision: Revision,
) -> XmlResult<()> {
    if parameters.is_empty() {
        return Ok(());
    }
    writer.start(wrapper)?;
    for parameter in parameters {
        write_parameter(writer, parameter, element, revision)?;
    }
    writer.end(wrapper)
}

pub fn write_parameters<W: Write>(
    writer: &mut Writer<W>,
    parameters: &[Parameter],
    revision: Revision,
) -> XmlResult<()> {
    write_parameter_list(writer, parameters, "ipxact:parameters", "ipxact:parameter", revision)
}

pub fn write_choice<W: Write>(writer: &mut Writer<W>, choice: &Choice) -> XmlResult<()> {
    writer.start("ipxact:choice")?;
    writer.text_element("ipxact:name", &choice.name)?;
    for enumeration in &choice.enumerations {
        let attributes = present(&[
            ("help", enumeration.help.as_str()),
            ("text", enumeration.text.as_str()),
        ]);
        writer.text_element_with("ipxact:enumeration", &attributes, &enumeration.value)?;
    }
    writer.end("ipxact:choice")
}

pub fn write_choices<W: Write>(writer: &mut Writer<W>, choices: &[Choice]) -> XmlResult<()> {
    if choices.is_empty() {
        return Ok(());
    }
    writer.start("ipxact:choices")?;
    for choice in choices {
        write_choice(writer, choice)?;
    }
    writer.end("ipxact:choices")
}

/// Writes `ipxact:vendorExtensions` unless the list is empty.
pub fn write_vendor_extensions<W: Write>(
    writer: &mut Writer<W>,
    extensions: &[VendorExtension],
) -> XmlResult<()> {
    if extensions.is_empty() {
        return Ok(());
    }
    writer.start("ipxact:vendorExtensions")?;
    for extension in extensions {
        writer.extension(extension)?;
    }
    writer.end("ipxact:vendorExtensions")
}

/// Writes the top comments and opens the document root with the
/// `xsi`, `ipxact` and `kactus2` namespace declarations.
pub(crate) fn write_document_start<W: Write>(
    writer: &mut Writer<W>,
    root: &str,
    revision: Revision,
    top_comments: &[String],
) -> XmlResult<()> {
    for comment in top_comments {
        writer.comment(comment)?;
    }
    let schema_location = revision.schema_location();
    writer.start_with(
        root,
        &[
            ("xmlns:xsi", XSI_NAMESPACE),
            ("xmlns:ipxact", revision.namespace()),
            ("xmlns:kactus2", KACTUS2_NAMESPACE),
            ("xsi:schemaLocation", schema_location.as_str()),
        ],
    )
}

/// Writes `kactus2:version` unless empty.
pub(crate) fn write_kactus_version<W: Write>(writer: &mut Writer<W>, version: &str) -> XmlResult<()> {
    writer.optional_element("kactus2:version", version)
}
