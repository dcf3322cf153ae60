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

//! Mode, port slice and field slice writers (2022).

use super::common::{write_name_group, write_vendor_extensions};
use crate::emit::XmlWriterExt;
use crate::error::XmlResult;
use ipxact_core::model::{FieldSlice, Mode, PortSlice};
use ipxact_core::Revision;
use quick_xml::Writer;
use std::io::Write;

fn write_range<W: Write>(writer: &mut Writer<W>, left: &str, right: &str) -> XmlResult<()> {
    if left.is_empty() && right.is_empty() {
        return Ok(());
    }
    writer.start("ipxact:range")?;
    writer.text_element("ipxact:left", left)?;
    writer.text_element("ipxact:right", right)?;
    writer.end("ipxact:range")
}

fn write_reference<W: Write>(
    writer: &mut Writer<W>,
    element: &str,
    attribute: &str,
    value: &str,
) -> XmlResult<()> {
    if value.is_empty() {
        return Ok(());
    }
    writer.empty_with(element, &[(attribute, value)])
}

fn write_port_slice<W: Write>(writer: &mut Writer<W>, slice: &PortSlice) -> XmlResult<()> {
    writer.start("ipxact:portSlice")?;
    write_name_group(writer, &slice.name_group, Revision::Std22)?;
    if slice.left.is_empty() && slice.right.is_empty() {
        writer.empty_with("ipxact:portRef", &[("portRef", slice.port_ref.as_str())])?;
    } else {
        writer.start_with("ipxact:portRef", &[("portRef", slice.port_ref.as_str())])?;
        writer.start("ipxact:partSelect")?;
        write_range(writer, &slice.left, &slice.right)?;
        writer.end("ipxact:partSelect")?;
        writer.end("ipxact:portRef")?;
    }
    writer.end("ipxact:portSlice")
}

pub fn write_field_slice<W: Write>(writer: &mut Writer<W>, slice: &FieldSlice) -> XmlResult<()> {
    writer.start("ipxact:fieldSlice")?;
    write_name_group(writer, &slice.name_group, Revision::Std22)?;
    write_reference(writer, "ipxact:addressSpaceRef", "addressSpaceRef", &slice.address_space_ref)?;
    write_reference(writer, "ipxact:memoryMapRef", "memoryMapRef", &slice.memory_map_ref)?;
    write_reference(writer, "ipxact:addressBlockRef", "addressBlockRef", &slice.address_block_ref)?;
    write_reference(writer, "ipxact:registerRef", "registerRef", &slice.register_ref)?;
    write_reference(writer, "ipxact:fieldRef", "fieldRef", &slice.field_ref)?;
    write_range(writer, &slice.left, &slice.right)?;
    writer.end("ipxact:fieldSlice")
}

/// Writes an `ipxact:mode` element.
pub fn write_mode<W: Write>(writer: &mut Writer<W>, mode: &Mode) -> XmlResult<()> {
    writer.start("ipxact:mode")?;
    write_name_group(writer, &mode.name_group, Revision::Std22)?;
    for slice in &mode.port_slices {
        write_port_slice(writer, slice)?;
    }
    for slice in &mode.field_slices {
        write_field_slice(writer, slice)?;
    }
    writer.optional_element("ipxact:condition", &mode.condition)?;
    write_vendor_extensions(writer, &mode.vendor_extensions)?;
    writer.end("ipxact:mode")
}
