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

//! Component port and view writers.

use super::common::{write_arrays, write_is_present, write_name_group, write_vectors, write_vendor_extensions};
use crate::emit::XmlWriterExt;
use crate::error::XmlResult;
use ipxact_core::model::{Port, Transactional, View, Wire, WireTypeDef};
use ipxact_core::Revision;
use quick_xml::Writer;
use std::io::Write;

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        ""
    }
}

fn write_wire_type_def<W: Write>(writer: &mut Writer<W>, def: &WireTypeDef) -> XmlResult<()> {
    writer.start("ipxact:wireTypeDef")?;
    if def.constrained {
        writer.text_element_with("ipxact:typeName", &[("constrained", "true")], &def.type_name)?;
    } else {
        writer.optional_element("ipxact:typeName", &def.type_name)?;
    }
    for definition in &def.type_definitions {
        writer.text_element("ipxact:typeDefinition", definition)?;
    }
    for view in &def.view_refs {
        writer.text_element("ipxact:viewRef", view)?;
    }
    writer.end("ipxact:wireTypeDef")
}

fn write_wire<W: Write>(writer: &mut Writer<W>, wire: &Wire, revision: Revision) -> XmlResult<()> {
    let attributes = crate::emit::present(&[(
        "allLogicalDirectionsAllowed",
        flag(wire.all_logical_directions_allowed),
    )]);
    writer.start_with("ipxact:wire", &attributes)?;
    writer.text_element("ipxact:direction", &wire.direction)?;
    write_vectors(writer, &wire.vectors, revision)?;

    if !wire.type_defs.is_empty() {
        writer.start("ipxact:wireTypeDefs")?;
        for def in &wire.type_defs {
            write_wire_type_def(writer, def)?;
        }
        writer.end("ipxact:wireTypeDefs")?;
    }

    if !wire.default_value.is_empty() {
        writer.start("ipxact:drivers")?;
        writer.start("ipxact:driver")?;
        writer.text_element("ipxact:defaultValue", &wire.default_value)?;
        writer.end("ipxact:driver")?;
        writer.end("ipxact:drivers")?;
    }
    writer.end("ipxact:wire")
}

fn write_transactional<W: Write>(writer: &mut Writer<W>, transactional: &Transactional) -> XmlResult<()> {
    let attributes = crate::emit::present(&[(
        "allLogicalInitiativesAllowed",
        flag(transactional.all_logical_initiatives_allowed),
    )]);
    writer.start_with("ipxact:transactional", &attributes)?;
    writer.text_element("ipxact:initiative", &transactional.initiative)?;
    writer.optional_element("ipxact:kind", &transactional.kind)?;
    writer.optional_element("ipxact:busWidth", &transactional.bus_width)?;
    writer.end("ipxact:transactional")
}

/// Writes a component `ipxact:port` element.
pub fn write_port<W: Write>(writer: &mut Writer<W>, port: &Port, revision: Revision) -> XmlResult<()> {
    writer.start("ipxact:port")?;
    write_name_group(writer, &port.name_group, revision)?;
    write_is_present(writer, &port.is_present, revision)?;
    if let Some(wire) = &port.wire {
        write_wire(writer, wire, revision)?;
    } else if let Some(transactional) = &port.transactional {
        write_transactional(writer, transactional)?;
    }
    write_arrays(writer, &port.arrays, revision)?;
    write_vendor_extensions(writer, &port.vendor_extensions)?;
    writer.end("ipxact:port")
}

pub fn write_view<W: Write>(writer: &mut Writer<W>, view: &View, revision: Revision) -> XmlResult<()> {
    writer.start("ipxact:view")?;
    write_name_group(writer, &view.name_group, revision)?;
    for identifier in &view.env_identifiers {
        writer.text_element("ipxact:envIdentifier", identifier)?;
    }
    writer.end("ipxact:view")
}
