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

//! Component writer.

use super::address_space::write_address_space;
use super::common::{
    write_choices, write_document_start, write_kactus_version, write_parameters,
    write_vlnv_elements,
};
use super::kactus::write_com_properties;
use super::memory::write_memory_map;
use super::mode::write_mode;
use super::port::{write_port, write_view};
use super::power_domain::write_power_domains;
use crate::emit::XmlWriterExt;
use crate::error::XmlResult;
use ipxact_core::model::Component;
use ipxact_core::Revision;
use quick_xml::Writer;
use std::io::Write;

const ROOT: &str = "ipxact:component";

fn write_model<W: Write>(writer: &mut Writer<W>, component: &Component, revision: Revision) -> XmlResult<()> {
    if component.views.is_empty() && component.ports.is_empty() {
        return Ok(());
    }

    writer.start("ipxact:model")?;
    if !component.views.is_empty() {
        writer.start("ipxact:views")?;
        for view in &component.views {
            write_view(writer, view, revision)?;
        }
        writer.end("ipxact:views")?;
    }
    if !component.ports.is_empty() {
        writer.start("ipxact:ports")?;
        for port in &component.ports {
            write_port(writer, port, revision)?;
        }
        writer.end("ipxact:ports")?;
    }
    writer.end("ipxact:model")
}

fn write_component_extensions<W: Write>(writer: &mut Writer<W>, component: &Component) -> XmlResult<()> {
    if component.vendor_extensions.is_empty()
        && component.kactus_version.is_empty()
        && component.properties.is_empty()
    {
        return Ok(());
    }

    writer.start("ipxact:vendorExtensions")?;
    for extension in &component.vendor_extensions {
        writer.extension(extension)?;
    }
    write_kactus_version(writer, &component.kactus_version)?;
    write_com_properties(writer, &component.properties)?;
    writer.end("ipxact:vendorExtensions")
}

/// Writes the `ipxact:component` root with its top comments.
pub fn write_component<W: Write>(writer: &mut Writer<W>, component: &Component) -> XmlResult<()> {
    let revision = component.revision;
    let group = &component.name_group;
    let std22 = revision.is_std22();

    write_document_start(writer, ROOT, revision, &component.top_comments)?;
    write_vlnv_elements(writer, &component.vlnv)?;

    if std22 {
        writer.optional_element("ipxact:displayName", &group.display_name)?;
        writer.optional_element("ipxact:shortDescription", &group.short_description)?;
        writer.optional_element("ipxact:description", &group.description)?;
        write_power_domains(writer, &component.power_domains)?;

        if !component.modes.is_empty() {
            writer.start("ipxact:modes")?;
            for mode in &component.modes {
                write_mode(writer, mode)?;
            }
            writer.end("ipxact:modes")?;
        }
    }

    if !component.address_spaces.is_empty() {
        writer.start("ipxact:addressSpaces")?;
        for space in &component.address_spaces {
            write_address_space(writer, space, revision)?;
        }
        writer.end("ipxact:addressSpaces")?;
    }

    if !component.memory_maps.is_empty() {
        writer.start("ipxact:memoryMaps")?;
        for map in &component.memory_maps {
            write_memory_map(writer, map, revision)?;
        }
        writer.end("ipxact:memoryMaps")?;
    }

    write_model(writer, component, revision)?;
    write_choices(writer, &component.choices)?;
    if !std22 {
        writer.optional_element("ipxact:description", &group.description)?;
    }
    write_parameters(writer, &component.parameters, revision)?;
    write_component_extensions(writer, component)?;
    writer.end(ROOT)
}
