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

//! Entity writers.
//!
//! Every writer emits one element (with its nested content) into a
//! `quick_xml::Writer`, omitting optional elements whose value is empty and
//! branching on the target [`Revision`](ipxact_core::Revision) where the two
//! schemas differ. Writers never validate.

mod abstraction;
mod address_space;
mod bus_definition;
mod common;
mod component;
mod kactus;
mod memory;
mod mode;
mod port;
mod power_domain;

pub use abstraction::{
    write_abstraction_definition, write_port_abstraction, write_qualifier,
    write_transactional_abstraction, write_wire_abstraction,
};
pub use address_space::{write_address_space, write_segment};
pub use bus_definition::write_bus_definition;
pub use common::{
    write_choice, write_choices, write_name_group, write_parameter, write_parameter_list,
    write_parameters, write_vendor_extensions, write_vlnv_attributes, write_vlnv_elements,
};
pub use component::write_component;
pub use kactus::{write_api_definition, write_api_function, write_com_definition, write_com_property};
pub use memory::{write_field, write_memory_block, write_memory_map, write_register};
pub use mode::{write_field_slice, write_mode};
pub use port::{write_port, write_view};
pub use power_domain::{write_power_domain, write_power_domains};

pub(crate) use common::{write_document_start, write_kactus_version};

use crate::config::ToXmlConfig;
use crate::error::XmlResult;
use quick_xml::Writer;
use std::io::Cursor;

pub(crate) fn new_writer(config: &ToXmlConfig) -> Writer<Cursor<Vec<u8>>> {
    if config.pretty {
        Writer::new_with_indent(Cursor::new(Vec::new()), config.indent_char, config.indent)
    } else {
        Writer::new(Cursor::new(Vec::new()))
    }
}

/// Runs `write` against an in-memory writer and returns the produced text.
///
/// ```rust
/// use ipxact_core::model::PowerDomain;
/// use ipxact_xml::writer::{write_fragment, write_power_domain};
/// use ipxact_xml::ToXmlConfig;
///
/// let domain = PowerDomain::new("core");
/// let xml = write_fragment(&ToXmlConfig::compact(), |w| write_power_domain(w, &domain))?;
/// assert_eq!(xml, "<ipxact:powerDomain><ipxact:name>core</ipxact:name></ipxact:powerDomain>");
/// # Ok::<(), ipxact_xml::XmlError>(())
/// ```
pub fn write_fragment<F>(config: &ToXmlConfig, write: F) -> XmlResult<String>
where
    F: FnOnce(&mut Writer<Cursor<Vec<u8>>>) -> XmlResult<()>,
{
    let mut writer = new_writer(config);
    write(&mut writer)?;
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}
