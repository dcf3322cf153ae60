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

//! Power domain writer.

use super::common::{write_name_group, write_parameters, write_vendor_extensions};
use crate::emit::XmlWriterExt;
use crate::error::XmlResult;
use ipxact_core::model::PowerDomain;
use ipxact_core::Revision;
use quick_xml::Writer;
use std::io::Write;

/// Writes an `ipxact:powerDomain` element with 2022 rules.
pub fn write_power_domain<W: Write>(
    writer: &mut Writer<W>,
    domain: &PowerDomain,
) -> XmlResult<()> {
    writer.start("ipxact:powerDomain")?;
    write_name_group(writer, &domain.name_group, Revision::Std22)?;
    writer.optional_element("ipxact:alwaysOn", &domain.always_on)?;
    writer.optional_element("ipxact:subDomainOf", &domain.sub_domain_of)?;
    write_parameters(writer, &domain.parameters, Revision::Std22)?;
    write_vendor_extensions(writer, &domain.vendor_extensions)?;
    writer.end("ipxact:powerDomain")
}

pub fn write_power_domains<W: Write>(
    writer: &mut Writer<W>,
    domains: &[PowerDomain],
) -> XmlResult<()> {
    if domains.is_empty() {
        return Ok(());
    }
    writer.start("ipxact:powerDomains")?;
    for domain in domains {
        write_power_domain(writer, domain)?;
    }
    writer.end("ipxact:powerDomains")
}
