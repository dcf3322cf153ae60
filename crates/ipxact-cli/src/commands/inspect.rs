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

//! Inspect command - IP-XACT document structure visualization

use super::read_document;
use crate::error::CliError;
use colored::Colorize;
use ipxact_core::model::{
    AbstractionDefinition, ApiDefinition, BlockKind, BusDefinition, ComDefinition, Component,
    MemoryMap, Parameter,
};
use ipxact_core::Document;

/// Inspect and visualize the structure of an IP-XACT document.
///
/// Prints a tree of the document contents: parameters, memory maps down to
/// register fields, address spaces, ports, modes and the other elements of
/// the document kind.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed.
///
/// # Examples
///
/// ```no_run
/// use ipxact_cli::commands::inspect;
///
/// # fn main() -> Result<(), ipxact_cli::error::CliError> {
/// inspect("uart.xml")?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(file: &str) -> Result<(), CliError> {
    let document = read_document(file)?;

    let heading = format!(
        "IP-XACT {} {}",
        document.document_type(),
        document.vlnv()
    );
    println!("{}", heading.bold().underline());
    println!();
    println!("{}  {}", "Revision:".cyan(), document.revision());

    for line in render(&document) {
        println!("{}", line);
    }
    Ok(())
}

/// Render the document tree as plain text lines.
pub fn render(document: &Document) -> Vec<String> {
    let mut out = Tree::default();
    match document {
        Document::Component(component) => render_component(&mut out, component),
        Document::BusDefinition(bus) => render_bus(&mut out, bus),
        Document::AbstractionDefinition(abstraction) => render_abstraction(&mut out, abstraction),
        Document::ComDefinition(com) => render_com(&mut out, com),
        Document::ApiDefinition(api) => render_api(&mut out, api),
    }
    out.lines
}

#[derive(Default)]
struct Tree {
    lines: Vec<String>,
}

impl Tree {
    fn section(&mut self, title: &str, count: usize) {
        self.lines.push(String::new());
        self.lines.push(format!("{} ({})", title, count));
    }

    fn item(&mut self, depth: usize, text: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", "  ".repeat(depth), text.as_ref()));
    }
}

/// `key=value` pairs joined with spaces, skipping empty values.
fn attributes(pairs: &[(&str, &str)]) -> String {
    let shown: Vec<String> = pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    if shown.is_empty() {
        String::new()
    } else {
        format!(" [{}]", shown.join(" "))
    }
}

fn render_parameters(out: &mut Tree, parameters: &[Parameter]) {
    if parameters.is_empty() {
        return;
    }
    out.section("Parameters", parameters.len());
    for parameter in parameters {
        out.item(
            1,
            format!(
                "{} = {}{}",
                parameter.name(),
                parameter.value,
                attributes(&[("id", &parameter.value_id), ("type", &parameter.parameter_type)])
            ),
        );
    }
}

fn render_memory_map(out: &mut Tree, depth: usize, map: &MemoryMap) {
    out.item(
        depth,
        format!(
            "{}{}",
            map.name(),
            attributes(&[("aub", &map.address_unit_bits), ("shared", &map.shared)])
        ),
    );
    for block in &map.blocks {
        match &block.kind {
            BlockKind::AddressBlock(data) => {
                out.item(
                    depth + 1,
                    format!(
                        "block {}{}",
                        block.name(),
                        attributes(&[
                            ("base", &block.base_address),
                            ("range", &data.range),
                            ("width", &data.width),
                            ("usage", &data.usage),
                        ])
                    ),
                );
                for register in &data.registers {
                    out.item(
                        depth + 2,
                        format!(
                            "register {}{}",
                            register.name(),
                            attributes(&[("offset", &register.address_offset), ("size", &register.size)])
                        ),
                    );
                    for field in &register.fields {
                        out.item(
                            depth + 3,
                            format!(
                                "field {}{}",
                                field.name(),
                                attributes(&[
                                    ("offset", &field.bit_offset),
                                    ("width", &field.bit_width),
                                    ("access", &field.access),
                                ])
                            ),
                        );
                    }
                }
            }
            BlockKind::SubspaceMap(data) => {
                out.item(
                    depth + 1,
                    format!(
                        "subspace {}{}",
                        block.name(),
                        attributes(&[
                            ("base", &block.base_address),
                            ("initiator", &data.initiator_ref),
                            ("segment", &data.segment_ref),
                        ])
                    ),
                );
            }
        }
    }
}

fn render_component(out: &mut Tree, component: &Component) {
    render_parameters(out, &component.parameters);

    if !component.memory_maps.is_empty() {
        out.section("Memory maps", component.memory_maps.len());
        for map in &component.memory_maps {
            render_memory_map(out, 1, map);
        }
    }

    if !component.address_spaces.is_empty() {
        out.section("Address spaces", component.address_spaces.len());
        for space in &component.address_spaces {
            out.item(
                1,
                format!(
                    "{}{}",
                    space.name(),
                    attributes(&[
                        ("range", &space.range),
                        ("width", &space.width),
                        ("aub", &space.address_unit_bits),
                    ])
                ),
            );
            for segment in &space.segments {
                out.item(
                    2,
                    format!(
                        "segment {}{}",
                        segment.name(),
                        attributes(&[("offset", &segment.offset), ("range", &segment.range)])
                    ),
                );
            }
            if let Some(map) = &space.local_memory_map {
                render_memory_map(out, 2, map);
            }
        }
    }

    if !component.views.is_empty() {
        out.section("Views", component.views.len());
        for view in &component.views {
            if view.env_identifiers.is_empty() {
                out.item(1, view.name());
            } else {
                out.item(1, format!("{} ({})", view.name(), view.env_identifiers.join(", ")));
            }
        }
    }

    if !component.ports.is_empty() {
        out.section("Ports", component.ports.len());
        for port in &component.ports {
            let detail = if let Some(wire) = &port.wire {
                let bounds = wire
                    .vectors
                    .first()
                    .map(|vector| format!("[{}:{}]", vector.left, vector.right))
                    .unwrap_or_default();
                format!("wire {}{}", wire.direction, bounds)
            } else if let Some(transactional) = &port.transactional {
                format!(
                    "transactional{}",
                    attributes(&[
                        ("initiative", &transactional.initiative),
                        ("kind", &transactional.kind),
                        ("busWidth", &transactional.bus_width),
                    ])
                )
            } else {
                "unspecified".to_string()
            };
            out.item(1, format!("{}: {}", port.name(), detail));
        }
    }

    if !component.modes.is_empty() {
        out.section("Modes", component.modes.len());
        for mode in &component.modes {
            out.item(1, format!("{}{}", mode.name(), attributes(&[("condition", &mode.condition)])));
            for slice in &mode.port_slices {
                out.item(2, format!("port slice {} -> {}", slice.name_group.name, slice.port_ref));
            }
            for slice in &mode.field_slices {
                out.item(2, format!("field slice {} -> {}", slice.name(), slice.field_ref));
            }
        }
    }

    if !component.power_domains.is_empty() {
        out.section("Power domains", component.power_domains.len());
        for domain in &component.power_domains {
            out.item(
                1,
                format!(
                    "{}{}",
                    domain.name(),
                    attributes(&[("alwaysOn", &domain.always_on), ("subDomainOf", &domain.sub_domain_of)])
                ),
            );
        }
    }

    if !component.properties.is_empty() {
        out.section("Properties", component.properties.len());
        for property in &component.properties {
            out.item(
                1,
                format!("{}: {} = {}", property.name, property.property_type, property.default_value),
            );
        }
    }
}

fn render_bus(out: &mut Tree, bus: &BusDefinition) {
    out.section("Bus", 1);
    out.item(1, format!("directConnection: {}", bus.direct_connection));
    out.item(1, format!("isAddressable: {}", bus.is_addressable));
    if !bus.broadcast.is_empty() {
        out.item(1, format!("broadcast: {}", bus.broadcast));
    }
    if !bus.max_initiators.is_empty() {
        out.item(1, format!("maxInitiators: {}", bus.max_initiators));
    }
    if !bus.max_targets.is_empty() {
        out.item(1, format!("maxTargets: {}", bus.max_targets));
    }
    if let Some(extends) = &bus.extends {
        out.item(1, format!("extends: {}", extends));
    }
    if !bus.system_group_names.is_empty() {
        out.section("System groups", bus.system_group_names.len());
        for group in &bus.system_group_names {
            out.item(1, group);
        }
    }
    render_parameters(out, &bus.parameters);
}

fn render_abstraction(out: &mut Tree, abstraction: &AbstractionDefinition) {
    out.section("Abstraction", 1);
    out.item(1, format!("busType: {}", abstraction.bus_type));
    if let Some(extends) = &abstraction.extends {
        out.item(1, format!("extends: {}", extends));
    }

    if !abstraction.ports.is_empty() {
        out.section("Logical ports", abstraction.ports.len());
        for port in &abstraction.ports {
            let kind = if port.wire.is_some() {
                "wire"
            } else if port.transactional.is_some() {
                "transactional"
            } else {
                "unspecified"
            };
            let qualifiers: Vec<String> = port
                .qualifier()
                .map(|qualifier| qualifier.types().map(|t| t.to_string()).collect())
                .unwrap_or_default();
            if qualifiers.is_empty() {
                out.item(1, format!("{}: {}", port.logical_name(), kind));
            } else {
                out.item(
                    1,
                    format!("{}: {} ({})", port.logical_name(), kind, qualifiers.join(", ")),
                );
            }
        }
    }
    render_parameters(out, &abstraction.parameters);

    if !abstraction.assertions.is_empty() {
        out.section("Assertions", abstraction.assertions.len());
        for assertion in &abstraction.assertions {
            out.item(1, format!("{}: {}", assertion.name_group.name, assertion.assert));
        }
    }
}

fn render_com(out: &mut Tree, com: &ComDefinition) {
    out.section("Transfer types", com.transfer_types.len());
    for transfer_type in &com.transfer_types {
        out.item(1, transfer_type);
    }
    out.section("Properties", com.properties.len());
    for property in &com.properties {
        let required = if property.required { " (required)" } else { "" };
        out.item(
            1,
            format!(
                "{}: {} = {}{}",
                property.name, property.property_type, property.default_value, required
            ),
        );
    }
}

fn render_api(out: &mut Tree, api: &ApiDefinition) {
    out.section("API", 1);
    if !api.language.is_empty() {
        out.item(1, format!("language: {}", api.language));
    }
    if let Some(com) = &api.com_definition_ref {
        out.item(1, format!("comDefinitionRef: {}", com));
    }
    out.section("Data types", api.data_types.len());
    for data_type in &api.data_types {
        out.item(1, data_type);
    }
    out.section("Functions", api.functions.len());
    for function in &api.functions {
        let return_type = function
            .return_value
            .as_ref()
            .map(|value| value.value_type.as_str())
            .filter(|value| !value.is_empty())
            .unwrap_or("void");
        let parameters: Vec<String> = function
            .parameters
            .iter()
            .map(|parameter| format!("{} {}", parameter.value_type, parameter.name))
            .collect();
        out.item(
            1,
            format!("{} {}({})", return_type, function.name, parameters.join(", ")),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipxact_test::fixtures;

    #[test]
    fn test_render_memory_component() {
        let lines = render(&fixtures::memory_component());
        assert!(lines.iter().any(|line| line.starts_with("Memory maps (")));
        assert!(lines.iter().any(|line| line.trim_start().starts_with("register ")));
        assert!(lines.iter().any(|line| line.trim_start().starts_with("field ")));
    }

    #[test]
    fn test_render_com_definition() {
        let lines = render(&fixtures::com_definition());
        assert!(lines.iter().any(|line| line.starts_with("Transfer types (")));
    }

    #[test]
    fn test_render_every_fixture() {
        for (name, build) in fixtures::all() {
            let lines = render(&build());
            assert!(!lines.is_empty(), "fixture {} rendered nothing", name);
        }
    }

    #[test]
    fn test_attributes_skip_empty() {
        assert_eq!(attributes(&[("a", "1"), ("b", "")]), " [a=1]");
        assert_eq!(attributes(&[("a", "")]), "");
    }
}
