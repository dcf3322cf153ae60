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

//! Builder pattern for creating customizable test fixtures.

use ipxact_core::model::{
    AbstractionDefinition, Choice, Component, Enumeration, Field, MemoryBlock, MemoryMap,
    Parameter, Port, PortAbstraction, Register, View, Wire, WireAbstraction, WirePort,
};
use ipxact_core::{Document, DocumentType, Revision, Vlnv};

/// Builder for component fixtures.
///
/// # Examples
///
/// ```
/// use ipxact_test::fixtures::builders::ComponentBuilder;
///
/// let component = ComponentBuilder::new("uart")
///     .register("regs", "ctrl", "0", "32")
///     .field("enable", "0", "1")
///     .build();
///
/// let block = component.memory_maps[0].address_block("block").unwrap();
/// assert_eq!(block.registers[0].fields.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ComponentBuilder {
    component: Component,
}

impl ComponentBuilder {
    /// Creates a 2014 component `TUT:TestLibrary:<name>:1.0`.
    pub fn new(name: &str) -> Self {
        let vlnv = Vlnv::new(DocumentType::Component, "TUT", "TestLibrary", name, "1.0");
        Self {
            component: Component::new(vlnv, Revision::Std14),
        }
    }

    pub fn revision(mut self, revision: Revision) -> Self {
        self.component.revision = revision;
        self
    }

    pub fn parameter(mut self, name: &str, value: &str) -> Self {
        let id = format!("uuid_{}", name.to_lowercase());
        self.component
            .parameters
            .push(Parameter::new(name, value).with_id(id));
        self
    }

    /// Adds a parameter restricted to the named choice.
    pub fn choice_parameter(mut self, name: &str, value: &str, choice: &str) -> Self {
        let mut parameter = Parameter::new(name, value);
        parameter.choice_ref = choice.to_string();
        self.component.parameters.push(parameter);
        self
    }

    pub fn choice(mut self, name: &str, values: &[&str]) -> Self {
        let choice = values
            .iter()
            .fold(Choice::new(name), |choice, value| {
                choice.with_enumeration(Enumeration::new(*value))
            });
        self.component.choices.push(choice);
        self
    }

    pub fn view(mut self, name: &str) -> Self {
        self.component.views.push(View::new(name));
        self
    }

    pub fn wire_port(mut self, name: &str, direction: &str) -> Self {
        self.component.ports.push(Port::wire(name, Wire::new(direction)));
        self
    }

    /// Adds a register to the first address block of `map`, creating both as needed.
    pub fn register(mut self, map: &str, name: &str, offset: &str, size: &str) -> Self {
        let index = match self.component.memory_maps.iter().position(|m| m.name() == map) {
            Some(index) => index,
            None => {
                let mut memory_map = MemoryMap::new(map);
                let mut block = MemoryBlock::address_block("block", "0");
                if let Some(data) = block.as_address_block_mut() {
                    data.range = "4096".to_string();
                    data.width = "32".to_string();
                }
                memory_map.blocks.push(block);
                self.component.memory_maps.push(memory_map);
                self.component.memory_maps.len() - 1
            }
        };

        if let Some(data) = self.component.memory_maps[index]
            .blocks
            .first_mut()
            .and_then(MemoryBlock::as_address_block_mut)
        {
            data.registers.push(Register::new(name, offset, size));
        }
        self
    }

    /// Adds a field to the most recently added register.
    pub fn field(mut self, name: &str, offset: &str, width: &str) -> Self {
        let register = self
            .component
            .memory_maps
            .last_mut()
            .and_then(|m| m.blocks.first_mut())
            .and_then(MemoryBlock::as_address_block_mut)
            .and_then(|data| data.registers.last_mut());
        if let Some(register) = register {
            register.fields.push(Field::new(name, offset, width));
        }
        self
    }

    pub fn build(self) -> Component {
        self.component
    }

    pub fn build_document(self) -> Document {
        Document::Component(self.component)
    }
}

/// Builder for wire-only abstraction definitions.
#[derive(Debug, Clone)]
pub struct AbstractionBuilder {
    definition: AbstractionDefinition,
}

impl AbstractionBuilder {
    pub fn new(name: &str, revision: Revision) -> Self {
        let vlnv = Vlnv::new(DocumentType::AbstractionDefinition, "TUT", "TestLibrary", name, "1.0");
        let mut definition = AbstractionDefinition::new(vlnv, revision);
        definition.bus_type = Vlnv::new(DocumentType::BusDefinition, "TUT", "TestLibrary", "bus", "1.0");
        Self { definition }
    }

    /// Adds a wire port driven by the initiator with the given width.
    pub fn wire_port(mut self, logical_name: &str, width: &str) -> Self {
        let mut port = PortAbstraction::new(logical_name);
        port.wire = Some(WireAbstraction {
            master_port: Some(WirePort {
                width: width.to_string(),
                direction: "out".to_string(),
                ..WirePort::default()
            }),
            ..WireAbstraction::default()
        });
        self.definition.ports.push(port);
        self
    }

    pub fn parameter(mut self, name: &str, value: &str) -> Self {
        self.definition.parameters.push(Parameter::new(name, value));
        self
    }

    pub fn build(self) -> AbstractionDefinition {
        self.definition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_field_chain() {
        let component = ComponentBuilder::new("c")
            .register("regs", "a", "0", "32")
            .field("f0", "0", "1")
            .register("regs", "b", "4", "32")
            .field("f1", "0", "8")
            .build();

        assert_eq!(component.memory_maps.len(), 1);
        let block = component.memory_maps[0].address_block("block").unwrap();
        assert_eq!(block.registers.len(), 2);
        assert_eq!(block.registers[1].fields[0].name(), "f1");
    }

    #[test]
    fn test_choice_parameter() {
        let component = ComponentBuilder::new("c")
            .choice("modes", &["1", "2"])
            .choice_parameter("MODE", "1", "modes")
            .build();
        assert!(component.choices[0].has_enumeration("2"));
        assert_eq!(component.parameters[0].choice_ref, "modes");
    }

    #[test]
    fn test_abstraction_builder() {
        let definition = AbstractionBuilder::new("abs", Revision::Std22)
            .wire_port("data", "8")
            .build();
        assert_eq!(definition.revision, Revision::Std22);
        assert!(definition.port("data").is_some());
    }
}
