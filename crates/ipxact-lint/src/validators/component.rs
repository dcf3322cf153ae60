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

//! Component validation.

use super::address_space::AddressSpaceValidator;
use super::choice::ChoiceValidator;
use super::common::{has_duplicates, parser_for, report_duplicates};
use super::kactus::ComPropertyValidator;
use super::memory::{FieldValidator, MemoryBlockValidator, MemoryMapValidator, RegisterValidator};
use super::mode::ModeValidator;
use super::parameter::ParameterValidator;
use super::port::PortValidator;
use super::power_domain::PowerDomainValidator;
use crate::Validator;
use ipxact_core::model::{AddressSpace, Component, MemoryMap, View};
use ipxact_core::{has_valid_name, ExpressionParser};

/// Validators for the parts of one component, sharing its parameter scope.
#[derive(Clone, Copy)]
struct ComponentParts<'a> {
    parameters: ParameterValidator<'a>,
    choices: ChoiceValidator<'a>,
    power_domains: PowerDomainValidator<'a>,
    modes: ModeValidator<'a>,
    address_spaces: AddressSpaceValidator<'a>,
    memory_maps: MemoryMapValidator<'a>,
    ports: PortValidator<'a>,
}

impl<'a> ComponentParts<'a> {
    fn new(parser: &'a dyn ExpressionParser, component: &'a Component) -> Self {
        let revision = component.revision;
        let parameters = ParameterValidator::new(parser, &component.choices, revision);
        let field = FieldValidator::new(parser, parameters, &component.modes, revision);
        let register = RegisterValidator::new(parser, field, parameters, &component.modes, revision);
        let block = MemoryBlockValidator::new(parser, register, parameters, revision);
        let memory_maps = MemoryMapValidator::new(parser, block, revision);

        Self {
            parameters,
            choices: ChoiceValidator::new(parser),
            power_domains: PowerDomainValidator::new(parser, parameters),
            modes: ModeValidator::new(parser, component),
            address_spaces: AddressSpaceValidator::new(parser, memory_maps, parameters, revision),
            memory_maps,
            ports: PortValidator::new(parser, &component.views, revision),
        }
    }
}

/// Validates a component against its own parameters.
#[derive(Clone, Copy, Default)]
pub struct ComponentValidator {
    property: ComPropertyValidator,
}

impl ComponentValidator {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_parts<R>(&self, component: &Component, check: impl FnOnce(ComponentParts<'_>) -> R) -> R {
        let parser = parser_for(&component.parameters);
        check(ComponentParts::new(&parser, component))
    }

    pub fn has_valid_views(&self, component: &Component) -> bool {
        !has_duplicates(component.views.iter().map(View::name))
            && component.views.iter().all(|v| has_valid_name(v.name()))
    }

    pub fn has_valid_properties(&self, component: &Component) -> bool {
        !has_duplicates(component.properties.iter().map(|p| p.name.as_str()))
            && component.properties.iter().all(|p| self.property.validate(p))
    }
}

impl Validator<Component> for ComponentValidator {
    fn validate(&self, component: &Component) -> bool {
        component.vlnv.is_valid()
            && self.has_valid_views(component)
            && self.has_valid_properties(component)
            && self.with_parts(component, |parts| {
                parts.power_domains.validate_list(&component.power_domains)
                    && parts.modes.validate_list(&component.modes)
                    && !has_duplicates(component.address_spaces.iter().map(AddressSpace::name))
                    && component.address_spaces.iter().all(|s| parts.address_spaces.validate(s))
                    && !has_duplicates(component.memory_maps.iter().map(MemoryMap::name))
                    && component.memory_maps.iter().all(|m| parts.memory_maps.validate(m))
                    && parts.ports.validate_list(&component.ports)
                    && parts.choices.validate_list(&component.choices)
                    && parts.parameters.validate_list(&component.parameters)
            })
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, component: &Component, context: &str) {
        component.vlnv.find_errors(errors, context);

        self.with_parts(component, |parts| {
            parts
                .power_domains
                .find_errors_in_list(errors, &component.power_domains, context);
            parts.modes.find_errors_in_list(errors, &component.modes, context);

            report_duplicates(errors, component.address_spaces.iter().map(AddressSpace::name), |name| {
                format!("Address space name {} within {} is not unique.", name, context)
            });
            for space in &component.address_spaces {
                parts.address_spaces.find_errors_in(errors, space, context);
            }

            report_duplicates(errors, component.memory_maps.iter().map(MemoryMap::name), |name| {
                format!("Memory map name {} within {} is not unique.", name, context)
            });
            for map in &component.memory_maps {
                parts.memory_maps.find_errors_in(errors, map, context);
            }

            report_duplicates(errors, component.views.iter().map(View::name), |name| {
                format!("View name {} within {} is not unique.", name, context)
            });
            for view in component.views.iter().filter(|v| !has_valid_name(v.name())) {
                errors.push(format!("Invalid name '{}' set for view within {}.", view.name(), context));
            }

            parts.ports.find_errors_in_list(errors, &component.ports, context);
            parts.choices.find_errors_in_list(errors, &component.choices, context);
            parts
                .parameters
                .find_errors_in_list(errors, &component.parameters, context);
        });

        report_duplicates(errors, component.properties.iter().map(|p| p.name.as_str()), |name| {
            format!("Property name {} within {} is not unique.", name, context)
        });
        for property in &component.properties {
            self.property.find_errors_in(errors, property, context);
        }
    }
}
