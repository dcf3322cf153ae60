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

//! Bus definition validation.

use super::choice::ChoiceValidator;
use super::common::{has_duplicates, is_empty_or_non_negative, is_optional_bool, parser_for, report_duplicates};
use super::parameter::ParameterValidator;
use crate::Validator;
use ipxact_core::model::BusDefinition;
use ipxact_core::{has_valid_name, DocumentLibrary};

#[derive(Clone, Copy)]
pub struct BusDefinitionValidator<'a> {
    library: &'a dyn DocumentLibrary,
}

impl<'a> BusDefinitionValidator<'a> {
    pub fn new(library: &'a dyn DocumentLibrary) -> Self {
        Self { library }
    }

    fn is_bool(value: &str) -> bool {
        matches!(value, "true" | "false")
    }

    pub fn has_valid_extends(&self, bus: &BusDefinition) -> bool {
        bus.extends.as_ref().map_or(true, |extends| {
            !extends.same_identity(&bus.vlnv)
                && self
                    .library
                    .resolve(extends)
                    .is_some_and(|document| document.as_bus_definition().is_some())
        })
    }

    pub fn has_valid_system_groups(&self, bus: &BusDefinition) -> bool {
        !has_duplicates(bus.system_group_names.iter().map(String::as_str))
            && bus.system_group_names.iter().all(|name| has_valid_name(name))
    }
}

impl Validator<BusDefinition> for BusDefinitionValidator<'_> {
    fn validate(&self, bus: &BusDefinition) -> bool {
        let parser = parser_for(&bus.parameters);
        bus.vlnv.is_valid()
            && Self::is_bool(&bus.direct_connection)
            && Self::is_bool(&bus.is_addressable)
            && is_optional_bool(&bus.broadcast)
            && is_empty_or_non_negative(&parser, &bus.max_initiators)
            && is_empty_or_non_negative(&parser, &bus.max_targets)
            && self.has_valid_extends(bus)
            && self.has_valid_system_groups(bus)
            && ChoiceValidator::new(&parser).validate_list(&bus.choices)
            && ParameterValidator::new(&parser, &bus.choices, bus.revision).validate_list(&bus.parameters)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, bus: &BusDefinition, context: &str) {
        let parser = parser_for(&bus.parameters);
        bus.vlnv.find_errors(errors, context);

        if !Self::is_bool(&bus.direct_connection) {
            errors.push(format!(
                "Invalid direct connection value '{}' set within {}. Value must be true or false.",
                bus.direct_connection, context
            ));
        }
        if !Self::is_bool(&bus.is_addressable) {
            errors.push(format!(
                "Invalid addressable value '{}' set within {}. Value must be true or false.",
                bus.is_addressable, context
            ));
        }
        if !is_optional_bool(&bus.broadcast) {
            errors.push(format!("Invalid broadcast value '{}' set within {}.", bus.broadcast, context));
        }
        let (initiators, targets) = if bus.revision.is_std22() {
            ("initiators", "targets")
        } else {
            ("masters", "slaves")
        };
        if !is_empty_or_non_negative(&parser, &bus.max_initiators) {
            errors.push(format!(
                "Invalid maximum number of {} '{}' set within {}.",
                initiators, bus.max_initiators, context
            ));
        }
        if !is_empty_or_non_negative(&parser, &bus.max_targets) {
            errors.push(format!(
                "Invalid maximum number of {} '{}' set within {}.",
                targets, bus.max_targets, context
            ));
        }

        if !self.has_valid_extends(bus) {
            if let Some(extends) = &bus.extends {
                errors.push(format!("The extended bus definition {} does not exist for {}.", extends, context));
            }
        }

        report_duplicates(errors, bus.system_group_names.iter().map(String::as_str), |name| {
            format!("System group name {} within {} is not unique.", name, context)
        });
        for name in bus.system_group_names.iter().filter(|name| !has_valid_name(name)) {
            errors.push(format!("Invalid system group name '{}' set within {}.", name, context));
        }

        ChoiceValidator::new(&parser).find_errors_in_list(errors, &bus.choices, context);
        ParameterValidator::new(&parser, &bus.choices, bus.revision).find_errors_in_list(
            errors,
            &bus.parameters,
            context,
        );
    }
}
