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

//! Component port validation.

use super::common::{is_empty_or_valid, is_positive, is_valid_presence};
use crate::Validator;
use ipxact_core::model::{Port, Transactional, View, Wire, WireTypeDef};
use ipxact_core::{duplicate_names, has_valid_name, ExpressionParser, Revision};

pub const DIRECTIONS: [&str; 4] = ["in", "out", "inout", "phantom"];

pub const INITIATIVES: [&str; 4] = ["requires", "provides", "both", "phantom"];

/// True when the type definitions of a wire are consistent with the views.
///
/// A definition without view references must be alone, every referenced view
/// must exist and no view may be referenced twice.
pub fn has_valid_type_definitions(type_defs: &[WireTypeDef], views: &[View]) -> bool {
    let mut errors = Vec::new();
    find_errors_in_type_definitions(&mut errors, type_defs, views, "");
    errors.is_empty()
}

pub fn find_errors_in_type_definitions(
    errors: &mut Vec<String>,
    type_defs: &[WireTypeDef],
    views: &[View],
    item: &str,
) {
    if type_defs.len() > 1 {
        for definition in type_defs.iter().filter(|d| d.view_refs.is_empty()) {
            errors.push(format!(
                "Type definition {} in {} references no view and must be the only type definition",
                definition.type_name, item
            ));
        }
    }

    for view in type_defs.iter().flat_map(|d| d.view_refs.iter()) {
        if !views.iter().any(|v| v.name() == view) {
            errors.push(format!("View {} referenced by type definition in {} does not exist", view, item));
        }
    }

    for view in duplicate_names(type_defs.iter().flat_map(|d| d.view_refs.iter().map(String::as_str))) {
        errors.push(format!(
            "View {} is referenced by more than one type definition in {}",
            view, item
        ));
    }
}

#[derive(Clone, Copy)]
pub struct PortValidator<'a> {
    parser: &'a dyn ExpressionParser,
    views: &'a [View],
    revision: Revision,
}

impl<'a> PortValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser, views: &'a [View], revision: Revision) -> Self {
        Self {
            parser,
            views,
            revision,
        }
    }

    /// Exactly one of wire and transactional is set.
    pub fn has_valid_kind(&self, port: &Port) -> bool {
        port.wire.is_some() != port.transactional.is_some()
    }

    fn has_valid_bounds(&self, left: &str, right: &str) -> bool {
        self.parser.evaluate_i64(left).is_some() && self.parser.evaluate_i64(right).is_some()
    }

    pub fn has_valid_wire(&self, wire: &Wire) -> bool {
        DIRECTIONS.contains(&wire.direction.as_str())
            && wire.vectors.iter().all(|v| self.has_valid_bounds(&v.left, &v.right))
            && is_empty_or_valid(self.parser, &wire.default_value)
            && has_valid_type_definitions(&wire.type_defs, self.views)
    }

    pub fn has_valid_transactional(&self, transactional: &Transactional) -> bool {
        INITIATIVES.contains(&transactional.initiative.as_str())
            && (transactional.bus_width.is_empty() || is_positive(self.parser, &transactional.bus_width))
    }

    pub fn validate_list(&self, ports: &[Port]) -> bool {
        duplicate_names(ports.iter().map(Port::name)).is_empty() && ports.iter().all(|p| self.validate(p))
    }

    pub fn find_errors_in_list(&self, errors: &mut Vec<String>, ports: &[Port], context: &str) {
        for duplicate in duplicate_names(ports.iter().map(Port::name)) {
            errors.push(format!("Port name {} within {} is not unique.", duplicate, context));
        }
        for port in ports {
            self.find_errors_in(errors, port, context);
        }
    }

    fn find_errors_in_wire(&self, errors: &mut Vec<String>, wire: &Wire, item: &str, context: &str) {
        if !DIRECTIONS.contains(&wire.direction.as_str()) {
            errors.push(format!(
                "Invalid direction '{}' set for {} within {}",
                wire.direction, item, context
            ));
        }
        if wire.vectors.iter().any(|v| !self.has_valid_bounds(&v.left, &v.right)) {
            errors.push(format!("Invalid vector set for {} within {}", item, context));
        }
        if !is_empty_or_valid(self.parser, &wire.default_value) {
            errors.push(format!(
                "Invalid default value '{}' set for {} within {}",
                wire.default_value, item, context
            ));
        }
        find_errors_in_type_definitions(errors, &wire.type_defs, self.views, item);
    }

    fn find_errors_in_transactional(
        &self,
        errors: &mut Vec<String>,
        transactional: &Transactional,
        item: &str,
        context: &str,
    ) {
        if !INITIATIVES.contains(&transactional.initiative.as_str()) {
            errors.push(format!(
                "Invalid initiative '{}' set for {} within {}",
                transactional.initiative, item, context
            ));
        }
        if !transactional.bus_width.is_empty() && !is_positive(self.parser, &transactional.bus_width) {
            errors.push(format!(
                "Invalid bus width '{}' set for {} within {}",
                transactional.bus_width, item, context
            ));
        }
    }
}

impl Validator<Port> for PortValidator<'_> {
    fn validate(&self, port: &Port) -> bool {
        has_valid_name(port.name())
            && is_valid_presence(self.parser, &port.is_present, self.revision)
            && self.has_valid_kind(port)
            && port.wire.as_ref().map_or(true, |w| self.has_valid_wire(w))
            && port
                .transactional
                .as_ref()
                .map_or(true, |t| self.has_valid_transactional(t))
            && port.arrays.iter().all(|a| self.has_valid_bounds(&a.left, &a.right))
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, port: &Port, context: &str) {
        let name = port.name();
        if !has_valid_name(name) {
            errors.push(format!("Invalid name '{}' set for port within {}", name, context));
        }
        if !is_valid_presence(self.parser, &port.is_present, self.revision) {
            errors.push(format!("Invalid isPresent set for port {} within {}", name, context));
        }
        if !self.has_valid_kind(port) {
            errors.push(format!(
                "Port {} within {} must be either a wire or a transactional port",
                name, context
            ));
        }

        let item = format!("port {}", name);
        if let Some(wire) = &port.wire {
            self.find_errors_in_wire(errors, wire, &item, context);
        }
        if let Some(transactional) = &port.transactional {
            self.find_errors_in_transactional(errors, transactional, &item, context);
        }
        if port.arrays.iter().any(|a| !self.has_valid_bounds(&a.left, &a.right)) {
            errors.push(format!("Invalid array set for port {} within {}", name, context));
        }
    }
}
