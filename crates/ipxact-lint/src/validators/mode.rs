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

//! Mode validation: port conditions, field conditions and the mode condition.

use super::common::{bounds, has_duplicates};
use crate::Validator;
use ipxact_core::model::{Component, Field, FieldSlice, Mode, PortSlice};
use ipxact_core::{duplicate_names, has_valid_name, Evaluation, ExpressionParser};

/// Evaluates mode conditions.
///
/// `$ipxact_port_value(x)`, `$ipxact_field_value(x)` and `$ipxact_mode_condition(x)`
/// stand for `1` when `x` names a port condition, field condition or mode in scope.
/// Any other reference makes the whole condition invalid.
pub struct ModeConditionParser<'a> {
    inner: &'a dyn ExpressionParser,
    port_slices: &'a [PortSlice],
    field_slices: &'a [FieldSlice],
    modes: &'a [Mode],
}

impl<'a> ModeConditionParser<'a> {
    pub fn new(
        inner: &'a dyn ExpressionParser,
        port_slices: &'a [PortSlice],
        field_slices: &'a [FieldSlice],
        modes: &'a [Mode],
    ) -> Self {
        Self {
            inner,
            port_slices,
            field_slices,
            modes,
        }
    }

    fn references(&self, function: &str, name: &str) -> bool {
        match function {
            "$ipxact_port_value" => self.port_slices.iter().any(|s| s.name_group.name == name),
            "$ipxact_field_value" => self.field_slices.iter().any(|s| s.name() == name),
            "$ipxact_mode_condition" => self.modes.iter().any(|m| m.name() == name),
            _ => false,
        }
    }

    /// Condition text with every reference replaced, or `None` on a bad reference.
    fn substitute(&self, expression: &str) -> Option<String> {
        let mut output = String::with_capacity(expression.len());
        let mut rest = expression;
        while let Some(start) = rest.find("$ipxact_") {
            output.push_str(&rest[..start]);
            let call = &rest[start..];
            let open = call.find('(')?;
            let close = call.find(')').filter(|close| *close > open)?;
            let name = call[open + 1..close].trim();
            if name.is_empty() || !self.references(call[..open].trim_end(), name) {
                return None;
            }
            output.push('1');
            rest = &call[close + 1..];
        }
        output.push_str(rest);
        Some(output)
    }
}

impl ExpressionParser for ModeConditionParser<'_> {
    fn parse_expression(&self, expression: &str) -> Evaluation {
        match self.substitute(expression) {
            Some(substituted) => self.inner.parse_expression(&substituted),
            None => Evaluation::invalid(),
        }
    }
}

/// Validates port conditions against the ports of a component.
#[derive(Clone, Copy)]
pub struct PortSliceValidator<'a> {
    parser: &'a dyn ExpressionParser,
    component: &'a Component,
}

impl<'a> PortSliceValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser, component: &'a Component) -> Self {
        Self { parser, component }
    }

    pub fn has_valid_port_reference(&self, slice: &PortSlice) -> bool {
        !slice.port_ref.is_empty() && self.component.port(&slice.port_ref).is_some()
    }

    fn has_valid_bound(&self, bound: &str) -> bool {
        bound.is_empty() || self.parser.evaluate_i64(bound).is_some()
    }

    /// Given bounds lie within the referenced port's vector, `[0, 0]` for scalar ports.
    pub fn has_range_within_port(&self, slice: &PortSlice) -> bool {
        let Some(port) = self.component.port(&slice.port_ref) else {
            return true;
        };
        let (low, high) = match port.vector_bounds() {
            Some((left, right)) => match bounds(self.parser, left, right) {
                Some(span) => span,
                None => return true,
            },
            None => (0, 0),
        };
        [&slice.left, &slice.right]
            .iter()
            .filter(|bound| !bound.is_empty())
            .all(|bound| {
                self.parser
                    .evaluate_i64(bound)
                    .map_or(true, |value| (low..=high).contains(&value))
            })
    }
}

impl Validator<PortSlice> for PortSliceValidator<'_> {
    fn validate(&self, slice: &PortSlice) -> bool {
        has_valid_name(&slice.name_group.name)
            && self.has_valid_port_reference(slice)
            && self.has_valid_bound(&slice.left)
            && self.has_valid_bound(&slice.right)
            && self.has_range_within_port(slice)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, slice: &PortSlice, context: &str) {
        let name = slice.name_group.name.as_str();
        if !has_valid_name(name) {
            errors.push(format!("Invalid name '{}' set for port condition within {}.", name, context));
        }
        if slice.port_ref.is_empty() {
            errors.push(format!("No port reference set for '{}' within {}.", name, context));
        } else if !self.has_valid_port_reference(slice) {
            errors.push(format!(
                "Port '{}' in port condition '{}' in {} could not be found in the component.",
                slice.port_ref, name, context
            ));
        }
        if !self.has_valid_bound(&slice.left) {
            errors.push(format!(
                "Left range in port condition '{}' is not a valid expression in {}.",
                name, context
            ));
        }
        if !self.has_valid_bound(&slice.right) {
            errors.push(format!(
                "Right range in port condition '{}' is not a valid expression in {}.",
                name, context
            ));
        }
        if !self.has_range_within_port(slice) {
            errors.push(format!(
                "Range in port condition '{}' is outside the bounds of port '{}' in {}.",
                name, slice.port_ref, context
            ));
        }
    }
}

/// Validates field conditions by walking their reference chain into the component.
#[derive(Clone, Copy)]
pub struct FieldSliceValidator<'a> {
    parser: &'a dyn ExpressionParser,
    component: &'a Component,
}

impl<'a> FieldSliceValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser, component: &'a Component) -> Self {
        Self { parser, component }
    }

    /// Resolves address space (through its local memory map) or memory map,
    /// then address block, register and field. Stops at the first missing link.
    pub fn find_field(&self, slice: &FieldSlice) -> Option<&'a Field> {
        let map = if !slice.address_space_ref.is_empty() {
            self.component
                .address_space(&slice.address_space_ref)?
                .local_memory_map
                .as_ref()?
        } else if !slice.memory_map_ref.is_empty() {
            self.component.memory_map(&slice.memory_map_ref)?
        } else {
            return None;
        };
        map.address_block(&slice.address_block_ref)?
            .register(&slice.register_ref)?
            .field(&slice.field_ref)
    }

    pub fn has_valid_field_reference(&self, slice: &FieldSlice) -> bool {
        self.find_field(slice).is_some()
    }

    /// `bound` lies in `[bitOffset, bitOffset + bitWidth - 1]` of the referenced field.
    fn is_within_field(&self, slice: &FieldSlice, bound: &str) -> bool {
        let Some(field) = self.find_field(slice) else {
            return false;
        };
        let lsb = self.parser.evaluate_i64(&field.bit_offset);
        let width = self.parser.evaluate_i64(&field.bit_width);
        match (lsb, width, self.parser.evaluate_i64(bound)) {
            (Some(lsb), Some(width), Some(value)) => {
                match lsb.checked_add(width).and_then(|end| end.checked_sub(1)) {
                    Some(msb) => (lsb..=msb).contains(&value),
                    None => false,
                }
            }
            _ => false,
        }
    }

    /// Left bound requires the right bound and must fall inside the field.
    pub fn has_valid_left_range(&self, slice: &FieldSlice) -> bool {
        slice.left.is_empty() || (!slice.right.is_empty() && self.is_within_field(slice, &slice.left))
    }

    /// Right bound requires the left bound and must fall inside the field.
    pub fn has_valid_right_range(&self, slice: &FieldSlice) -> bool {
        slice.right.is_empty() || (!slice.left.is_empty() && self.is_within_field(slice, &slice.right))
    }
}

impl Validator<FieldSlice> for FieldSliceValidator<'_> {
    fn validate(&self, slice: &FieldSlice) -> bool {
        has_valid_name(slice.name())
            && self.has_valid_field_reference(slice)
            && self.has_valid_left_range(slice)
            && self.has_valid_right_range(slice)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, slice: &FieldSlice, context: &str) {
        let name = slice.name();
        if !has_valid_name(name) {
            errors.push(format!("Invalid name '{}' set for field condition within {}.", name, context));
        }
        if !self.has_valid_field_reference(slice) {
            errors.push(format!(
                "Field reference in condition '{}' is not valid in {}.",
                name, context
            ));
        }
        if !self.has_valid_left_range(slice) {
            errors.push(format!("Left range in field condition '{}' is not valid in {}.", name, context));
        }
        if !self.has_valid_right_range(slice) {
            errors.push(format!("Right range in field condition '{}' is not valid in {}.", name, context));
        }
    }
}

/// Validates the modes of a component.
#[derive(Clone, Copy)]
pub struct ModeValidator<'a> {
    parser: &'a dyn ExpressionParser,
    component: &'a Component,
    port_slice: PortSliceValidator<'a>,
    field_slice: FieldSliceValidator<'a>,
}

impl<'a> ModeValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser, component: &'a Component) -> Self {
        Self {
            parser,
            component,
            port_slice: PortSliceValidator::new(parser, component),
            field_slice: FieldSliceValidator::new(parser, component),
        }
    }

    pub fn has_valid_condition(&self, mode: &Mode) -> bool {
        if mode.condition.is_empty() {
            return true;
        }
        let condition = ModeConditionParser::new(
            self.parser,
            &mode.port_slices,
            &mode.field_slices,
            &self.component.modes,
        );
        condition.parse_expression(&mode.condition).valid
    }

    pub fn validate_list(&self, modes: &[Mode]) -> bool {
        !has_duplicates(modes.iter().map(Mode::name)) && modes.iter().all(|m| self.validate(m))
    }

    pub fn find_errors_in_list(&self, errors: &mut Vec<String>, modes: &[Mode], context: &str) {
        for duplicate in duplicate_names(modes.iter().map(Mode::name)) {
            errors.push(format!("Mode name {} within {} is not unique.", duplicate, context));
        }
        for mode in modes {
            self.find_errors_in(errors, mode, context);
        }
    }
}

impl Validator<Mode> for ModeValidator<'_> {
    fn validate(&self, mode: &Mode) -> bool {
        has_valid_name(mode.name())
            && !has_duplicates(mode.port_slices.iter().map(|s| s.name_group.name.as_str()))
            && mode.port_slices.iter().all(|s| self.port_slice.validate(s))
            && !has_duplicates(mode.field_slices.iter().map(FieldSlice::name))
            && mode.field_slices.iter().all(|s| self.field_slice.validate(s))
            && self.has_valid_condition(mode)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, mode: &Mode, context: &str) {
        let name = mode.name();
        if !has_valid_name(name) {
            errors.push(format!("Invalid name '{}' set for mode within {}.", name, context));
        }

        let item = format!("mode '{}'", name);
        for duplicate in duplicate_names(mode.port_slices.iter().map(|s| s.name_group.name.as_str())) {
            errors.push(format!(
                "Port condition name '{}' is not unique within {}.",
                duplicate, item
            ));
        }
        for slice in &mode.port_slices {
            self.port_slice.find_errors_in(errors, slice, &item);
        }

        for duplicate in duplicate_names(mode.field_slices.iter().map(FieldSlice::name)) {
            errors.push(format!(
                "Field condition name '{}' is not unique within {}.",
                duplicate, item
            ));
        }
        for slice in &mode.field_slices {
            self.field_slice.find_errors_in(errors, slice, &item);
        }

        if !self.has_valid_condition(mode) {
            errors.push(format!("Condition is not a valid expression within {}.", item));
        }
    }
}
