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

//! Memory map, memory block, register and field validation.

use super::common::{
    address_units, has_duplicates, is_empty_or_non_negative, is_empty_or_valid, is_non_negative,
    is_optional_bool, is_positive, is_valid_access, is_valid_presence, report_duplicates,
};
use super::parameter::ParameterValidator;
use crate::Validator;
use ipxact_core::model::{
    AccessPolicy, AddressBlockData, BlockKind, Field, MemoryBlock, MemoryMap, Mode, Register,
    SubspaceMapData,
};
use ipxact_core::{has_valid_name, ExpressionParser, Revision};

const MODIFIED_WRITE_VALUES: [&str; 9] = [
    "oneToClear",
    "oneToSet",
    "oneToToggle",
    "zeroToClear",
    "zeroToSet",
    "zeroToToggle",
    "clear",
    "set",
    "modify",
];

const BLOCK_USAGES: [&str; 3] = ["memory", "register", "reserved"];

const ENUMERATION_USAGES: [&str; 3] = ["read", "write", "read-write"];

const SHARED_VALUES: [&str; 3] = ["yes", "no", "undefined"];

/// Default `addressUnitBits`.
pub const DEFAULT_ADDRESS_UNIT_BITS: u64 = 8;

fn has_valid_access_policies(policies: &[AccessPolicy], modes: &[Mode]) -> bool {
    let mode_refs_valid = policies.iter().all(|policy| {
        is_valid_access(&policy.access)
            && policy
                .mode_refs
                .iter()
                .all(|r| modes.iter().any(|m| m.name() == r.reference))
    });
    mode_refs_valid && !mixes_default_policy(policies)
}

/// A policy without mode references applies to every mode and must be alone.
fn mixes_default_policy(policies: &[AccessPolicy]) -> bool {
    policies.len() > 1 && policies.iter().any(|p| p.mode_refs.is_empty())
}

fn find_errors_in_access_policies(
    errors: &mut Vec<String>,
    policies: &[AccessPolicy],
    modes: &[Mode],
    item: &str,
    context: &str,
) {
    for policy in policies {
        if !is_valid_access(&policy.access) {
            errors.push(format!(
                "Invalid access {} set in access policy of {} within {}",
                policy.access, item, context
            ));
        }
        for mode_ref in &policy.mode_refs {
            if !modes.iter().any(|m| m.name() == mode_ref.reference) {
                errors.push(format!(
                    "Mode {} referenced in access policy of {} could not be found within {}",
                    mode_ref.reference, item, context
                ));
            }
        }
    }
    if mixes_default_policy(policies) {
        errors.push(format!(
            "In {} within {}, multiple access policies are not allowed if one of them lacks a mode reference.",
            item, context
        ));
    }
}

/// Validates fields of a register.
#[derive(Clone, Copy)]
pub struct FieldValidator<'a> {
    parser: &'a dyn ExpressionParser,
    parameters: ParameterValidator<'a>,
    modes: &'a [Mode],
    revision: Revision,
}

impl<'a> FieldValidator<'a> {
    pub fn new(
        parser: &'a dyn ExpressionParser,
        parameters: ParameterValidator<'a>,
        modes: &'a [Mode],
        revision: Revision,
    ) -> Self {
        Self {
            parser,
            parameters,
            modes,
            revision,
        }
    }

    pub fn has_valid_bit_offset(&self, field: &Field) -> bool {
        is_non_negative(self.parser, &field.bit_offset)
    }

    pub fn has_valid_bit_width(&self, field: &Field) -> bool {
        is_positive(self.parser, &field.bit_width)
    }

    pub fn has_valid_resets(&self, field: &Field) -> bool {
        field.resets.iter().all(|reset| {
            !reset.value.is_empty()
                && self.parser.parse_expression(&reset.value).valid
                && is_empty_or_valid(self.parser, &reset.mask)
        })
    }

    pub fn has_valid_modified_write_value(&self, field: &Field) -> bool {
        field.modified_write_value.is_empty()
            || MODIFIED_WRITE_VALUES.contains(&field.modified_write_value.as_str())
    }

    /// Read-only fields cannot modify what is written.
    pub fn has_valid_write_constraint(&self, field: &Field) -> bool {
        let access = if field.access.is_empty() {
            field
                .access_policies
                .first()
                .map(|p| p.access.as_str())
                .unwrap_or_default()
        } else {
            field.access.as_str()
        };
        access != "read-only" || field.modified_write_value.is_empty()
    }

    pub fn has_valid_enumerated_values(&self, field: &Field) -> bool {
        !has_duplicates(field.enumerated_values.iter().map(|e| e.name_group.name.as_str()))
            && field.enumerated_values.iter().all(|e| {
                has_valid_name(&e.name_group.name)
                    && !e.value.is_empty()
                    && self.parser.parse_expression(&e.value).valid
                    && (e.usage.is_empty() || ENUMERATION_USAGES.contains(&e.usage.as_str()))
            })
    }
}

impl Validator<Field> for FieldValidator<'_> {
    fn validate(&self, field: &Field) -> bool {
        has_valid_name(field.name())
            && is_valid_presence(self.parser, &field.is_present, self.revision)
            && self.has_valid_bit_offset(field)
            && self.has_valid_bit_width(field)
            && self.has_valid_resets(field)
            && is_valid_access(&field.access)
            && is_optional_bool(&field.volatile)
            && has_valid_access_policies(&field.access_policies, self.modes)
            && self.has_valid_modified_write_value(field)
            && self.has_valid_write_constraint(field)
            && self.has_valid_enumerated_values(field)
            && self.parameters.validate_list(&field.parameters)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, field: &Field, context: &str) {
        let name = field.name();
        if !has_valid_name(name) {
            errors.push(format!("Invalid name specified for {} within {}", name, context));
        }
        if !is_valid_presence(self.parser, &field.is_present, self.revision) {
            errors.push(format!(
                "Invalid isPresent value specified for {} within {}. Value should evaluate to 0 or 1.",
                name, context
            ));
        }
        if !self.has_valid_bit_offset(field) {
            errors.push(format!("Invalid bit offset set for field {} within {}", name, context));
        }
        if !self.has_valid_bit_width(field) {
            errors.push(format!("Invalid bit width set for field {} within {}", name, context));
        }
        for reset in &field.resets {
            if reset.value.is_empty() || !self.parser.parse_expression(&reset.value).valid {
                errors.push(format!("Invalid reset value set for field {} within {}", name, context));
            }
            if !is_empty_or_valid(self.parser, &reset.mask) {
                errors.push(format!("Invalid reset mask set for field {} within {}", name, context));
            }
        }
        if !is_valid_access(&field.access) {
            errors.push(format!(
                "Invalid access {} set for field {} within {}",
                field.access, name, context
            ));
        }
        if !is_optional_bool(&field.volatile) {
            errors.push(format!(
                "Invalid volatile value {} set for field {} within {}",
                field.volatile, name, context
            ));
        }

        let item = format!("field {}", name);
        find_errors_in_access_policies(errors, &field.access_policies, self.modes, &item, context);

        if !self.has_valid_modified_write_value(field) {
            errors.push(format!(
                "Invalid modified write value {} set for field {} within {}",
                field.modified_write_value, name, context
            ));
        }
        if !self.has_valid_write_constraint(field) {
            errors.push(format!(
                "In field {} within {}, access type read-only does not allow a field to include a modified write value.",
                name, context
            ));
        }

        report_duplicates(
            errors,
            field.enumerated_values.iter().map(|e| e.name_group.name.as_str()),
            |duplicate| format!("Name {} of enumerated values in field {} is not unique.", duplicate, name),
        );
        for enumerated in &field.enumerated_values {
            let value_name = enumerated.name_group.name.as_str();
            if !has_valid_name(value_name) {
                errors.push(format!(
                    "Invalid name specified for enumerated value {} in field {} within {}",
                    value_name, name, context
                ));
            }
            if enumerated.value.is_empty() || !self.parser.parse_expression(&enumerated.value).valid {
                errors.push(format!(
                    "Invalid value {} set for enumerated value {} in field {} within {}",
                    enumerated.value, value_name, name, context
                ));
            }
            if !enumerated.usage.is_empty() && !ENUMERATION_USAGES.contains(&enumerated.usage.as_str()) {
                errors.push(format!(
                    "Invalid usage {} set for enumerated value {} in field {} within {}",
                    enumerated.usage, value_name, name, context
                ));
            }
        }

        self.parameters
            .find_errors_in_list(errors, &field.parameters, &item);
    }
}

/// Validates registers and the fields they contain.
#[derive(Clone, Copy)]
pub struct RegisterValidator<'a> {
    parser: &'a dyn ExpressionParser,
    field: FieldValidator<'a>,
    parameters: ParameterValidator<'a>,
    modes: &'a [Mode],
    revision: Revision,
}

impl<'a> RegisterValidator<'a> {
    pub fn new(
        parser: &'a dyn ExpressionParser,
        field: FieldValidator<'a>,
        parameters: ParameterValidator<'a>,
        modes: &'a [Mode],
        revision: Revision,
    ) -> Self {
        Self {
            parser,
            field,
            parameters,
            modes,
            revision,
        }
    }

    pub fn has_valid_size(&self, register: &Register) -> bool {
        is_positive(self.parser, &register.size)
    }

    pub fn has_valid_address_offset(&self, register: &Register) -> bool {
        is_non_negative(self.parser, &register.address_offset)
    }

    /// Every field lies inside bits `[0, size-1]`.
    pub fn field_is_contained(&self, register: &Register, field: &Field) -> bool {
        let Some(size) = self.parser.evaluate_u64(&register.size) else {
            return true;
        };
        match (
            self.parser.evaluate_u64(&field.bit_offset),
            self.parser.evaluate_u64(&field.bit_width),
        ) {
            (Some(offset), Some(width)) => offset.saturating_add(width) <= size,
            _ => true,
        }
    }

    fn has_valid_fields(&self, register: &Register) -> bool {
        !register.fields.is_empty()
            && !has_duplicates(register.fields.iter().map(Field::name))
            && register
                .fields
                .iter()
                .all(|f| self.field_is_contained(register, f) && self.field.validate(f))
    }
}

impl Validator<Register> for RegisterValidator<'_> {
    fn validate(&self, register: &Register) -> bool {
        has_valid_name(register.name())
            && is_valid_presence(self.parser, &register.is_present, self.revision)
            && is_empty_or_non_negative(self.parser, &register.dimension)
            && self.has_valid_address_offset(register)
            && self.has_valid_size(register)
            && is_optional_bool(&register.volatile)
            && is_valid_access(&register.access)
            && has_valid_access_policies(&register.access_policies, self.modes)
            && self.has_valid_fields(register)
            && self.parameters.validate_list(&register.parameters)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, register: &Register, context: &str) {
        let name = register.name();
        if !has_valid_name(name) {
            errors.push(format!("Invalid name specified for register {} within {}", name, context));
        }
        if !is_valid_presence(self.parser, &register.is_present, self.revision) {
            errors.push(format!("Invalid isPresent set for register {} within {}", name, context));
        }
        if !is_empty_or_non_negative(self.parser, &register.dimension) {
            errors.push(format!("Invalid dimension set for register {} within {}", name, context));
        }
        if !self.has_valid_address_offset(register) {
            errors.push(format!("Invalid address offset set for register {} within {}", name, context));
        }
        if !self.has_valid_size(register) {
            errors.push(format!("Invalid size specified for register {} within {}", name, context));
        }
        if !is_optional_bool(&register.volatile) {
            errors.push(format!(
                "Invalid volatile value {} set for register {} within {}",
                register.volatile, name, context
            ));
        }
        if !is_valid_access(&register.access) {
            errors.push(format!(
                "Invalid access {} set for register {} within {}",
                register.access, name, context
            ));
        }

        let item = format!("register {}", name);
        find_errors_in_access_policies(errors, &register.access_policies, self.modes, &item, context);

        if register.fields.is_empty() {
            errors.push(format!("Register {} must contain at least one field", name));
        }
        report_duplicates(errors, register.fields.iter().map(Field::name), |field| {
            format!("Name {} of fields in {} is not unique.", field, item)
        });
        for field in &register.fields {
            if !self.field_is_contained(register, field) {
                errors.push(format!("Field {} is not contained within {}", field.name(), item));
            }
            self.field.find_errors_in(errors, field, &item);
        }

        self.parameters
            .find_errors_in_list(errors, &register.parameters, &item);
    }
}

/// Validates address blocks and subspace maps through one entry point.
#[derive(Clone, Copy)]
pub struct MemoryBlockValidator<'a> {
    parser: &'a dyn ExpressionParser,
    register: RegisterValidator<'a>,
    parameters: ParameterValidator<'a>,
    revision: Revision,
    address_unit_bits: u64,
}

impl<'a> MemoryBlockValidator<'a> {
    pub fn new(
        parser: &'a dyn ExpressionParser,
        register: RegisterValidator<'a>,
        parameters: ParameterValidator<'a>,
        revision: Revision,
    ) -> Self {
        Self {
            parser,
            register,
            parameters,
            revision,
            address_unit_bits: DEFAULT_ADDRESS_UNIT_BITS,
        }
    }

    /// Address unit size of the containing map, used for register containment.
    pub fn with_address_unit_bits(mut self, address_unit_bits: u64) -> Self {
        self.address_unit_bits = address_unit_bits;
        self
    }

    pub fn has_valid_base_address(&self, block: &MemoryBlock) -> bool {
        is_non_negative(self.parser, &block.base_address)
    }

    /// Register occupies `[offset, offset + size/addressUnitBits)` inside the range.
    pub fn register_is_contained(&self, data: &AddressBlockData, register: &Register) -> bool {
        let Some(range) = self.parser.evaluate_u64(&data.range) else {
            return true;
        };
        match (
            self.parser.evaluate_u64(&register.address_offset),
            self.parser.evaluate_u64(&register.size),
        ) {
            (Some(offset), Some(size)) => {
                offset.saturating_add(address_units(size, self.address_unit_bits)) <= range
            }
            _ => true,
        }
    }

    pub fn register_fits_width(&self, data: &AddressBlockData, register: &Register) -> bool {
        match (
            self.parser.evaluate_u64(&register.size),
            self.parser.evaluate_u64(&data.width),
        ) {
            (Some(size), Some(width)) => size <= width,
            _ => true,
        }
    }

    fn has_valid_volatile_for_register(&self, data: &AddressBlockData, register: &Register) -> bool {
        data.volatile != "false"
            || (register.volatile != "true" && register.fields.iter().all(|f| f.volatile != "true"))
    }

    fn validate_address_block(&self, data: &AddressBlockData) -> bool {
        is_positive(self.parser, &data.range)
            && is_non_negative(self.parser, &data.width)
            && (data.usage.is_empty() || BLOCK_USAGES.contains(&data.usage.as_str()))
            && !(data.usage == "reserved" && !data.registers.is_empty())
            && is_optional_bool(&data.volatile)
            && is_valid_access(&data.access)
            && has_valid_access_policies(&data.access_policies, self.register.modes)
            && !has_duplicates(data.registers.iter().map(Register::name))
            && data.registers.iter().all(|r| {
                self.register_is_contained(data, r)
                    && self.register_fits_width(data, r)
                    && self.has_valid_volatile_for_register(data, r)
                    && self.register.validate(r)
            })
    }

    fn find_errors_in_address_block(
        &self,
        errors: &mut Vec<String>,
        name: &str,
        data: &AddressBlockData,
        context: &str,
    ) {
        if !is_positive(self.parser, &data.range) {
            errors.push(format!("Invalid range set for address block {} within {}", name, context));
        }
        if !is_non_negative(self.parser, &data.width) {
            errors.push(format!("Invalid width set for address block {} within {}", name, context));
        }
        if !data.usage.is_empty() && !BLOCK_USAGES.contains(&data.usage.as_str()) {
            errors.push(format!(
                "Invalid usage {} set for address block {} within {}",
                data.usage, name, context
            ));
        }
        if data.usage == "reserved" && !data.registers.is_empty() {
            errors.push(format!(
                "Registers cannot be contained in address block {} with usage reserved within {}",
                name, context
            ));
        }
        if !is_optional_bool(&data.volatile) {
            errors.push(format!(
                "Invalid volatile value {} set for address block {} within {}",
                data.volatile, name, context
            ));
        }
        if !is_valid_access(&data.access) {
            errors.push(format!(
                "Invalid access {} set for address block {} within {}",
                data.access, name, context
            ));
        }

        let item = format!("address block {}", name);
        find_errors_in_access_policies(errors, &data.access_policies, self.register.modes, &item, context);

        report_duplicates(errors, data.registers.iter().map(Register::name), |register| {
            format!("Name {} of registers in addressBlock {} is not unique.", register, name)
        });
        for register in &data.registers {
            self.register.find_errors_in(errors, register, &item);

            if !self.register_fits_width(data, register) {
                errors.push(format!(
                    "Register {} size must not be greater than the containing addressBlock {} width.",
                    register.name(),
                    name
                ));
            }
            if !self.has_valid_volatile_for_register(data, register) {
                errors.push(format!(
                    "Volatile value cannot be set to false for addressBlock {} containing a register or register field with volatile true",
                    name
                ));
            }
            if !self.register_is_contained(data, register) {
                errors.push(format!("Register {} is not contained within {}", register.name(), item));
            }
        }
    }

    fn validate_subspace_map(&self, data: &SubspaceMapData) -> bool {
        has_valid_name(&data.initiator_ref)
    }

    fn find_errors_in_subspace_map(
        &self,
        errors: &mut Vec<String>,
        name: &str,
        data: &SubspaceMapData,
        context: &str,
    ) {
        if !self.validate_subspace_map(data) {
            errors.push(format!(
                "No initiator reference set for subspace map {} within {}",
                name, context
            ));
        }
    }
}

impl Validator<MemoryBlock> for MemoryBlockValidator<'_> {
    fn validate(&self, block: &MemoryBlock) -> bool {
        let common = has_valid_name(block.name())
            && is_valid_presence(self.parser, &block.is_present, self.revision)
            && self.has_valid_base_address(block)
            && self.parameters.validate_list(&block.parameters);
        common
            && match &block.kind {
                BlockKind::AddressBlock(data) => self.validate_address_block(data),
                BlockKind::SubspaceMap(data) => self.validate_subspace_map(data),
            }
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, block: &MemoryBlock, context: &str) {
        let label = block.kind.label();
        let name = block.name();
        if !has_valid_name(name) {
            errors.push(format!("Invalid name specified for {} {} within {}", label, name, context));
        }
        if !is_valid_presence(self.parser, &block.is_present, self.revision) {
            errors.push(format!("Invalid isPresent set for {} {} within {}", label, name, context));
        }
        if !self.has_valid_base_address(block) {
            errors.push(format!("Invalid base address set for {} {} within {}", label, name, context));
        }
        self.parameters
            .find_errors_in_list(errors, &block.parameters, &format!("{} {}", label, name));

        match &block.kind {
            BlockKind::AddressBlock(data) => self.find_errors_in_address_block(errors, name, data, context),
            BlockKind::SubspaceMap(data) => self.find_errors_in_subspace_map(errors, name, data, context),
        }
    }
}

/// Validates memory maps, including local memory maps of address spaces.
#[derive(Clone, Copy)]
pub struct MemoryMapValidator<'a> {
    parser: &'a dyn ExpressionParser,
    block: MemoryBlockValidator<'a>,
    revision: Revision,
    default_address_unit_bits: u64,
}

impl<'a> MemoryMapValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser, block: MemoryBlockValidator<'a>, revision: Revision) -> Self {
        Self {
            parser,
            block,
            revision,
            default_address_unit_bits: DEFAULT_ADDRESS_UNIT_BITS,
        }
    }

    /// Address unit size used when a map does not set its own.
    pub fn with_default_address_unit_bits(mut self, address_unit_bits: u64) -> Self {
        self.default_address_unit_bits = address_unit_bits;
        self
    }

    pub fn has_valid_address_unit_bits(&self, map: &MemoryMap) -> bool {
        map.address_unit_bits.is_empty() || is_positive(self.parser, &map.address_unit_bits)
    }

    fn address_unit_bits(&self, map: &MemoryMap) -> u64 {
        self.parser
            .evaluate_u64(&map.address_unit_bits)
            .filter(|bits| *bits > 0)
            .unwrap_or(self.default_address_unit_bits)
    }

    /// Address range `[base, base + range - 1]` of an address block.
    fn block_span(&self, block: &MemoryBlock) -> Option<(u64, u64)> {
        let data = block.as_address_block()?;
        let base = self.parser.evaluate_u64(&block.base_address)?;
        let range = self.parser.evaluate_u64(&data.range).filter(|r| *r > 0)?;
        Some((base, base.saturating_add(range - 1)))
    }

    /// Pairs of address blocks whose address ranges intersect.
    pub fn overlapping_blocks<'m>(&self, map: &'m MemoryMap) -> Vec<(&'m str, &'m str)> {
        let spans: Vec<(&str, (u64, u64))> = map
            .blocks
            .iter()
            .filter_map(|b| self.block_span(b).map(|span| (b.name(), span)))
            .collect();

        let mut overlaps = Vec::new();
        for (index, (first, (first_low, first_high))) in spans.iter().enumerate() {
            for (second, (second_low, second_high)) in spans.iter().skip(index + 1) {
                if first_low <= second_high && second_low <= first_high {
                    overlaps.push((*first, *second));
                }
            }
        }
        overlaps
    }

    fn block_validator(&self, map: &MemoryMap) -> MemoryBlockValidator<'a> {
        self.block.with_address_unit_bits(self.address_unit_bits(map))
    }

    /// Block rules shared by memory maps and local memory maps.
    pub fn has_valid_blocks(&self, map: &MemoryMap) -> bool {
        let blocks = self.block_validator(map);
        !has_duplicates(map.blocks.iter().map(MemoryBlock::name))
            && self.overlapping_blocks(map).is_empty()
            && map.blocks.iter().all(|b| blocks.validate(b))
    }

    pub fn find_errors_in_blocks(&self, errors: &mut Vec<String>, map: &MemoryMap, item: &str) {
        report_duplicates(errors, map.blocks.iter().map(MemoryBlock::name), |block| {
            format!("Name {} of memory blocks in {} is not unique.", block, item)
        });
        for (first, second) in self.overlapping_blocks(map) {
            errors.push(format!("Memory blocks {} and {} overlap in {}", first, second, item));
        }

        let blocks = self.block_validator(map);
        for block in &map.blocks {
            blocks.find_errors_in(errors, block, item);
        }
    }
}

impl Validator<MemoryMap> for MemoryMapValidator<'_> {
    fn validate(&self, map: &MemoryMap) -> bool {
        has_valid_name(map.name())
            && is_valid_presence(self.parser, &map.is_present, self.revision)
            && self.has_valid_address_unit_bits(map)
            && (map.shared.is_empty() || SHARED_VALUES.contains(&map.shared.as_str()))
            && self.has_valid_blocks(map)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, map: &MemoryMap, context: &str) {
        let name = map.name();
        if !has_valid_name(name) {
            errors.push(format!("Invalid name specified for memory map {} within {}", name, context));
        }
        if !is_valid_presence(self.parser, &map.is_present, self.revision) {
            errors.push(format!("Invalid isPresent set for memory map {} within {}", name, context));
        }
        if !self.has_valid_address_unit_bits(map) {
            errors.push(format!(
                "Invalid address unit bits specified for memory map {} within {}",
                name, context
            ));
        }
        if !map.shared.is_empty() && !SHARED_VALUES.contains(&map.shared.as_str()) {
            errors.push(format!(
                "Invalid shared value {} set for memory map {} within {}",
                map.shared, name, context
            ));
        }

        self.find_errors_in_blocks(errors, map, &format!("memory map {}", name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipxact_core::model::{FieldReset, ModeRef};
    use ipxact_core::SystemVerilogParser;

    struct Fixture {
        parser: SystemVerilogParser,
        modes: Vec<Mode>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                parser: SystemVerilogParser::new(),
                modes: vec![Mode::new("sleep")],
            }
        }

        fn map_validator(&self, revision: Revision) -> MemoryMapValidator<'_> {
            let parameters = ParameterValidator::new(&self.parser, &[], revision);
            let field = FieldValidator::new(&self.parser, parameters, &self.modes, revision);
            let register = RegisterValidator::new(&self.parser, field, parameters, &self.modes, revision);
            let block = MemoryBlockValidator::new(&self.parser, register, parameters, revision);
            MemoryMapValidator::new(&self.parser, block, revision)
        }
    }

    fn errors_in<T, V: Validator<T>>(validator: &V, item: &T) -> Vec<String> {
        let mut errors = Vec::new();
        validator.find_errors_in(&mut errors, item, "test");
        assert_eq!(validator.validate(item), errors.is_empty(), "{:?}", errors);
        errors
    }

    fn register_map(register: Register, range: &str) -> MemoryMap {
        let mut block = MemoryBlock::address_block("block", "0");
        if let Some(data) = block.as_address_block_mut() {
            data.range = range.to_string();
            data.width = "32".to_string();
            data.registers.push(register);
        }
        let mut map = MemoryMap::new("map");
        map.blocks.push(block);
        map
    }

    fn register_with_field(field: Field) -> Register {
        let mut register = Register::new("reg", "0", "32");
        register.fields.push(field);
        register
    }

    #[test]
    fn test_valid_map() {
        let fixture = Fixture::new();
        let map = register_map(register_with_field(Field::new("f", "0", "8")), "4");
        assert!(errors_in(&fixture.map_validator(Revision::Std14), &map).is_empty());
    }

    #[test]
    fn test_field_rules() {
        let fixture = Fixture::new();
        let validator = fixture.map_validator(Revision::Std14);

        let mut field = Field::new("f", "-1", "0");
        field.resets.push(FieldReset {
            value: "".to_string(),
            mask: "zz".to_string(),
            ..FieldReset::default()
        });
        field.access = "read-only".to_string();
        field.modified_write_value = "oneToClear".to_string();
        let map = register_map(register_with_field(field), "4");

        let errors = errors_in(&validator, &map);
        assert_eq!(
            errors,
            vec![
                "Invalid bit offset set for field f within register reg",
                "Invalid bit width set for field f within register reg",
                "Invalid reset value set for field f within register reg",
                "Invalid reset mask set for field f within register reg",
                "In field f within register reg, access type read-only does not allow a field to include a modified write value.",
            ]
        );
    }

    #[test]
    fn test_field_outside_register() {
        let fixture = Fixture::new();
        let map = register_map(register_with_field(Field::new("f", "30", "4")), "4");
        let errors = errors_in(&fixture.map_validator(Revision::Std14), &map);
        assert_eq!(errors, vec!["Field f is not contained within register reg"]);
    }

    #[test]
    fn test_register_rules() {
        let fixture = Fixture::new();
        let validator = fixture.map_validator(Revision::Std14);

        let mut register = Register::new("reg", "4", "64");
        register.is_present = "3".to_string();
        let map = register_map(register, "4");

        let errors = errors_in(&validator, &map);
        assert_eq!(
            errors,
            vec![
                "Invalid isPresent set for register reg within address block block",
                "Register reg must contain at least one field",
                "Register reg size must not be greater than the containing addressBlock block width.",
                "Register reg is not contained within address block block",
            ]
        );
    }

    #[test]
    fn test_presence_skipped_for_2022() {
        let fixture = Fixture::new();
        let mut register = register_with_field(Field::new("f", "0", "1"));
        register.is_present = "3".to_string();
        let map = register_map(register, "4");
        assert!(errors_in(&fixture.map_validator(Revision::Std22), &map).is_empty());
    }

    #[test]
    fn test_address_unit_bits_scale_containment() {
        let fixture = Fixture::new();
        let mut map = register_map(register_with_field(Field::new("f", "0", "1")), "1");
        map.address_unit_bits = "32".to_string();
        assert!(errors_in(&fixture.map_validator(Revision::Std14), &map).is_empty());

        map.address_unit_bits = "0".to_string();
        let errors = errors_in(&fixture.map_validator(Revision::Std14), &map);
        assert_eq!(errors[0], "Invalid address unit bits specified for memory map map within test");
    }

    #[test]
    fn test_access_policies() {
        let fixture = Fixture::new();
        let mut field = Field::new("f", "0", "1");
        field.access_policies.push(AccessPolicy {
            mode_refs: vec![ModeRef {
                reference: "awake".to_string(),
                priority: "0".to_string(),
            }],
            access: "read-write".to_string(),
        });
        field.access_policies.push(AccessPolicy {
            mode_refs: Vec::new(),
            access: "read".to_string(),
        });
        let map = register_map(register_with_field(field), "4");

        let errors = errors_in(&fixture.map_validator(Revision::Std22), &map);
        assert_eq!(
            errors,
            vec![
                "Mode awake referenced in access policy of field f could not be found within register reg",
                "Invalid access read set in access policy of field f within register reg",
                "In field f within register reg, multiple access policies are not allowed if one of them lacks a mode reference.",
            ]
        );
    }

    #[test]
    fn test_overlapping_blocks_and_duplicates() {
        let fixture = Fixture::new();
        let mut map = MemoryMap::new("map");
        for (name, base) in [("a", "0"), ("b", "8"), ("a", "'h100")] {
            let mut block = MemoryBlock::address_block(name, base);
            if let Some(data) = block.as_address_block_mut() {
                data.range = "16".to_string();
                data.width = "32".to_string();
            }
            map.blocks.push(block);
        }

        let errors = errors_in(&fixture.map_validator(Revision::Std14), &map);
        assert_eq!(
            errors,
            vec![
                "Name a of memory blocks in memory map map is not unique.",
                "Memory blocks a and b overlap in memory map map",
            ]
        );
    }

    #[test]
    fn test_subspace_map_needs_initiator() {
        let fixture = Fixture::new();
        let mut map = MemoryMap::new("map");
        map.blocks.push(MemoryBlock::subspace_map("sub", "0", ""));

        let errors = errors_in(&fixture.map_validator(Revision::Std22), &map);
        assert_eq!(errors, vec!["No initiator reference set for subspace map sub within memory map map"]);
    }

    #[test]
    fn test_reserved_block_with_registers() {
        let fixture = Fixture::new();
        let mut map = register_map(register_with_field(Field::new("f", "0", "1")), "4");
        if let Some(data) = map.blocks[0].as_address_block_mut() {
            data.usage = "reserved".to_string();
        }
        let errors = errors_in(&fixture.map_validator(Revision::Std14), &map);
        assert_eq!(
            errors,
            vec!["Registers cannot be contained in address block block with usage reserved within memory map map"]
        );
    }
}
