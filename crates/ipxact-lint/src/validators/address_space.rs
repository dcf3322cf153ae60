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

//! Address space validation: segments, local memory map and parameters.

use super::common::{
    has_duplicates, is_non_negative, is_positive, is_valid_presence, report_duplicates,
};
use super::memory::MemoryMapValidator;
use super::parameter::ParameterValidator;
use crate::Validator;
use ipxact_core::model::{AddressSpace, MemoryBlock, Segment};
use ipxact_core::{has_valid_name, ExpressionParser, Revision};

#[derive(Clone, Copy)]
pub struct AddressSpaceValidator<'a> {
    parser: &'a dyn ExpressionParser,
    memory_map: MemoryMapValidator<'a>,
    parameters: ParameterValidator<'a>,
    revision: Revision,
}

impl<'a> AddressSpaceValidator<'a> {
    pub fn new(
        parser: &'a dyn ExpressionParser,
        memory_map: MemoryMapValidator<'a>,
        parameters: ParameterValidator<'a>,
        revision: Revision,
    ) -> Self {
        Self {
            parser,
            memory_map,
            parameters,
            revision,
        }
    }

    pub fn has_valid_range(&self, space: &AddressSpace) -> bool {
        is_positive(self.parser, &space.range)
    }

    pub fn has_valid_width(&self, space: &AddressSpace) -> bool {
        is_non_negative(self.parser, &space.width)
    }

    pub fn has_valid_address_unit_bits(&self, space: &AddressSpace) -> bool {
        space.address_unit_bits.is_empty() || is_positive(self.parser, &space.address_unit_bits)
    }

    fn segment_is_valid(&self, segment: &Segment) -> bool {
        has_valid_name(segment.name())
            && is_valid_presence(self.parser, &segment.is_present, self.revision)
            && is_non_negative(self.parser, &segment.offset)
            && is_positive(self.parser, &segment.range)
    }

    /// Segment `[offset, offset + range)` ends inside the space range.
    pub fn segment_is_contained(&self, space: &AddressSpace, segment: &Segment) -> bool {
        match (
            self.parser.evaluate_u64(&space.range),
            self.parser.evaluate_u64(&segment.offset),
            self.parser.evaluate_u64(&segment.range),
        ) {
            (Some(space_range), Some(offset), Some(range)) => offset.saturating_add(range) <= space_range,
            _ => true,
        }
    }

    fn segment_span(&self, segment: &Segment) -> Option<(u64, u64)> {
        let offset = self.parser.evaluate_u64(&segment.offset)?;
        let range = self.parser.evaluate_u64(&segment.range).filter(|r| *r > 0)?;
        Some((offset, offset.saturating_add(range - 1)))
    }

    pub fn overlapping_segments<'s>(&self, space: &'s AddressSpace) -> Vec<(&'s str, &'s str)> {
        let spans: Vec<(&str, (u64, u64))> = space
            .segments
            .iter()
            .filter_map(|s| self.segment_span(s).map(|span| (s.name(), span)))
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

    fn has_valid_segments(&self, space: &AddressSpace) -> bool {
        !has_duplicates(space.segments.iter().map(Segment::name))
            && space
                .segments
                .iter()
                .all(|s| self.segment_is_valid(s) && self.segment_is_contained(space, s))
            && self.overlapping_segments(space).is_empty()
    }

    /// Address block `[base, base + range)` ends inside the space range.
    pub fn block_is_contained(&self, space: &AddressSpace, block: &MemoryBlock) -> bool {
        let Some(data) = block.as_address_block() else {
            return true;
        };
        match (
            self.parser.evaluate_u64(&block.base_address),
            self.parser.evaluate_u64(&data.range),
        ) {
            (Some(base), Some(range)) => self
                .parser
                .evaluate_u64(&space.range)
                .map_or(true, |space_range| base.saturating_add(range) <= space_range),
            _ => false,
        }
    }

    fn local_map_validator(&self, space: &AddressSpace) -> MemoryMapValidator<'a> {
        match self.parser.evaluate_u64(&space.address_unit_bits).filter(|b| *b > 0) {
            Some(bits) => self.memory_map.with_default_address_unit_bits(bits),
            None => self.memory_map,
        }
    }

    fn has_valid_local_memory_map(&self, space: &AddressSpace) -> bool {
        space.local_memory_map.as_ref().map_or(true, |map| {
            self.local_map_validator(space).has_valid_blocks(map)
                && map.blocks.iter().all(|b| self.block_is_contained(space, b))
        })
    }
}

impl Validator<AddressSpace> for AddressSpaceValidator<'_> {
    fn validate(&self, space: &AddressSpace) -> bool {
        has_valid_name(space.name())
            && is_valid_presence(self.parser, &space.is_present, self.revision)
            && self.has_valid_range(space)
            && self.has_valid_width(space)
            && self.has_valid_segments(space)
            && self.has_valid_address_unit_bits(space)
            && self.has_valid_local_memory_map(space)
            && self.parameters.validate_list(&space.parameters)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, space: &AddressSpace, context: &str) {
        let name = space.name();
        if !has_valid_name(name) {
            errors.push(format!("Invalid name specified for address space {} within {}", name, context));
        }
        if !is_valid_presence(self.parser, &space.is_present, self.revision) {
            errors.push(format!("Invalid isPresent set for address space {} within {}", name, context));
        }
        if !self.has_valid_range(space) {
            errors.push(format!("Invalid range set for address space {} within {}", name, context));
        }
        if !self.has_valid_width(space) {
            errors.push(format!("Invalid width set for address space {} within {}", name, context));
        }

        let item = format!("address space {}", name);
        report_duplicates(errors, space.segments.iter().map(Segment::name), |segment| {
            format!("Name {} of segments in {} is not unique", segment, item)
        });
        for segment in &space.segments {
            let segment_name = segment.name();
            if !has_valid_name(segment_name) {
                errors.push(format!("Invalid name specified for segment {} within {}", segment_name, item));
            }
            if !is_valid_presence(self.parser, &segment.is_present, self.revision) {
                errors.push(format!("Invalid isPresent set for segment {} within {}", segment_name, item));
            }
            if !is_non_negative(self.parser, &segment.offset) {
                errors.push(format!(
                    "Invalid address offset set for segment {} within {}",
                    segment_name, item
                ));
            }
            if !is_positive(self.parser, &segment.range) {
                errors.push(format!("Invalid range set for segment {} within {}", segment_name, item));
            }
            if !self.segment_is_contained(space, segment) {
                errors.push(format!("Segment {} is not contained within {}", segment_name, item));
            }
        }
        for (first, second) in self.overlapping_segments(space) {
            errors.push(format!("Segments {} and {} overlap in {}", first, second, item));
        }

        if !self.has_valid_address_unit_bits(space) {
            errors.push(format!(
                "Invalid address unit bits set for address space {} within {}",
                name, context
            ));
        }

        if let Some(map) = &space.local_memory_map {
            let local = format!("local memory map of {}", item);
            self.local_map_validator(space).find_errors_in_blocks(errors, map, &local);
            for block in &map.blocks {
                if !self.block_is_contained(space, block) {
                    errors.push(format!(
                        "Address block {} is not contained within local memory map of {}.",
                        block.name(),
                        item
                    ));
                }
            }
        }

        self.parameters.find_errors_in_list(errors, &space.parameters, &item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::memory::{FieldValidator, MemoryBlockValidator, RegisterValidator};
    use ipxact_core::model::{Field, MemoryMap, Register};
    use ipxact_core::SystemVerilogParser;

    fn with_validator(revision: Revision, check: impl FnOnce(AddressSpaceValidator<'_>)) {
        let parser = SystemVerilogParser::new();
        let parameters = ParameterValidator::new(&parser, &[], revision);
        let field = FieldValidator::new(&parser, parameters, &[], revision);
        let register = RegisterValidator::new(&parser, field, parameters, &[], revision);
        let block = MemoryBlockValidator::new(&parser, register, parameters, revision);
        let map = MemoryMapValidator::new(&parser, block, revision);
        check(AddressSpaceValidator::new(&parser, map, parameters, revision));
    }

    fn errors_in(validator: &AddressSpaceValidator<'_>, space: &AddressSpace) -> Vec<String> {
        let mut errors = Vec::new();
        validator.find_errors_in(&mut errors, space, "test");
        assert_eq!(validator.validate(space), errors.is_empty(), "{:?}", errors);
        errors
    }

    fn space() -> AddressSpace {
        let mut space = AddressSpace::new("cpu");
        space.range = "4096".to_string();
        space.width = "32".to_string();
        space
    }

    #[test]
    fn test_valid_space() {
        let mut space = space();
        space.segments.push(Segment::new("code", "0", "'h800"));
        space.segments.push(Segment::new("data", "'h800", "'h800"));
        with_validator(Revision::Std14, |v| assert!(errors_in(&v, &space).is_empty()));
    }

    #[test]
    fn test_space_attributes() {
        let mut space = AddressSpace::new(" ");
        space.range = "0".to_string();
        space.width = "-8".to_string();
        space.address_unit_bits = "zero".to_string();

        with_validator(Revision::Std14, |v| {
            assert_eq!(
                errors_in(&v, &space),
                vec![
                    "Invalid name specified for address space   within test",
                    "Invalid range set for address space   within test",
                    "Invalid width set for address space   within test",
                    "Invalid address unit bits set for address space   within test",
                ]
            );
        });
    }

    #[test]
    fn test_segment_rules() {
        let mut space = space();
        space.segments.push(Segment::new("code", "0", "'h800"));
        space.segments.push(Segment::new("code", "'h400", "'h800"));
        space.segments.push(Segment::new("tail", "4000", "200"));

        with_validator(Revision::Std14, |v| {
            assert_eq!(
                errors_in(&v, &space),
                vec![
                    "Name code of segments in address space cpu is not unique",
                    "Segment tail is not contained within address space cpu",
                    "Segments code and code overlap in address space cpu",
                ]
            );
        });
    }

    #[test]
    fn test_local_memory_map_containment() {
        let mut space = space();
        space.range = "16".to_string();

        let mut block = MemoryBlock::address_block("regs", "8");
        if let Some(data) = block.as_address_block_mut() {
            data.range = "16".to_string();
            data.width = "32".to_string();
            let mut register = Register::new("ctrl", "0", "32");
            register.fields.push(Field::new("enable", "0", "1"));
            data.registers.push(register);
        }
        let mut map = MemoryMap::new("local");
        map.blocks.push(block);
        space.local_memory_map = Some(map);

        with_validator(Revision::Std22, |v| {
            assert_eq!(
                errors_in(&v, &space),
                vec!["Address block regs is not contained within local memory map of address space cpu."]
            );
        });
    }
}
