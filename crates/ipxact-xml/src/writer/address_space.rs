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

//! Address space and segment writers.

use super::common::{write_is_present, write_name_group, write_parameters, write_vendor_extensions};
use super::memory::write_local_memory_map;
use crate::emit::XmlWriterExt;
use crate::error::XmlResult;
use ipxact_core::model::{AddressSpace, Segment};
use ipxact_core::Revision;
use quick_xml::Writer;
use std::io::Write;

fn pairs(attributes: &[(String, String)]) -> Vec<(&str, &str)> {
    attributes
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

/// Writes an `ipxact:addressSpace` element.
pub fn write_address_space<W: Write>(
    writer: &mut Writer<W>,
    space: &AddressSpace,
    revision: Revision,
) -> XmlResult<()> {
    writer.start("ipxact:addressSpace")?;
    write_name_group(writer, &space.name_group, revision)?;
    write_is_present(writer, &space.is_present, revision)?;
    writer.text_element("ipxact:range", &space.range)?;
    writer.text_element("ipxact:width", &space.width)?;

    if !space.segments.is_empty() {
        writer.start("ipxact:segments")?;
        for segment in &space.segments {
            write_segment(writer, segment, revision)?;
        }
        writer.end("ipxact:segments")?;
    }

    writer.optional_element("ipxact:addressUnitBits", &space.address_unit_bits)?;
    if let Some(map) = &space.local_memory_map {
        write_local_memory_map(writer, map, revision)?;
    }
    write_parameters(writer, &space.parameters, revision)?;
    write_vendor_extensions(writer, &space.vendor_extensions)?;
    writer.end("ipxact:addressSpace")
}

pub fn write_segment<W: Write>(
    writer: &mut Writer<W>,
    segment: &Segment,
    revision: Revision,
) -> XmlResult<()> {
    writer.start("ipxact:segment")?;
    write_name_group(writer, &segment.name_group, revision)?;
    write_is_present(writer, &segment.is_present, revision)?;
    writer.text_element_with(
        "ipxact:addressOffset",
        &pairs(&segment.offset_attributes),
        &segment.offset,
    )?;
    writer.text_element_with("ipxact:range", &pairs(&segment.range_attributes), &segment.range)?;
    write_vendor_extensions(writer, &segment.vendor_extensions)?;
    writer.end("ipxact:segment")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::write_fragment;
    use crate::ToXmlConfig;
    use ipxact_core::model::MemoryMap;

    #[test]
    fn test_simple_address_space() {
        let mut space = AddressSpace::new("StarControl");
        space.range = "coreward".to_string();
        space.width = "front".to_string();

        let xml = write_fragment(&ToXmlConfig::default(), |w| {
            write_address_space(w, &space, Revision::Std14)
        })
        .unwrap();
        assert_eq!(
            xml,
            "<ipxact:addressSpace>\n\
             \t<ipxact:name>StarControl</ipxact:name>\n\
             \t<ipxact:range>coreward</ipxact:range>\n\
             \t<ipxact:width>front</ipxact:width>\n\
             </ipxact:addressSpace>"
        );
    }

    #[test]
    fn test_is_present_only_in_2014() {
        let mut space = AddressSpace::new("s");
        space.range = "1".to_string();
        space.width = "8".to_string();
        space.is_present = "1".to_string();

        let std14 = write_fragment(&ToXmlConfig::compact(), |w| {
            write_address_space(w, &space, Revision::Std14)
        })
        .unwrap();
        assert!(std14.contains("<ipxact:isPresent>1</ipxact:isPresent>"));

        let std22 = write_fragment(&ToXmlConfig::compact(), |w| {
            write_address_space(w, &space, Revision::Std22)
        })
        .unwrap();
        assert!(!std22.contains("isPresent"));
    }

    #[test]
    fn test_segments_and_local_map() {
        let mut space = AddressSpace::new("cpu");
        space.range = "4096".to_string();
        space.width = "32".to_string();
        let mut segment = Segment::new("low", "0", "1024");
        segment.offset_attributes.push(("format".to_string(), "long".to_string()));
        space.segments.push(segment);
        space.address_unit_bits = "8".to_string();
        space.local_memory_map = Some(MemoryMap::new("local"));

        let xml = write_fragment(&ToXmlConfig::compact(), |w| {
            write_address_space(w, &space, Revision::Std14)
        })
        .unwrap();
        assert_eq!(
            xml,
            "<ipxact:addressSpace>\
                <ipxact:name>cpu</ipxact:name>\
                <ipxact:range>4096</ipxact:range>\
                <ipxact:width>32</ipxact:width>\
                <ipxact:segments><ipxact:segment>\
                    <ipxact:name>low</ipxact:name>\
                    <ipxact:addressOffset format=\"long\">0</ipxact:addressOffset>\
                    <ipxact:range>1024</ipxact:range>\
                </ipxact:segment></ipxact:segments>\
                <ipxact:addressUnitBits>8</ipxact:addressUnitBits>\
                <ipxact:localMemoryMap><ipxact:name>local</ipxact:name></ipxact:localMemoryMap>\
             </ipxact:addressSpace>"
        );
    }
}
