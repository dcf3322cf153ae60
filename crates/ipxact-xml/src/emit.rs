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

//! Element-level helpers over a `quick_xml::Writer`.

use crate::error::{XmlError, XmlResult};
use ipxact_core::VendorExtension;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Keeps only the attributes with a non-empty value.
pub(crate) fn present<'a>(pairs: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    pairs.iter().copied().filter(|(_, v)| !v.is_empty()).collect()
}

pub(crate) trait XmlWriterExt {
    fn start(&mut self, name: &str) -> XmlResult<()> {
        self.start_with(name, &[])
    }

    fn start_with(&mut self, name: &str, attributes: &[(&str, &str)]) -> XmlResult<()>;

    fn end(&mut self, name: &str) -> XmlResult<()>;

    fn text_element_with(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
        text: &str,
    ) -> XmlResult<()>;

    fn empty_with(&mut self, name: &str, attributes: &[(&str, &str)]) -> XmlResult<()>;

    fn comment(&mut self, text: &str) -> XmlResult<()>;

    /// Character data between elements.
    fn text(&mut self, text: &str) -> XmlResult<()>;

    fn text_element(&mut self, name: &str, text: &str) -> XmlResult<()> {
        self.text_element_with(name, &[], text)
    }

    /// Writes `<name>text</name>` unless `text` is empty.
    fn optional_element(&mut self, name: &str, text: &str) -> XmlResult<()> {
        if text.is_empty() {
            Ok(())
        } else {
            self.text_element(name, text)
        }
    }

    fn extension(&mut self, extension: &VendorExtension) -> XmlResult<()> {
        let attributes: Vec<(&str, &str)> = extension
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        if extension.children.is_empty() {
            if extension.text.is_empty() {
                self.empty_with(&extension.name, &attributes)
            } else {
                self.text_element_with(&extension.name, &attributes, &extension.text)
            }
        } else {
            self.start_with(&extension.name, &attributes)?;
            if !extension.text.is_empty() {
                self.text(&extension.text)?;
            }
            for child in &extension.children {
                self.extension(child)?;
                if !child.tail.is_empty() {
                    self.text(&child.tail)?;
                }
            }
            self.end(&extension.name)
        }
    }
}

impl<W: Write> XmlWriterExt for Writer<W> {
    fn start_with(&mut self, name: &str, attributes: &[(&str, &str)]) -> XmlResult<()> {
        let elem = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.write_event(Event::Start(elem))
            .map_err(|e| XmlError::write(name, e))
    }

    fn end(&mut self, name: &str) -> XmlResult<()> {
        self.write_event(Event::End(BytesEnd::new(name)))
            .map_err(|e| XmlError::write(name, e))
    }

    fn text_element_with(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
        text: &str,
    ) -> XmlResult<()> {
        self.start_with(name, attributes)?;
        self.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))
            .map_err(|e| XmlError::write(name, e))?;
        self.end(name)
    }

    fn empty_with(&mut self, name: &str, attributes: &[(&str, &str)]) -> XmlResult<()> {
        let elem = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.write_event(Event::Empty(elem))
            .map_err(|e| XmlError::write(name, e))
    }

    fn comment(&mut self, text: &str) -> XmlResult<()> {
        self.write_event(Event::Comment(BytesText::from_escaped(text)))
            .map_err(|e| XmlError::write("comment", e))
    }

    fn text(&mut self, text: &str) -> XmlResult<()> {
        self.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))
            .map_err(|e| XmlError::write("text", e))
    }
}
