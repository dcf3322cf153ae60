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

//! Port qualifiers.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Semantic tag of a port. Declaration order is the schema's element order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QualifierType {
    Address,
    Data,
    Clock,
    Reset,
    Valid,
    Interrupt,
    ClockEnable,
    PowerEnable,
    Opcode,
    Protection,
    FlowControl,
    User,
    Request,
    Response,
}

impl QualifierType {
    pub const ALL: [QualifierType; 14] = [
        QualifierType::Address,
        QualifierType::Data,
        QualifierType::Clock,
        QualifierType::Reset,
        QualifierType::Valid,
        QualifierType::Interrupt,
        QualifierType::ClockEnable,
        QualifierType::PowerEnable,
        QualifierType::Opcode,
        QualifierType::Protection,
        QualifierType::FlowControl,
        QualifierType::User,
        QualifierType::Request,
        QualifierType::Response,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Local name of the qualifier element, e.g. `isClockEn`.
    pub fn element_name(self) -> &'static str {
        match self {
            QualifierType::Address => "isAddress",
            QualifierType::Data => "isData",
            QualifierType::Clock => "isClock",
            QualifierType::Reset => "isReset",
            QualifierType::Valid => "isValid",
            QualifierType::Interrupt => "isInterrupt",
            QualifierType::ClockEnable => "isClockEn",
            QualifierType::PowerEnable => "isPowerEn",
            QualifierType::Opcode => "isOpcode",
            QualifierType::Protection => "isProtection",
            QualifierType::FlowControl => "isFlowControl",
            QualifierType::User => "isUser",
            QualifierType::Request => "isRequest",
            QualifierType::Response => "isResponse",
        }
    }

    pub fn from_element_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.element_name() == name)
    }

    /// Attributes carried on this type's element, with their XML names.
    pub fn attributes(self) -> &'static [(QualifierAttribute, &'static str)] {
        match self {
            QualifierType::Reset => &[(QualifierAttribute::ResetLevel, "level")],
            QualifierType::ClockEnable => &[(QualifierAttribute::ClockEnableLevel, "level")],
            QualifierType::PowerEnable => &[
                (QualifierAttribute::PowerEnableLevel, "level"),
                (QualifierAttribute::PowerDomainReference, "powerDomainRef"),
            ],
            QualifierType::FlowControl => &[
                (QualifierAttribute::FlowType, "flowType"),
                (QualifierAttribute::UserFlowType, "user"),
            ],
            QualifierType::User => &[(QualifierAttribute::UserDefined, "user")],
            _ => &[],
        }
    }
}

impl fmt::Display for QualifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}

/// Keyed values attached to qualifier types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QualifierAttribute {
    ResetLevel,
    ClockEnableLevel,
    PowerEnableLevel,
    PowerDomainReference,
    FlowType,
    UserFlowType,
    UserDefined,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Qualifier {
    types: BTreeSet<QualifierType>,
    attributes: BTreeMap<QualifierAttribute, String>,
}

impl Qualifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, qualifier_type: QualifierType) -> Self {
        self.set_type(qualifier_type);
        self
    }

    pub fn set_type(&mut self, qualifier_type: QualifierType) {
        self.types.insert(qualifier_type);
    }

    pub fn remove_type(&mut self, qualifier_type: QualifierType) {
        self.types.remove(&qualifier_type);
    }

    pub fn has_type(&self, qualifier_type: QualifierType) -> bool {
        self.types.contains(&qualifier_type)
    }

    /// Set types in schema order.
    pub fn types(&self) -> impl Iterator<Item = QualifierType> + '_ {
        self.types.iter().copied()
    }

    /// True when at least one type is set.
    pub fn is_set(&self) -> bool {
        !self.types.is_empty()
    }

    pub fn clear(&mut self) {
        self.types.clear();
        self.attributes.clear();
    }

    /// Set an attribute; an empty value removes it.
    pub fn set_attribute(&mut self, attribute: QualifierAttribute, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.attributes.remove(&attribute);
        } else {
            self.attributes.insert(attribute, value);
        }
    }

    /// Attribute value, empty when unset.
    pub fn attribute(&self, attribute: QualifierAttribute) -> &str {
        self.attributes
            .get(&attribute)
            .map(String::as_str)
            .unwrap_or("")
    }
}
