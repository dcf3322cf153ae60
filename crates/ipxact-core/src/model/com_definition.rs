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

//! Kactus2 communication definitions.

use crate::vlnv::Vlnv;

/// Named property of a communication interface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComProperty {
    pub name: String,
    pub required: bool,
    pub property_type: String,
    pub default_value: String,
    pub description: String,
}

impl ComProperty {
    pub fn new(name: impl Into<String>, property_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            property_type: property_type.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComDefinition {
    pub vlnv: Vlnv,
    pub transfer_types: Vec<String>,
    pub properties: Vec<ComProperty>,
    pub top_comments: Vec<String>,
}

impl ComDefinition {
    pub fn new(vlnv: Vlnv) -> Self {
        Self {
            vlnv,
            ..Self::default()
        }
    }

    pub fn has_transfer_type(&self, name: &str) -> bool {
        self.transfer_types.iter().any(|t| t == name)
    }
}
