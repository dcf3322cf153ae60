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

//! Component ports and views.

use super::parameter::{Array, Vector};
use crate::extension::VendorExtension;
use crate::name_group::NameGroup;

/// A view of the component model, referenced by type definitions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct View {
    pub name_group: NameGroup,
    pub env_identifiers: Vec<String>,
}

impl View {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            env_identifiers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }
}

/// HDL type of a wire, valid in the listed views.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WireTypeDef {
    pub type_name: String,
    pub constrained: bool,
    pub type_definitions: Vec<String>,
    pub view_refs: Vec<String>,
}

impl WireTypeDef {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    pub fn with_view(mut self, view: impl Into<String>) -> Self {
        self.view_refs.push(view.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wire {
    pub all_logical_directions_allowed: bool,
    pub direction: String,
    pub vectors: Vec<Vector>,
    pub type_defs: Vec<WireTypeDef>,
    /// Driver default value; empty when the wire has no driver.
    pub default_value: String,
}

impl Wire {
    pub fn new(direction: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transactional {
    pub all_logical_initiatives_allowed: bool,
    pub initiative: String,
    pub kind: String,
    pub bus_width: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Port {
    pub name_group: NameGroup,
    pub is_present: String,
    pub wire: Option<Wire>,
    pub transactional: Option<Transactional>,
    pub arrays: Vec<Array>,
    pub vendor_extensions: Vec<VendorExtension>,
}

impl Port {
    pub fn wire(name: impl Into<String>, wire: Wire) -> Self {
        Self {
            name_group: NameGroup::new(name),
            wire: Some(wire),
            ..Self::default()
        }
    }

    pub fn transactional(name: impl Into<String>, transactional: Transactional) -> Self {
        Self {
            name_group: NameGroup::new(name),
            transactional: Some(transactional),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }

    /// `left` and `right` of the wire's first vector, if any.
    pub fn vector_bounds(&self) -> Option<(&str, &str)> {
        self.wire
            .as_ref()
            .and_then(|wire| wire.vectors.first())
            .map(|v| (v.left.as_str(), v.right.as_str()))
    }
}
