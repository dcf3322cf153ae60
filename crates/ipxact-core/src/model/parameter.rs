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

//! Parameters and their vector/array bounds.

use crate::extension::VendorExtension;
use crate::name_group::NameGroup;

/// A `[left:right]` bit vector, optionally identified in 2022 documents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub id: String,
    pub left: String,
    pub right: String,
}

impl Vector {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            left: left.into(),
            right: right.into(),
        }
    }
}

/// An unpacked array dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Array {
    pub id: String,
    pub left: String,
    pub right: String,
}

impl Array {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            left: left.into(),
            right: right.into(),
        }
    }
}

/// A named, typed expression value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name_group: NameGroup,
    /// `parameterId`, the key other expressions use to reference this value.
    pub value_id: String,
    pub value: String,
    pub parameter_type: String,
    pub prompt: String,
    pub resolve: String,
    pub choice_ref: String,
    pub order: String,
    pub minimum: String,
    pub maximum: String,
    pub sign: String,
    pub unit: String,
    pub vectors: Vec<Vector>,
    pub arrays: Vec<Array>,
    pub vendor_extensions: Vec<VendorExtension>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.value_id = id.into();
        self
    }

    pub fn with_type(mut self, parameter_type: impl Into<String>) -> Self {
        self.parameter_type = parameter_type.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }

    /// Left bound of the first vector, empty when there is none.
    pub fn vector_left(&self) -> &str {
        self.vectors.first().map(|v| v.left.as_str()).unwrap_or("")
    }

    pub fn vector_right(&self) -> &str {
        self.vectors.first().map(|v| v.right.as_str()).unwrap_or("")
    }

    /// Replace the first vector's bounds, creating it when needed.
    pub fn set_vector(&mut self, left: impl Into<String>, right: impl Into<String>) {
        match self.vectors.first_mut() {
            Some(vector) => {
                vector.left = left.into();
                vector.right = right.into();
            }
            None => self.vectors.push(Vector::new(left, right)),
        }
    }

    pub fn array_left(&self) -> &str {
        self.arrays.first().map(|a| a.left.as_str()).unwrap_or("")
    }

    pub fn array_right(&self) -> &str {
        self.arrays.first().map(|a| a.right.as_str()).unwrap_or("")
    }
}
