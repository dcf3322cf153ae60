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

//! Kactus2 API definitions.

use crate::vlnv::Vlnv;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApiReturnValue {
    pub value_type: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApiFunctionParameter {
    pub name: String,
    pub value_type: String,
    /// Transfer type of the COM definition the value maps to.
    pub com_transfer_type: String,
    pub description: String,
}

impl ApiFunctionParameter {
    pub fn new(name: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: value_type.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApiFunction {
    pub name: String,
    pub description: String,
    pub return_value: Option<ApiReturnValue>,
    pub parameters: Vec<ApiFunctionParameter>,
}

impl ApiFunction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApiDefinition {
    pub vlnv: Vlnv,
    pub language: String,
    pub com_definition_ref: Option<Vlnv>,
    pub data_types: Vec<String>,
    pub functions: Vec<ApiFunction>,
    pub top_comments: Vec<String>,
}

impl ApiDefinition {
    pub fn new(vlnv: Vlnv) -> Self {
        Self {
            vlnv,
            ..Self::default()
        }
    }

    pub fn has_data_type(&self, name: &str) -> bool {
        self.data_types.iter().any(|t| t == name)
    }
}
