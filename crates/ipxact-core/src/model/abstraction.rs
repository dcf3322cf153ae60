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

//! Abstraction definitions and their logical ports.

use super::choice::Choice;
use super::parameter::Parameter;
use super::qualifier::Qualifier;
use crate::extension::VendorExtension;
use crate::name_group::NameGroup;
use crate::revision::Revision;
use crate::vlnv::Vlnv;

/// Constraints of a wire port in one interface mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WirePort {
    /// System group name; only used for `onSystem` ports.
    pub group: String,
    pub presence: String,
    pub width: String,
    /// `allBits` attribute of `width` (2022).
    pub all_bits: bool,
    pub direction: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WireAbstraction {
    pub qualifier: Qualifier,
    pub system_ports: Vec<WirePort>,
    /// `onMaster` in 2014, `onInitiator` in 2022.
    pub master_port: Option<WirePort>,
    /// `onSlave` in 2014, `onTarget` in 2022.
    pub slave_port: Option<WirePort>,
    pub default_value: String,
    pub requires_driver: bool,
    pub driver_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionalPort {
    pub group: String,
    pub presence: String,
    pub initiative: String,
    pub kind: String,
    /// Custom kind name when `kind` is `custom`.
    pub custom_kind: String,
    pub bus_width: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionalAbstraction {
    pub qualifier: Qualifier,
    pub system_ports: Vec<TransactionalPort>,
    pub master_port: Option<TransactionalPort>,
    pub slave_port: Option<TransactionalPort>,
}

/// A logical port of a bus abstraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortAbstraction {
    /// `name` holds the logical name.
    pub name_group: NameGroup,
    pub is_present: String,
    /// `match` flag of 2022 ports.
    pub match_: bool,
    pub wire: Option<WireAbstraction>,
    pub transactional: Option<TransactionalAbstraction>,
    pub vendor_extensions: Vec<VendorExtension>,
}

impl PortAbstraction {
    pub fn new(logical_name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(logical_name),
            ..Self::default()
        }
    }

    pub fn logical_name(&self) -> &str {
        &self.name_group.name
    }

    /// Wire or transactional qualifier.
    pub fn qualifier(&self) -> Option<&Qualifier> {
        self.wire
            .as_ref()
            .map(|w| &w.qualifier)
            .or_else(|| self.transactional.as_ref().map(|t| &t.qualifier))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assertion {
    pub name_group: NameGroup,
    pub assert: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbstractionDefinition {
    pub vlnv: Vlnv,
    pub revision: Revision,
    /// Display name and descriptions; `name` mirrors the VLNV name.
    pub name_group: NameGroup,
    pub bus_type: Vlnv,
    pub extends: Option<Vlnv>,
    pub ports: Vec<PortAbstraction>,
    /// 2022 only.
    pub choices: Vec<Choice>,
    pub parameters: Vec<Parameter>,
    pub assertions: Vec<Assertion>,
    pub vendor_extensions: Vec<VendorExtension>,
    /// `kactus2:version` vendor extension.
    pub kactus_version: String,
    pub top_comments: Vec<String>,
}

impl AbstractionDefinition {
    pub fn new(vlnv: Vlnv, revision: Revision) -> Self {
        Self {
            name_group: NameGroup::new(vlnv.name.clone()),
            vlnv,
            revision,
            ..Self::default()
        }
    }

    pub fn port(&self, logical_name: &str) -> Option<&PortAbstraction> {
        self.ports.iter().find(|p| p.logical_name() == logical_name)
    }
}
