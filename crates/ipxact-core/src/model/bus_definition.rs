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

//! Bus definitions.

use super::choice::Choice;
use super::parameter::Parameter;
use crate::extension::VendorExtension;
use crate::name_group::NameGroup;
use crate::revision::Revision;
use crate::vlnv::Vlnv;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusDefinition {
    pub vlnv: Vlnv,
    pub revision: Revision,
    pub name_group: NameGroup,
    pub direct_connection: String,
    pub broadcast: String,
    pub is_addressable: String,
    pub extends: Option<Vlnv>,
    /// `maxMasters` in 2014, `maxInitiators` in 2022.
    pub max_initiators: String,
    /// `maxSlaves` in 2014, `maxTargets` in 2022.
    pub max_targets: String,
    pub system_group_names: Vec<String>,
    pub choices: Vec<Choice>,
    pub parameters: Vec<Parameter>,
    pub vendor_extensions: Vec<VendorExtension>,
    pub kactus_version: String,
    pub top_comments: Vec<String>,
}

impl BusDefinition {
    pub fn new(vlnv: Vlnv, revision: Revision) -> Self {
        Self {
            name_group: NameGroup::new(vlnv.name.clone()),
            vlnv,
            revision,
            ..Self::default()
        }
    }
}
