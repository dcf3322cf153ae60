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

//! Components.

use super::address_space::AddressSpace;
use super::choice::Choice;
use super::com_definition::ComProperty;
use super::memory::MemoryMap;
use super::mode::Mode;
use super::parameter::Parameter;
use super::port::{Port, View};
use super::power_domain::PowerDomain;
use crate::extension::VendorExtension;
use crate::name_group::NameGroup;
use crate::revision::Revision;
use crate::vlnv::Vlnv;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    pub vlnv: Vlnv,
    pub revision: Revision,
    pub name_group: NameGroup,
    /// 2022 only.
    pub power_domains: Vec<PowerDomain>,
    /// 2022 only.
    pub modes: Vec<Mode>,
    pub address_spaces: Vec<AddressSpace>,
    pub memory_maps: Vec<MemoryMap>,
    pub views: Vec<View>,
    pub ports: Vec<Port>,
    pub choices: Vec<Choice>,
    pub parameters: Vec<Parameter>,
    pub vendor_extensions: Vec<VendorExtension>,
    pub kactus_version: String,
    /// `kactus2:properties`.
    pub properties: Vec<ComProperty>,
    pub top_comments: Vec<String>,
}

impl Component {
    pub fn new(vlnv: Vlnv, revision: Revision) -> Self {
        Self {
            name_group: NameGroup::new(vlnv.name.clone()),
            vlnv,
            revision,
            ..Self::default()
        }
    }

    pub fn address_space(&self, name: &str) -> Option<&AddressSpace> {
        self.address_spaces.iter().find(|s| s.name() == name)
    }

    pub fn memory_map(&self, name: &str) -> Option<&MemoryMap> {
        self.memory_maps.iter().find(|m| m.name() == name)
    }

    pub fn view(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|v| v.name() == name)
    }

    pub fn port(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.name() == name)
    }

    pub fn has_view(&self, name: &str) -> bool {
        self.view(name).is_some()
    }

    /// Every parameter declared directly in the component.
    pub fn parameter_ids(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters
            .iter()
            .filter(|p| !p.value_id.is_empty())
            .map(|p| (p.value_id.as_str(), p.value.as_str()))
    }
}
